//! Command-line front end standing in for the editor UI.
//!
//! ## Module Structure
//!
//! - [`command`] - Parsing shell input into commands
//! - [`shell`] - Executing commands against a store

pub mod command;
pub mod shell;


pub use command::{ComponentRef, HELP, ShellCommand};
pub use shell::{Outcome, Shell, list, show};
