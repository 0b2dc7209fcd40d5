//! # Mailforged CLI
//!
//! ```bash
//! # Edit the saved template interactively (or from a script on stdin)
//! mailforged edit
//!
//! # Print the saved template as JSON
//! mailforged show
//!
//! # Move templates in and out of storage
//! mailforged export welcome.json
//! mailforged import welcome.json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mailforged::{
    EditorSession, TemplateError,
    cli::{Shell, show},
    config::{AppConfigData, load_config, save_config},
    paths,
    persistence::{FileStore, export_template, import_template, persist},
};

/// Mailforged - email template editor
#[derive(Parser, Debug)]
#[command(name = "mailforged")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the storage directory from the config
    #[arg(long, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Edit the saved template, reading commands from stdin
    Edit,
    /// Print the saved template as JSON
    Show,
    /// Write the saved template to a file
    Export {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Replace the saved template with one read from a file
    Import {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Replace the saved template with the default
    Reset,
}

/// Set up console and file logging
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use tracing_subscriber::prelude::*;

    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory");
        return None;
    }

    let log_file_path = logs_dir.join("mailforged.log");

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    let file_appender = tracing_appender::rolling::never(&logs_dir, "mailforged.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // Stdout carries shell replies, so console logging goes to stderr
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,mailforged=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Some(guard)
}

fn main() {
    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TemplateError> {
    let cli = Cli::parse();

    paths::ensure_directories()?;
    let config_path = cli.config.unwrap_or_else(paths::config_file);
    let loaded = load_config(&config_path);
    if let Some(reason) = &loaded.reset_reason {
        eprintln!("Warning: {}; using default settings", reason);
    }
    let mut config = loaded.config;
    if loaded.reset_reason.is_none() && !config_path.exists() {
        config.dirty = true;
    }
    if config.dirty {
        save_config(&mut config)?;
    }

    let mut data = config.data;
    if let Some(dir) = cli.storage_dir {
        data.storage_dir = Some(dir);
    }

    match cli.command {
        Commands::Edit => {
            let mut session = EditorSession::open(&data);
            if let Some(warning) = &session.restore_warning {
                eprintln!("Warning: {}", warning);
            }
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Shell::new().run(&mut session.store, stdin.lock(), stdout.lock())?;
        }
        Commands::Show => {
            let doc = EditorSession::peek(&data)?;
            println!("{}", show(&doc)?);
        }
        Commands::Export { path } => {
            let doc = EditorSession::peek(&data)?;
            export_template(&doc, &path)?;
            println!("Exported {:?} to {}", doc.name(), path.display());
        }
        Commands::Import { path } => {
            let doc = import_template(&path)?;
            let mut session = EditorSession::open(&data);
            session.store.load_template(doc);
            if !data.autosave {
                persist_now(&data, &session)?;
            }
            println!("Imported {:?}", session.store.name());
        }
        Commands::Reset => {
            let mut session = EditorSession::open(&data);
            session.store.reset_template();
            if !data.autosave {
                persist_now(&data, &session)?;
            }
            println!("Template reset");
        }
    }

    Ok(())
}

/// Explicit write for one-shot commands when auto-save is off
fn persist_now(data: &AppConfigData, session: &EditorSession) -> Result<(), TemplateError> {
    let mut storage = FileStore::new(data.storage_dir());
    persist(&mut storage, &data.storage_key, session.store.document())
}
