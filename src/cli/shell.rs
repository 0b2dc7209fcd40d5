//! Line-oriented editing shell over a template store.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::editor::{DragController, TemplateStore, apply_style};
use crate::error::TemplateError;
use crate::template::{ComponentId, Document};

use super::command::{ComponentRef, HELP, ShellCommand};

/// What the shell loop should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(Option<String>),
    Quit,
}

/// Editing shell state kept across lines
#[derive(Debug, Default)]
pub struct Shell {
    dnd: DragController,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read commands from `input` until EOF or `quit`, writing replies to `output`
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        store: &mut TemplateStore,
        input: R,
        mut output: W,
    ) -> Result<(), TemplateError> {
        for line in input.lines() {
            let line = line?;
            let command = match ShellCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            };
            match self.execute(store, command) {
                Ok(Outcome::Continue(Some(reply))) => writeln!(output, "{}", reply)?,
                Ok(Outcome::Continue(None)) => {}
                Ok(Outcome::Quit) => break,
                Err(e) => writeln!(output, "error: {}", e)?,
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Apply one command to `store`
    pub fn execute(
        &mut self,
        store: &mut TemplateStore,
        command: ShellCommand,
    ) -> Result<Outcome, TemplateError> {
        debug!("Shell command {:?}", command);
        let reply = match command {
            ShellCommand::Add { kind, position } => {
                let id = store.add_element(kind, position);
                Some(format!("added {} {}", kind, id))
            }
            ShellCommand::Remove(target) => {
                let id = resolve(store, target)?;
                store.remove_element(&id);
                None
            }
            ShellCommand::Move { from, to } => {
                store.reorder_element(from, to);
                None
            }
            ShellCommand::Duplicate(target) => {
                let id = resolve(store, target)?;
                store
                    .duplicate_element(&id)
                    .map(|copy| format!("duplicated as {}", copy))
            }
            ShellCommand::Select(target) => {
                let id = target.map(|t| resolve(store, t)).transpose()?;
                store.select_element(id.as_ref());
                store
                    .selected_element()
                    .map(|c| format!("selected {} {}", c.kind(), c.id()))
            }
            ShellCommand::View(mode) => {
                store.switch_view_mode(mode);
                None
            }
            ShellCommand::Set { target, patch } => {
                let id = resolve(store, target)?;
                store.update_element(&id, patch);
                None
            }
            ShellCommand::Style { property, value } => {
                apply_style(store, &property, value);
                None
            }
            ShellCommand::Canvas(patch) => {
                store.update_canvas_style(patch);
                None
            }
            ShellCommand::AddPlaceholder(placeholder) => {
                store.add_placeholder(placeholder);
                None
            }
            ShellCommand::RemovePlaceholder(key) => {
                store.remove_placeholder(&key);
                None
            }
            ShellCommand::Name(name) => {
                store.set_name(name);
                None
            }
            ShellCommand::Drop { source, target } => {
                self.dnd.drag_start(store, source.clone());
                self.dnd
                    .drag_end(store, &source, target.as_ref())
                    .map(|id| format!("added {}", id))
            }
            ShellCommand::Undo => {
                if !store.can_undo() {
                    Some("nothing to undo".to_string())
                } else {
                    store.undo();
                    None
                }
            }
            ShellCommand::Redo => {
                if !store.can_redo() {
                    Some("nothing to redo".to_string())
                } else {
                    store.redo();
                    None
                }
            }
            ShellCommand::Reset => {
                store.reset_template();
                None
            }
            ShellCommand::List => Some(list(store)),
            ShellCommand::Show => Some(show(store.document())?),
            ShellCommand::Help => Some(HELP.to_string()),
            ShellCommand::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(reply))
    }
}

fn resolve(store: &TemplateStore, target: ComponentRef) -> Result<ComponentId, TemplateError> {
    match target {
        ComponentRef::Id(id) => Ok(ComponentId::from(id)),
        ComponentRef::Index(index) => store
            .components()
            .get(index)
            .map(|c| c.id().clone())
            .ok_or_else(|| TemplateError::Usage(format!("no component at #{}", index))),
    }
}

/// One line per component in render order, selection marked with `*`
pub fn list(store: &TemplateStore) -> String {
    let mut out = format!(
        "{} [{}] undo:{} redo:{}",
        store.name(),
        store.view_mode(),
        store.undo_count(),
        store.redo_count()
    );
    let selected = store.selected_element().map(|c| c.id().clone());
    for (index, component) in store.components().iter().enumerate() {
        let marker = if selected.as_ref() == Some(component.id()) {
            '*'
        } else {
            ' '
        };
        let _ = write!(
            out,
            "\n{}#{:<3} {:<10} {}",
            marker,
            index,
            component.kind().as_str(),
            component.id()
        );
        if let Some(content) = &component.content {
            let _ = write!(out, "  {:?}", content);
        }
    }
    out
}

pub fn show(doc: &Document) -> Result<String, TemplateError> {
    Ok(serde_json::to_string_pretty(doc)?)
}
