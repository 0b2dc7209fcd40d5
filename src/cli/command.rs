//! Shell command parsing.

use serde_json::Value;

use crate::editor::{DragSource, DropTarget};
use crate::error::TemplateError;
use crate::template::{CanvasStylePatch, ComponentPatch, ComponentType, Placeholder, ViewMode};

/// A component reference typed at the prompt: a raw id or `#index`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRef {
    Id(String),
    Index(usize),
}

impl ComponentRef {
    fn parse(token: &str) -> Result<Self, TemplateError> {
        match token.strip_prefix('#') {
            Some(index) => index
                .parse()
                .map(ComponentRef::Index)
                .map_err(|_| TemplateError::Usage(format!("bad index {:?}", token))),
            None => Ok(ComponentRef::Id(token.to_string())),
        }
    }
}

/// One line of shell input
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Add {
        kind: ComponentType,
        position: Option<usize>,
    },
    Remove(ComponentRef),
    Move {
        from: usize,
        to: usize,
    },
    Duplicate(ComponentRef),
    Select(Option<ComponentRef>),
    View(ViewMode),
    Set {
        target: ComponentRef,
        patch: ComponentPatch,
    },
    Style {
        property: String,
        value: Value,
    },
    Canvas(CanvasStylePatch),
    AddPlaceholder(Placeholder),
    RemovePlaceholder(String),
    Name(String),
    Drop {
        source: DragSource,
        target: Option<DropTarget>,
    },
    Undo,
    Redo,
    Reset,
    List,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <type> [pos]          insert a component (append without pos)
  rm <ref>                  remove a component
  move <from> <to>          move a component between indices
  dup <ref>                 duplicate a component to the end
  select [ref]              select a component, or clear the selection
  view <desktop|mobile|code>
  set <ref> <json>          merge fields, e.g. set #0 {\"content\": \"Hi\"}
  style <property> <json>   set a style on the selection (or the canvas)
  canvas <json>             merge canvas style fields
  ph add <key> [description]
  ph rm <key>
  name <text>               rename the template
  drop <source> [target]    simulate a drag end (source new-<type> or an id)
  undo | redo | reset | list | show | help | quit
A <ref> is a component id or #index.";

fn usage(msg: &str) -> TemplateError {
    TemplateError::Usage(msg.to_string())
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn parse_index(token: &str) -> Result<usize, TemplateError> {
    token
        .parse()
        .map_err(|_| TemplateError::Usage(format!("expected an index, got {:?}", token)))
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, TemplateError> {
        let (word, rest) = split_word(line);
        if word.is_empty() || word.starts_with("//") {
            return Ok(None);
        }

        let command = match word {
            "add" => {
                let (kind, position) = split_word(rest);
                if kind.is_empty() {
                    return Err(usage("add <type> [pos]"));
                }
                let position = if position.is_empty() {
                    None
                } else {
                    Some(parse_index(position)?)
                };
                ShellCommand::Add {
                    kind: kind.parse()?,
                    position,
                }
            }
            "rm" | "remove" => {
                if rest.is_empty() {
                    return Err(usage("rm <ref>"));
                }
                ShellCommand::Remove(ComponentRef::parse(rest)?)
            }
            "move" | "mv" => {
                let (from, to) = split_word(rest);
                if to.is_empty() {
                    return Err(usage("move <from> <to>"));
                }
                ShellCommand::Move {
                    from: parse_index(from)?,
                    to: parse_index(to)?,
                }
            }
            "dup" | "duplicate" => {
                if rest.is_empty() {
                    return Err(usage("dup <ref>"));
                }
                ShellCommand::Duplicate(ComponentRef::parse(rest)?)
            }
            "select" => {
                if rest.is_empty() {
                    ShellCommand::Select(None)
                } else {
                    ShellCommand::Select(Some(ComponentRef::parse(rest)?))
                }
            }
            "view" => ShellCommand::View(rest.parse()?),
            "set" => {
                let (target, json) = split_word(rest);
                if json.is_empty() {
                    return Err(usage("set <ref> <json>"));
                }
                ShellCommand::Set {
                    target: ComponentRef::parse(target)?,
                    patch: serde_json::from_str(json)?,
                }
            }
            "style" => {
                let (property, json) = split_word(rest);
                if json.is_empty() {
                    return Err(usage("style <property> <json>"));
                }
                ShellCommand::Style {
                    property: property.to_string(),
                    value: serde_json::from_str(json)?,
                }
            }
            "canvas" => {
                if rest.is_empty() {
                    return Err(usage("canvas <json>"));
                }
                ShellCommand::Canvas(serde_json::from_str(rest)?)
            }
            "ph" | "placeholder" => {
                let (action, args) = split_word(rest);
                let (key, description) = split_word(args);
                if key.is_empty() {
                    return Err(usage("ph add|rm <key> [description]"));
                }
                match action {
                    "add" => ShellCommand::AddPlaceholder(Placeholder::new(key, description)),
                    "rm" | "remove" => ShellCommand::RemovePlaceholder(key.to_string()),
                    _ => return Err(usage("ph add|rm <key> [description]")),
                }
            }
            "name" => {
                if rest.is_empty() {
                    return Err(usage("name <text>"));
                }
                ShellCommand::Name(rest.to_string())
            }
            "drop" => {
                let (source, target) = split_word(rest);
                if source.is_empty() {
                    return Err(usage("drop <source> [target]"));
                }
                ShellCommand::Drop {
                    source: DragSource::parse(source)?,
                    target: (!target.is_empty()).then(|| DropTarget::parse(target)),
                }
            }
            "undo" => ShellCommand::Undo,
            "redo" => ShellCommand::Redo,
            "reset" => ShellCommand::Reset,
            "list" | "ls" => ShellCommand::List,
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(TemplateError::Usage(format!("unknown command {:?}", other))),
        };
        Ok(Some(command))
    }
}
