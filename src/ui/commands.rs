//! Terminal command parsing.

use crate::types::errors::CommandError;

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Refresh,
    /// Empty text clears the search.
    Search(String),
    Tag(String),
    ClearTag,
    Add,
    Edit(String),
    Delete(String),
    Config(ConfigAction),
    Help,
    Quit,
}

/// `config` subcommands over the persisted settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    /// `value` is raw text; JSON if it parses, otherwise a string.
    Set { key: String, value: String },
    Reset,
}

pub const HELP: &str = "\
Commands:
  list | ls           show bookmarks matching the search
  refresh             refetch from the server
  search <text>       filter by title or URL (no text clears)
  tag <name>          filter by tag
  clear               clear the tag filter
  add                 create a bookmark
  edit <id>           change a bookmark's title
  delete <id> | rm    delete a bookmark
  config              show saved settings
  config <key> <val>  change a saved setting
  config reset        restore default settings
  help                this text
  quit | exit         leave";

/// Parses a line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let required = |name: &str| -> Result<String, CommandError> {
        if rest.is_empty() {
            Err(CommandError::MissingArgument(name.to_string()))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word.to_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "refresh" => Command::Refresh,
        "search" => Command::Search(rest.to_string()),
        "tag" => Command::Tag(required("tag")?.to_lowercase()),
        "clear" => Command::ClearTag,
        "add" => Command::Add,
        "edit" => Command::Edit(required("edit")?),
        "delete" | "rm" => Command::Delete(required("delete")?),
        "config" => Command::Config(parse_config(rest)?),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_config(rest: &str) -> Result<ConfigAction, CommandError> {
    if rest.is_empty() {
        return Ok(ConfigAction::Show);
    }
    if rest.eq_ignore_ascii_case("reset") {
        return Ok(ConfigAction::Reset);
    }
    match rest.split_once(char::is_whitespace) {
        Some((key, value)) if !value.trim().is_empty() => Ok(ConfigAction::Set {
            key: key.to_string(),
            value: value.trim().to_string(),
        }),
        _ => Err(CommandError::MissingArgument("config".to_string())),
    }
}
