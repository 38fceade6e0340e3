//! Line protocol for the interactive session
//!
//! One command per line on stdin. Clue and suspect targets are either a
//! 1-based display index or a catalog key; resolution against the
//! catalog happens in the command layer.
//!
//! Commands:
//! - `p|a|u <clue>`  mark present / absent / unknown
//! - `c <clue>`      cycle the mark
//! - `clear`         reset every mark
//! - `show <suspect>` show one suspect's detail
//! - `lang <tag|none>` set or clear the locale override
//! - `reload`        fetch and install the catalog again
//! - `help`, `quit`

use std::io::{self, BufRead, Write};

use super::errors::CliResult;

/// One parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Mark a clue present (`p <clue>`)
    MarkPresent(String),
    /// Mark a clue absent (`a <clue>`)
    MarkAbsent(String),
    /// Mark a clue unknown (`u <clue>`)
    MarkUnknown(String),
    /// Cycle a clue's mark (`c <clue>`)
    Cycle(String),
    /// Reset every mark (`clear`)
    Clear,
    /// Show one suspect's detail (`show <suspect>`)
    Show(String),
    /// Set or clear the locale override (`lang <tag|none>`)
    Lang(Option<String>),
    /// Fetch and install the catalog again (`reload`)
    Reload,
    /// Print command help (`help`)
    Help,
    /// End the session (`quit`)
    Quit,
}

/// Parse one input line; `Err` carries a user-facing message
pub fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().ok_or("empty command")?;
    let target = parts.next();
    let rest = parts.next();

    if rest.is_some() {
        return Err(format!("too many arguments for '{}'", verb));
    }

    let require_target = |name: &str| -> Result<String, String> {
        target
            .map(str::to_string)
            .ok_or_else(|| format!("'{}' needs a clue or suspect", name))
    };

    match verb {
        "p" => Ok(SessionCommand::MarkPresent(require_target("p")?)),
        "a" => Ok(SessionCommand::MarkAbsent(require_target("a")?)),
        "u" => Ok(SessionCommand::MarkUnknown(require_target("u")?)),
        "c" => Ok(SessionCommand::Cycle(require_target("c")?)),
        "clear" => no_target(target, SessionCommand::Clear),
        "show" => Ok(SessionCommand::Show(require_target("show")?)),
        "lang" => match target {
            Some("none") => Ok(SessionCommand::Lang(None)),
            Some(tag) => Ok(SessionCommand::Lang(Some(tag.to_string()))),
            None => Err("'lang' needs a tag or 'none'".to_string()),
        },
        "reload" => no_target(target, SessionCommand::Reload),
        "help" | "?" => no_target(target, SessionCommand::Help),
        "quit" | "q" | "exit" => no_target(target, SessionCommand::Quit),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

fn no_target(target: Option<&str>, command: SessionCommand) -> Result<SessionCommand, String> {
    match target {
        Some(_) => Err("this command takes no argument".to_string()),
        None => Ok(command),
    }
}

/// Write the session prompt without a trailing newline
pub fn write_prompt(phase: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "[{}]> ", phase)?;
    stdout.flush()?;
    Ok(())
}

/// Read one line from stdin; `None` on end of input
pub fn read_line() -> CliResult<Option<String>> {
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// The help text for the line protocol
pub const HELP_TEXT: &str = "\
commands:
  p <clue>        mark a clue present (again to clear)
  a <clue>        mark a clue absent (again to clear)
  u <clue>        mark a clue unknown
  c <clue>        cycle unknown -> present -> absent
  clear           reset every clue to unknown
  show <suspect>  show a suspect's details
  lang <tag|none> set or clear the locale override
  reload          fetch the catalog again
  quit            end the session
clues and suspects accept a list number or a key";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mark_commands() {
        assert_eq!(
            parse_command("p emf5"),
            Ok(SessionCommand::MarkPresent("emf5".to_string()))
        );
        assert_eq!(
            parse_command("a 3"),
            Ok(SessionCommand::MarkAbsent("3".to_string()))
        );
        assert_eq!(
            parse_command("u orbs"),
            Ok(SessionCommand::MarkUnknown("orbs".to_string()))
        );
        assert_eq!(
            parse_command("c 1"),
            Ok(SessionCommand::Cycle("1".to_string()))
        );
    }

    #[test]
    fn test_parse_lang() {
        assert_eq!(
            parse_command("lang fr-CA"),
            Ok(SessionCommand::Lang(Some("fr-CA".to_string())))
        );
        assert_eq!(parse_command("lang none"), Ok(SessionCommand::Lang(None)));
        assert!(parse_command("lang").is_err());
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse_command("clear"), Ok(SessionCommand::Clear));
        assert_eq!(parse_command("reload"), Ok(SessionCommand::Reload));
        assert_eq!(parse_command("quit"), Ok(SessionCommand::Quit));
        assert_eq!(parse_command("q"), Ok(SessionCommand::Quit));
        assert_eq!(parse_command("help"), Ok(SessionCommand::Help));
    }

    #[test]
    fn test_parse_rejects_missing_target() {
        assert!(parse_command("p").is_err());
        assert!(parse_command("show").is_err());
    }

    #[test]
    fn test_parse_rejects_extra_arguments() {
        assert!(parse_command("p emf5 extra").is_err());
        assert!(parse_command("clear now").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_verb() {
        assert!(parse_command("dance").is_err());
        assert!(parse_command("").is_err());
    }
}
