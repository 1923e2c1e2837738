//! Line commands accepted by an interactive session.

use std::str::FromStr;

use onboard_core::{Field, SessionStatus};

/// Help text listing every session command.
pub const HELP: &str = "\
## Commands

- `set <field> <value>`: fill in a field, e.g. `set email jane@example.com`
- `toggle <feature>`: select or deselect a feature, e.g. `toggle Contact Form`
- `next`: check this step and continue (on the review step, submit)
- `back`: return to the previous step
- `submit`: deliver the record from the review step
- `retry`: try a failed delivery again
- `cancel`: dismiss a failed delivery and return to the form
- `reset`: discard everything and start over
- `show`: show the current step
- `options [field]`: list the choices for a field
- `help`: show this list
- `quit`: leave the session
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Set { field: Field, value: String },
    Toggle(String),
    Next,
    Back,
    Submit,
    Retry,
    Cancel,
    Reset,
    Show,
    Options(Option<String>),
    Help,
    Quit,
}

impl SessionCommand {
    /// Whether the command makes sense while the session is in `status`.
    ///
    /// Once delivered, only `reset` starts a new record; after a failure
    /// the form is locked until `retry` or `cancel`.
    pub fn allowed_in(&self, status: SessionStatus) -> bool {
        match self {
            Self::Show | Self::Options(_) | Self::Help | Self::Quit | Self::Reset => true,
            Self::Retry | Self::Cancel => status == SessionStatus::Error,
            Self::Set { .. } | Self::Toggle(_) | Self::Next | Self::Back | Self::Submit => {
                status == SessionStatus::Idle
            }
        }
    }
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "set" => {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                if name.is_empty() {
                    return Err("Usage: set <field> <value>".to_string());
                }
                let field = name.parse::<Field>().map_err(|e| e.to_string())?;
                Self::Set {
                    field,
                    value: value.to_string(),
                }
            }
            "toggle" => {
                if rest.is_empty() {
                    return Err("Usage: toggle <feature>".to_string());
                }
                Self::Toggle(rest.to_string())
            }
            "next" | "n" => Self::Next,
            "back" | "b" => Self::Back,
            "submit" => Self::Submit,
            "retry" => Self::Retry,
            "cancel" => Self::Cancel,
            "reset" => Self::Reset,
            "show" | "s" => Self::Show,
            "options" | "o" => Self::Options((!rest.is_empty()).then(|| rest.to_string())),
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => {
                return Err(format!(
                    "Unknown command: {verb}. Type `help` for the list of commands."
                ))
            }
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_keeps_value_spaces() {
        let command: SessionCommand = "set business_name  Doe Bakes & Co ".parse().unwrap();
        assert_eq!(
            command,
            SessionCommand::Set {
                field: Field::BusinessName,
                value: "Doe Bakes & Co".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_without_value_clears() {
        let command: SessionCommand = "set currentUrl".parse().unwrap();
        assert_eq!(
            command,
            SessionCommand::Set {
                field: Field::CurrentUrl,
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("set".parse::<SessionCommand>().is_err());
        assert!("set nickname Jay".parse::<SessionCommand>().is_err());
        assert!("toggle".parse::<SessionCommand>().is_err());

        let err = "dance".parse::<SessionCommand>().unwrap_err();
        assert!(err.contains("Unknown command: dance"));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("NEXT".parse::<SessionCommand>(), Ok(SessionCommand::Next));
        assert_eq!("toggle Blog / News".parse(), Ok(SessionCommand::Toggle("Blog / News".to_string())));
        assert_eq!("options".parse(), Ok(SessionCommand::Options(None)));
        assert_eq!(
            "options budget".parse(),
            Ok(SessionCommand::Options(Some("budget".to_string())))
        );
        assert_eq!("quit".parse(), Ok(SessionCommand::Quit));
    }

    #[test]
    fn test_allowed_in_status() {
        assert!(SessionCommand::Next.allowed_in(SessionStatus::Idle));
        assert!(!SessionCommand::Next.allowed_in(SessionStatus::Success));
        assert!(!SessionCommand::Next.allowed_in(SessionStatus::Error));
        assert!(SessionCommand::Retry.allowed_in(SessionStatus::Error));
        assert!(!SessionCommand::Retry.allowed_in(SessionStatus::Idle));
        assert!(SessionCommand::Reset.allowed_in(SessionStatus::Success));
    }
}
