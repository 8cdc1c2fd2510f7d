use doclens_core::Msg;
use thiserror::Error;

/// One line of user input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pure edit, forwarded to `update`.
    Edit(Msg),
    Submit,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for the list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("question numbers start at 1, got {0:?}")]
    BadNumber(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// Question numbers are 1-based on input and converted to slot indices.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }
    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    let command = match word.to_ascii_lowercase().as_str() {
        "url" | "doc" => Command::Edit(Msg::DocumentChanged(rest.trim().to_string())),
        "add" => Command::Edit(Msg::QuestionAdded),
        "q" | "question" => {
            let rest = rest.trim_start();
            let (number, text) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            if number.is_empty() {
                return Err(CommandError::Usage("q <n> <text>"));
            }
            Command::Edit(Msg::QuestionEdited {
                index: parse_number(number)?,
                text: text.to_string(),
            })
        }
        "rm" | "remove" => {
            let number = rest.trim();
            if number.is_empty() {
                return Err(CommandError::Usage("rm <n>"));
            }
            Command::Edit(Msg::QuestionRemoved(parse_number(number)?))
        }
        "submit" | "process" => Command::Submit,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_number(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(number) if number >= 1 => Ok(number - 1),
        _ => Err(CommandError::BadNumber(raw.to_string())),
    }
}
