use feed_core::{FeedFilter, ItemCount, Msg, UnknownFilter};
use thiserror::Error;

pub const HELP: &str = "commands: refresh | filter <date|rating|read> | read <id> | all | seen <n> | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("not a count: {0:?}")]
    BadCount(String),
    #[error(transparent)]
    BadFilter(#[from] UnknownFilter),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match head.to_ascii_lowercase().as_str() {
        "refresh" => Command::Dispatch(Msg::RefreshClicked),
        "all" | "toggle" => Command::Dispatch(Msg::ToggleAllClicked),
        "filter" => {
            let raw = arg.ok_or(CommandError::MissingArgument("filter"))?;
            let filter: FeedFilter = raw.parse()?;
            Command::Dispatch(Msg::FilterChanged(filter))
        }
        "read" => {
            let item_id = arg.ok_or(CommandError::MissingArgument("read"))?;
            Command::Dispatch(Msg::MarkReadClicked {
                item_id: item_id.to_string(),
            })
        }
        "seen" => {
            let raw = arg.ok_or(CommandError::MissingArgument("seen"))?;
            let num: ItemCount = raw
                .parse()
                .map_err(|_| CommandError::BadCount(raw.to_string()))?;
            Command::Dispatch(Msg::SetNumItemsSeen(num))
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(head.to_string())),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t"), Ok(None));
    }

    #[test]
    fn parses_feed_commands() {
        assert_eq!(
            parse_line("refresh"),
            Ok(Some(Command::Dispatch(Msg::RefreshClicked)))
        );
        assert_eq!(
            parse_line("  ALL "),
            Ok(Some(Command::Dispatch(Msg::ToggleAllClicked)))
        );
        assert_eq!(
            parse_line("read 1"),
            Ok(Some(Command::Dispatch(Msg::MarkReadClicked {
                item_id: "1".to_string()
            })))
        );
        assert_eq!(
            parse_line("filter rating"),
            Ok(Some(Command::Dispatch(Msg::FilterChanged(
                FeedFilter::Rating
            ))))
        );
        assert_eq!(parse_line("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse_line("help"), Ok(Some(Command::Help)));
    }

    #[test]
    fn seen_accepts_any_integer() {
        assert_eq!(
            parse_line("seen 1000"),
            Ok(Some(Command::Dispatch(Msg::SetNumItemsSeen(1000))))
        );
        assert_eq!(
            parse_line("seen -3"),
            Ok(Some(Command::Dispatch(Msg::SetNumItemsSeen(-3))))
        );
        assert_eq!(
            parse_line("seen many"),
            Err(CommandError::BadCount("many".to_string()))
        );
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            parse_line("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!(
            parse_line("read"),
            Err(CommandError::MissingArgument("read"))
        );
        assert!(matches!(
            parse_line("filter popular"),
            Err(CommandError::BadFilter(_))
        ));
    }
}
