use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Select(Option<PathBuf>),
    Question(String),
    Upload,
    Ask(Option<String>),
    Reset,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "" => Command::Empty,
        "select" | "pick" => {
            if rest.is_empty() {
                Command::Select(None)
            } else {
                Command::Select(Some(PathBuf::from(unquote(rest))))
            }
        }
        "question" | "q" => Command::Question(rest.to_string()),
        "upload" => Command::Upload,
        "ask" => {
            if rest.is_empty() {
                Command::Ask(None)
            } else {
                Command::Ask(Some(rest.to_string()))
            }
        }
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text.strip_prefix(quote).and_then(|t| t.strip_suffix(quote)) {
            return inner;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_select_with_and_without_path() {
        assert_eq!(parse("select"), Command::Select(None));
        assert_eq!(
            parse("select  \"My Docs/report.pdf\" "),
            Command::Select(Some(PathBuf::from("My Docs/report.pdf")))
        );
    }

    #[test]
    fn keeps_question_text_verbatim() {
        assert_eq!(
            parse("question What is   covered?"),
            Command::Question("What is   covered?".to_string())
        );
        assert_eq!(parse("question"), Command::Question(String::new()));
        assert_eq!(parse("ASK who signed it?"), Command::Ask(Some("who signed it?".to_string())));
        assert_eq!(parse("ask"), Command::Ask(None));
    }

    #[test]
    fn recognizes_the_rest() {
        assert_eq!(parse("   "), Command::Empty);
        assert_eq!(parse("upload"), Command::Upload);
        assert_eq!(parse("reset"), Command::Reset);
        assert_eq!(parse("exit"), Command::Quit);
        assert_eq!(parse("frobnicate now"), Command::Unknown("frobnicate now".to_string()));
    }
}
