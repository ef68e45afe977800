use pdf_qa::{Notification, Session};

const HEADER: &str = "PDF Uploader";

pub const HELP: &str = "\
Commands:
  select <path>      choose a PDF document
  upload             upload the selected document
  question <text>    type your question
  ask [text]         ask the question (optionally typing it first)
  reset              clear everything
  help               show this help
  quit               leave";

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[ {} ]", label)
    } else {
        format!("[ {} (disabled) ]", label)
    }
}

/// Renders the whole screen for the current session.
pub fn render(session: &Session) -> String {
    let mut out = String::new();

    out.push_str(&format!("==== {} ====\n", HEADER));
    out.push_str(&session.title());
    out.push('\n');
    if !session.hint().is_empty() {
        out.push_str(session.hint());
        out.push('\n');
    }
    out.push_str(&format!(
        "{} {} {}\n",
        button("Select PDF", true),
        button("Upload PDF", session.can_upload()),
        button("Reset", true)
    ));
    out.push_str(&format!("Question: {}\n", session.question()));
    out.push_str(&button("Ask", session.can_ask()));
    out.push('\n');
    if let Some(answer) = session.answer_line() {
        out.push_str(&answer);
        out.push('\n');
    }

    out
}

pub fn notification(notification: &Notification) -> String {
    let prefix = if notification.is_failure() { "!!" } else { "**" };
    format!("{} {}", prefix, notification)
}
