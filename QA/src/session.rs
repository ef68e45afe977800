use crate::models::*;
use crate::notification::Notification;

/// Transient state of the single screen. Nothing here outlives the process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    file: Option<SelectedFile>,
    file_id: String,
    question: String,
    answer: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn select(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    /// The file to send, or the notification to show instead of making a call.
    pub fn upload_request(&self) -> Result<SelectedFile, Notification> {
        self.file.clone().ok_or(Notification::NoFileSelected)
    }

    /// `(file_id, question)` for the answer endpoint, checked in that order.
    pub fn query_request(&self) -> Result<(String, String), Notification> {
        if self.file_id.is_empty() {
            return Err(Notification::NoFileUploaded);
        }
        if self.question.trim().is_empty() {
            return Err(Notification::EmptyQuestion);
        }
        Ok((self.file_id.clone(), self.question.clone()))
    }

    pub fn apply_upload(&mut self, file_id: String) {
        self.file_id = file_id;
    }

    pub fn apply_answer(&mut self, answer: String) {
        self.answer = answer;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn can_upload(&self) -> bool {
        self.file.is_some()
    }

    pub fn can_ask(&self) -> bool {
        !self.file_id.is_empty()
    }

    pub fn title(&self) -> String {
        match (&self.file, self.file_id.is_empty()) {
            (None, _) => "Select a PDF file and ask your question.".to_string(),
            (Some(_), true) => "Upload a PDF file and ask your question.".to_string(),
            (Some(file), false) => format!("PDF: {}", file.name),
        }
    }

    pub fn hint(&self) -> &'static str {
        if self.can_ask() {
            "You can now ask your question."
        } else {
            ""
        }
    }

    pub fn answer_line(&self) -> Option<String> {
        if self.answer.is_empty() {
            None
        } else {
            Some(format!("Answer: {}", self.answer))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report() -> SelectedFile {
        SelectedFile {
            uri: PathBuf::from("/tmp/report.pdf"),
            mime_type: PDF_MIME_TYPE.to_string(),
            name: "report.pdf".to_string(),
        }
    }

    #[test]
    fn upload_requires_a_selected_file() {
        let mut session = Session::new();
        assert_eq!(session.upload_request(), Err(Notification::NoFileSelected));
        assert!(!session.can_upload());

        session.select(report());
        assert_eq!(session.upload_request(), Ok(report()));
        assert!(session.can_upload());
    }

    #[test]
    fn query_checks_document_before_question() {
        let mut session = Session::new();
        assert_eq!(session.query_request(), Err(Notification::NoFileUploaded));

        session.apply_upload("abc123".to_string());
        assert_eq!(session.query_request(), Err(Notification::EmptyQuestion));

        session.set_question("   \t");
        assert_eq!(session.query_request(), Err(Notification::EmptyQuestion));

        session.set_question(" what is it? ");
        assert_eq!(
            session.query_request(),
            Ok(("abc123".to_string(), " what is it? ".to_string()))
        );
    }

    #[test]
    fn title_follows_progress() {
        let mut session = Session::new();
        assert_eq!(session.title(), "Select a PDF file and ask your question.");
        assert_eq!(session.hint(), "");

        session.select(report());
        assert_eq!(session.title(), "Upload a PDF file and ask your question.");

        session.apply_upload("abc123".to_string());
        assert_eq!(session.title(), "PDF: report.pdf");
        assert_eq!(session.hint(), "You can now ask your question.");
        assert!(session.can_ask());
    }

    #[test]
    fn answer_line_only_when_answered() {
        let mut session = Session::new();
        assert_eq!(session.answer_line(), None);
        session.apply_answer("42".to_string());
        assert_eq!(session.answer_line().as_deref(), Some("Answer: 42"));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = Session::new();
        session.select(report());
        session.apply_upload("abc123".to_string());
        session.set_question("why?");
        session.apply_answer("because".to_string());

        session.reset();
        assert_eq!(session, Session::new());
        session.reset();
        assert_eq!(session.file(), None);
        assert_eq!(session.file_id(), "");
        assert_eq!(session.question(), "");
        assert_eq!(session.answer(), "");
    }
}
