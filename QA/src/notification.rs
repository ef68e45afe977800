use std::fmt;

/// Dialogs shown to the user. Every remote failure of an operation maps to one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    NoFileSelected,
    UploadSucceeded,
    UploadFailed,
    NoFileUploaded,
    EmptyQuestion,
    AnswerFailed,
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Notification::NoFileSelected => "No file selected",
            Notification::UploadSucceeded => "File uploaded successfully!",
            Notification::UploadFailed => "Upload failed",
            Notification::NoFileUploaded => "No file uploaded",
            Notification::EmptyQuestion => "Empty question",
            Notification::AnswerFailed => "Error",
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Notification::NoFileSelected => Some("Please select a file to upload."),
            Notification::UploadSucceeded => None,
            Notification::UploadFailed => Some("Could not upload the file."),
            Notification::NoFileUploaded => Some("Please upload a PDF file."),
            Notification::EmptyQuestion => Some("Please enter a question."),
            Notification::AnswerFailed => Some("Could not retrieve the answer."),
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Notification::UploadSucceeded)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "[{}] {}", self.title(), message),
            None => write!(f, "[{}]", self.title()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_message() {
        assert_eq!(
            Notification::UploadFailed.to_string(),
            "[Upload failed] Could not upload the file."
        );
        assert_eq!(
            Notification::UploadSucceeded.to_string(),
            "[File uploaded successfully!]"
        );
    }

    #[test]
    fn only_upload_success_is_not_a_failure() {
        assert!(!Notification::UploadSucceeded.is_failure());
        assert!(Notification::EmptyQuestion.is_failure());
        assert!(Notification::AnswerFailed.is_failure());
    }
}
