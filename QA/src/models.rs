use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A document handed back by the picker: where it lives, what it is, and what to call it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub uri: PathBuf,
    pub mime_type: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "fileId")]
    pub file_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}
