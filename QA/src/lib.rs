pub mod models;
pub mod config;
pub mod notification;
pub mod document_picker;
pub mod upload_service;
pub mod query_service;
pub mod session;
pub mod controller;

pub use models::*;
pub use config::ClientConfig;
pub use notification::Notification;
pub use document_picker::{DocumentPicker, FsDocumentPicker};
pub use upload_service::UploadService;
pub use query_service::QueryService;
pub use session::Session;
pub use controller::{Action, Completion, Controller};
