use crate::config::ClientConfig;
use crate::document_picker::DocumentPicker;
use crate::notification::Notification;
use crate::query_service::QueryService;
use crate::session::Session;
use crate::upload_service::UploadService;
use anyhow::Result;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// Something the user did on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select(Option<PathBuf>),
    EditQuestion(String),
    Upload,
    Ask,
    Reset,
}

/// Result of a network call, delivered back to the event loop.
#[derive(Debug)]
pub enum Completion {
    Uploaded(Result<String>),
    Answered(Result<String>),
}

/// Owns the session and turns actions into state changes and background calls.
///
/// Calls are spawned and never awaited here; their results come back through the
/// receiver returned by [`Controller::new`] and must be fed to [`Controller::complete`].
/// In-flight calls are not cancelled by `Reset`, and whichever result arrives last wins.
pub struct Controller {
    session: Session,
    picker: Box<dyn DocumentPicker>,
    upload_service: Arc<UploadService>,
    query_service: Arc<QueryService>,
    completions: UnboundedSender<Completion>,
}

impl Controller {
    pub fn new(
        config: &ClientConfig,
        picker: Box<dyn DocumentPicker>,
    ) -> (Self, UnboundedReceiver<Completion>) {
        let client = Client::new();
        let upload_service = Arc::new(UploadService::new(client.clone(), config.upload_url.clone()));
        let query_service = Arc::new(QueryService::new(client, config.ask_url.clone()));

        Self::with_services(picker, upload_service, query_service)
    }

    fn with_services(
        picker: Box<dyn DocumentPicker>,
        upload_service: Arc<UploadService>,
        query_service: Arc<QueryService>,
    ) -> (Self, UnboundedReceiver<Completion>) {
        let (completions, receiver) = mpsc::unbounded_channel();

        let controller = Self {
            session: Session::new(),
            picker,
            upload_service,
            query_service,
            completions,
        };

        (controller, receiver)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Applies `action`. Returns the notification to show right away, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<Notification> {
        match action {
            Action::Select(hint) => {
                self.select(hint);
                None
            }
            Action::EditQuestion(question) => {
                self.session.set_question(question);
                None
            }
            Action::Upload => self.start_upload().err(),
            Action::Ask => self.start_query().err(),
            Action::Reset => {
                self.session.reset();
                None
            }
        }
    }

    /// Writes a finished call into the session.
    pub fn complete(&mut self, completion: Completion) -> Option<Notification> {
        match completion {
            Completion::Uploaded(Ok(file_id)) => {
                log::info!("File uploaded, fileId: {}", file_id);
                self.session.apply_upload(file_id);
                Some(Notification::UploadSucceeded)
            }
            Completion::Uploaded(Err(e)) => {
                log::error!("Error uploading file: {:#}", e);
                Some(Notification::UploadFailed)
            }
            Completion::Answered(Ok(answer)) => {
                log::info!("Answer received: {}", answer);
                self.session.apply_answer(answer);
                None
            }
            Completion::Answered(Err(e)) => {
                log::error!("Error retrieving answer: {:#}", e);
                Some(Notification::AnswerFailed)
            }
        }
    }

    fn select(&mut self, hint: Option<PathBuf>) {
        match self.picker.pick(hint.as_deref()) {
            Ok(Some(file)) => {
                log::info!("Selected file: {:?}", file);
                self.session.select(file);
            }
            Ok(None) => {
                log::info!("File selection was canceled or no file was selected.");
            }
            Err(e) => {
                log::warn!("Error picking document: {:#}", e);
            }
        }
    }

    fn start_upload(&mut self) -> Result<(), Notification> {
        let file = self.session.upload_request()?;
        let upload_service = Arc::clone(&self.upload_service);
        let completions = self.completions.clone();
        let request_id = Uuid::new_v4();

        log::debug!("[{}] upload started for {}", request_id, file.name);
        tokio::spawn(async move {
            let result = upload_service.upload(&file).await;
            log::debug!("[{}] upload finished, ok={}", request_id, result.is_ok());
            if completions.send(Completion::Uploaded(result)).is_err() {
                log::warn!("[{}] upload finished after the screen closed", request_id);
            }
        });

        Ok(())
    }

    fn start_query(&mut self) -> Result<(), Notification> {
        let (file_id, question) = self.session.query_request()?;
        let query_service = Arc::clone(&self.query_service);
        let completions = self.completions.clone();
        let request_id = Uuid::new_v4();

        log::debug!("[{}] query started for fileId {}", request_id, file_id);
        tokio::spawn(async move {
            let result = query_service.ask(&file_id, &question).await;
            log::debug!("[{}] query finished, ok={}", request_id, result.is_ok());
            if completions.send(Completion::Answered(result)).is_err() {
                log::warn!("[{}] query finished after the screen closed", request_id);
            }
        });

        Ok(())
    }
}
