use crate::models::*;
use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};

/// Sends a picked document to the remote store endpoint.
pub struct UploadService {
    client: Client,
    endpoint: Url,
}

impl UploadService {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Uploads `file` as the multipart field `file` and returns the server-issued document id.
    pub async fn upload(&self, file: &SelectedFile) -> Result<String> {
        let bytes = tokio::fs::read(&file.uri)
            .await
            .with_context(|| format!("failed to read {}", file.uri.display()))?;

        log::info!("Uploading file: {} ({} bytes)", file.name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part("file", part);

        let response = self.client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Upload endpoint returned {}: {}", status, error_text));
        }

        let upload_response: UploadResponse = response
            .json()
            .await
            .context("malformed upload response")?;

        Ok(upload_response.file_id)
    }
}
