use crate::models::*;
use anyhow::{Context, Result};
use reqwest::{Client, Url};

/// Asks the remote answer endpoint about a previously uploaded document.
pub struct QueryService {
    client: Client,
    endpoint: Url,
}

impl QueryService {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub async fn ask(&self, file_id: &str, question: &str) -> Result<String> {
        let url = self.question_url(file_id)?;

        log::info!("Asking question for fileId {}: {}", file_id, question);

        let response = self.client
            .get(url)
            .query(&[("question", question)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Ask endpoint returned {}: {}", status, error_text));
        }

        let answer_response: AnswerResponse = response
            .json()
            .await
            .context("malformed answer response")?;

        Ok(answer_response.answer)
    }

    fn question_url(&self, file_id: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("ask endpoint cannot take a path: {}", self.endpoint))?
            .pop_if_empty()
            .push(file_id);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(endpoint: &str) -> QueryService {
        QueryService::new(Client::new(), Url::parse(endpoint).unwrap())
    }

    #[test]
    fn appends_document_id_as_path_segment() {
        let url = service("http://localhost:5000/ask").question_url("abc123").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/ask/abc123");
    }

    #[test]
    fn tolerates_trailing_slash_on_endpoint() {
        let url = service("http://localhost:5000/ask/").question_url("abc123").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/ask/abc123");
    }

    #[test]
    fn escapes_document_id() {
        let url = service("http://localhost:5000/ask").question_url("a/b c").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/ask/a%2Fb%20c");
    }
}
