use anyhow::{Context, Result};
use reqwest::Url;
use std::env;

pub const DEFAULT_UPLOAD_URL: &str = "https://pdf-uploader-backend.onrender.com/upload";
pub const DEFAULT_ASK_URL: &str = "http://192.168.224.17:5000/ask";

/// Endpoints of the remote document service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub upload_url: Url,
    pub ask_url: Url,
}

impl ClientConfig {
    pub fn new(upload_url: &str, ask_url: &str) -> Result<Self> {
        let upload_url = Url::parse(upload_url)
            .with_context(|| format!("invalid upload endpoint: {}", upload_url))?;
        let ask_url = Url::parse(ask_url)
            .with_context(|| format!("invalid ask endpoint: {}", ask_url))?;

        for url in [&upload_url, &ask_url] {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(anyhow::anyhow!("endpoints must be http(s) URLs, got {}", url));
            }
        }

        Ok(Self { upload_url, ask_url })
    }

    /// Reads `PDF_QA_UPLOAD_URL` and `PDF_QA_ASK_URL`, loading `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Self::from_vars(
            env::var("PDF_QA_UPLOAD_URL").ok(),
            env::var("PDF_QA_ASK_URL").ok(),
        )
    }

    fn from_vars(upload_url: Option<String>, ask_url: Option<String>) -> Result<Self> {
        let upload_url = upload_url.unwrap_or_else(|| DEFAULT_UPLOAD_URL.to_string());
        let ask_url = ask_url.unwrap_or_else(|| DEFAULT_ASK_URL.to_string());

        log::debug!("Upload endpoint: {}, ask endpoint: {}", upload_url, ask_url);
        Self::new(&upload_url, &ask_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_built_in_endpoints() {
        let config = ClientConfig::from_vars(None, None).unwrap();
        assert_eq!(config.upload_url.as_str(), DEFAULT_UPLOAD_URL);
        assert_eq!(config.ask_url.as_str(), DEFAULT_ASK_URL);
    }

    #[test]
    fn overrides_each_endpoint_independently() {
        let config =
            ClientConfig::from_vars(None, Some("http://localhost:5000/ask".to_string())).unwrap();
        assert_eq!(config.upload_url.as_str(), DEFAULT_UPLOAD_URL);
        assert_eq!(config.ask_url.as_str(), "http://localhost:5000/ask");
    }

    #[test]
    fn rejects_malformed_endpoints() {
        assert!(ClientConfig::new("not a url", DEFAULT_ASK_URL).is_err());
        assert!(ClientConfig::new(DEFAULT_UPLOAD_URL, "mailto:someone@example.com").is_err());
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(ClientConfig::new("file:///tmp/upload", DEFAULT_ASK_URL).is_err());
        assert!(ClientConfig::new(DEFAULT_UPLOAD_URL, "ftp://example.com/ask").is_err());
        assert!(ClientConfig::new("https://example.com/upload", "http://localhost:5000/ask").is_ok());
    }
}
