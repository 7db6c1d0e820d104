//! Research assistant backend client
//!
//! Thin HTTP client for the companion backend's `/research` endpoint. The
//! backend proxies topic lookups to an external model and answers with
//! either generated content or an error message; this module maps both
//! outcomes onto typed results.

use crate::core::config::BackendConfig;
use crate::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Request body for `POST /research`.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchRequest {
    /// Topic to research
    pub topic: String,
}

/// Response body from `POST /research`.
///
/// The backend fills exactly one of the fields: `content` on success or
/// `error` with a non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResearchResponse {
    /// Generated research content
    #[serde(default)]
    pub content: Option<String>,
    /// Backend-reported error message
    #[serde(default)]
    pub error: Option<String>,
}

/// Errors raised while talking to the research backend.
#[derive(Debug)]
pub enum ResearchError {
    /// The topic was empty or whitespace, rejected before any request
    EmptyTopic,
    /// Transport-level failure (connection refused, timeout, bad URL)
    Http(reqwest::Error),
    /// The backend answered with an error status and message
    Backend {
        /// HTTP status code
        status: u16,
        /// Message from the response body, or a generic fallback
        message: String,
    },
}

impl fmt::Display for ResearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTopic => write!(f, "research topic must not be empty"),
            Self::Http(e) => write!(f, "backend request failed: {e}"),
            Self::Backend { status, message } => {
                write!(f, "backend error ({status}): {message}")
            }
        }
    }
}

impl Error for ResearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ResearchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

/// Client for the research backend.
#[derive(Debug)]
pub struct ResearchClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    token: String,
}

impl ResearchClient {
    /// Build a client from the `[backend]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Http`] if the HTTP client cannot be built.
    pub fn new(backend: &BackendConfig) -> Result<Self, ResearchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: backend.endpoint.trim_end_matches('/').to_string(),
            token: backend.token.clone(),
        })
    }

    /// Ask the backend to research a topic.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::EmptyTopic`] without contacting the backend
    /// for blank topics, [`ResearchError::Http`] for transport failures, and
    /// [`ResearchError::Backend`] when the backend reports a failure (it uses
    /// 400 for a missing topic and 500 when the upstream model call fails).
    pub fn research(&self, topic: &str) -> Result<String, ResearchError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ResearchError::EmptyTopic);
        }

        let url = format!("{}/research", self.endpoint);
        debug!("Sending research request to {url}");

        let mut request = self.http.post(&url).json(&ResearchRequest {
            topic: topic.to_string(),
        });
        if !self.token.is_empty() {
            request = request.bearer_auth(&self.token);
        }

        let response = request.send()?;
        let status = response.status();
        let body: ResearchResponse = response.json().unwrap_or_default();

        if status.is_success() {
            if let Some(content) = body.content {
                return Ok(content);
            }
        }
        Err(ResearchError::Backend {
            status: status.as_u16(),
            message: body
                .error
                .unwrap_or_else(|| "backend returned no content".to_string()),
        })
    }
}
