use reqwest::{StatusCode, header::InvalidHeaderValue};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("response error: {0}")]
    ResponseError(ResponseContent),
    #[error("invalid value for header '{name}': {source}")]
    InvalidHeader {
        name: &'static str,
        source: InvalidHeaderValue,
    },
}

impl Error {
    /// HTTP status of the failed exchange, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Reqwest(e) => e.status(),
            Error::ResponseError(res) => Some(res.status),
            Error::Serde(_) | Error::InvalidHeader { .. } => None,
        }
    }
}

/// Raw content of a non-2xx response.
#[derive(Debug, Clone)]
pub struct ResponseContent {
    pub status: StatusCode,
    pub content: String,
}

impl Display for ResponseContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.content.is_empty() {
            write!(f, "{}", self.status)
        } else {
            write!(f, "{}: {}", self.status, self.content)
        }
    }
}
