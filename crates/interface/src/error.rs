use std::time::Duration;

use thiserror::Error;

use crate::Field;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("incomplete snapshot: {0} is empty")]
    Incomplete(Field),
}
