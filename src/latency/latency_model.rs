use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

/// Body sent when the envelope cannot be serialized.
pub const FALLBACK_BODY: &str = r#"{"message":"Error marshalling json"}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "client error")]
    ClientError,
    #[serde(rename = "server error")]
    ServerError,
}

impl From<StatusCode> for Outcome {
    fn from(code: StatusCode) -> Self {
        match code.as_u16() {
            500.. => Outcome::ServerError,
            400..=499 => Outcome::ClientError,
            _ => Outcome::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub message: Outcome,
    pub delay: u64,
    pub path: String,
}

impl Envelope {
    pub fn new(code: StatusCode, delay: u64, path: &str) -> Self {
        Envelope {
            message: Outcome::from(code),
            delay,
            path: path.to_owned(),
        }
    }
}
