use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Body sent when the list cannot be serialized.
pub const FALLBACK_BODY: &str = r#"{"urls":[]}"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Url {
    pub url: String,
}

impl Url {
    pub fn random(host: &str) -> Self {
        Url {
            url: format!("http://{}/{}", host, Uuid::new_v4()),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlList {
    pub urls: Vec<Url>,
}

impl UrlList {
    pub fn generate(host: &str, count: usize) -> Self {
        UrlList {
            urls: (0..count).map(|_| Url::random(host)).collect(),
        }
    }
}
