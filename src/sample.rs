pub mod sample_model;

use std::sync::Arc;

use axum::extract::{Host, Query};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Extension;

use crate::configuration::Config;
use crate::utils::{json_response, query_params, RawParams};
use sample_model::{UrlList, FALLBACK_BODY};

/// Resolves how many URLs to generate. Missing or malformed counts use the
/// configured default, negative ones yield an empty list. The result never
/// exceeds `max`.
pub fn pick_count(count: Option<&str>, default: usize, max: usize) -> usize {
    let count = match count {
        None | Some("") => default,
        Some(value) => match value.parse::<i64>() {
            Ok(n) => usize::try_from(n).unwrap_or(0),
            Err(e) => {
                warn!("Invalid n argument '{}': {}", value, e);
                default
            }
        },
    };
    if count > max {
        warn!("Sample size {} capped to {}", count, max);
        return max;
    }
    count
}

#[axum_macros::debug_handler]
pub async fn sample_handler(
    Extension(config): Extension<Arc<Config>>,
    host: Option<Host>,
    query: Option<Query<RawParams>>,
) -> Response {
    let params = query_params(query);
    let count = pick_count(
        params.get("n").map(String::as_str),
        config.default_sample_size,
        config.max_sample_size,
    );
    let host = host.map(|Host(hostname)| hostname).unwrap_or_default();

    let list = UrlList::generate(&host, count);
    let body = serde_json::to_string(&list).unwrap_or_else(|e| {
        error!("Error marshalling to json: {}", e);
        FALLBACK_BODY.to_owned()
    });
    json_response(StatusCode::OK, body)
}
