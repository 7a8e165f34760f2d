pub mod latency_model;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use axum::extract::Query;
use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;
use axum::Extension;
use rand::{thread_rng, Rng};

use crate::configuration::Config;
use crate::utils::{json_response, query_params, RawParams};
use latency_model::{Envelope, FALLBACK_BODY};

/// Picks how long to wait before answering.
///
/// A missing, empty, malformed or negative `delay` yields a random whole
/// number of seconds in `[0, ceiling)`. Any other value is used as is.
pub fn pick_delay<R: Rng + ?Sized>(delay: Option<&str>, ceiling: u64, rng: &mut R) -> Duration {
    let seconds = match delay {
        None | Some("") => random_seconds(ceiling, rng),
        Some(value) => match value.parse::<i64>() {
            Ok(seconds) if seconds >= 0 => seconds as u64,
            Ok(_) => random_seconds(ceiling, rng),
            Err(e) => {
                warn!("Invalid delay argument '{}': {}", value, e);
                random_seconds(ceiling, rng)
            }
        },
    };
    Duration::from_secs(seconds)
}

fn random_seconds<R: Rng + ?Sized>(ceiling: u64, rng: &mut R) -> u64 {
    if ceiling == 0 {
        return 0;
    }
    rng.gen_range(0..ceiling)
}

/// Picks the status code to answer with.
///
/// A given `code` is used verbatim and falls back to 200 when it cannot be
/// sent as a final status (malformed, informational or out of range). Without one, 400 and 500 are each drawn one time in ten.
pub fn pick_status_code<R: Rng + ?Sized>(code: Option<&str>, rng: &mut R) -> StatusCode {
    match code {
        None | Some("") => match rng.gen_range(0..10) {
            4 => StatusCode::BAD_REQUEST,
            5 => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::OK,
        },
        Some(value) => parse_status_code(value).unwrap_or_else(|e| {
            warn!("Invalid code argument '{}': {}", value, e);
            StatusCode::OK
        }),
    }
}

fn parse_status_code(value: &str) -> Result<StatusCode> {
    let code = StatusCode::from_u16(value.parse::<u16>()?)?;
    if code.is_informational() {
        bail!("{} is not a final status code", code.as_u16());
    }
    Ok(code)
}

#[axum_macros::debug_handler]
pub async fn latency_handler(
    Extension(config): Extension<Arc<Config>>,
    method: Method,
    uri: Uri,
    query: Option<Query<RawParams>>,
) -> Response {
    info!("{} {}", method, uri);
    let params = query_params(query);

    let delay = pick_delay(
        params.get("delay").map(String::as_str),
        config.random_delay_ceiling,
        &mut thread_rng(),
    );
    info!("Going to wait {} seconds...", delay.as_secs());
    tokio::time::sleep(delay).await;

    let code = pick_status_code(params.get("code").map(String::as_str), &mut thread_rng());
    let envelope = Envelope::new(code, delay.as_secs(), uri.path());

    let body = serde_json::to_string(&envelope).unwrap_or_else(|e| {
        error!("Error marshalling to json: {}", e);
        FALLBACK_BODY.to_owned()
    });
    info!("Sending {}: {}", code.as_u16(), body);
    json_response(code, body)
}
