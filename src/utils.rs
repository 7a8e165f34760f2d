use std::collections::HashMap;

use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Query string pairs in the order they were sent.
pub type RawParams = Vec<(String, String)>;
pub type Params = HashMap<String, String>;

/// Query parameters of the request, empty when the query string is missing
/// or cannot be decoded. A repeated key keeps its first value.
pub fn query_params(query: Option<Query<RawParams>>) -> Params {
    let mut params = Params::new();
    for (key, value) in query.map(|Query(pairs)| pairs).unwrap_or_default() {
        params.entry(key).or_insert(value);
    }
    params
}

pub fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
