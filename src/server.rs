use std::sync::Arc;

use axum::{handler::Handler, routing::any, Extension, Router};

use crate::{configuration::Config, latency::latency_handler, sample::sample_handler};

pub struct Server {
    pub router: Router,
    pub port: u16,
}

impl Server {
    pub fn build(config: Config) -> Self {
        let port = config.http_port;

        // Every path other than /sample gets the latency handler. /sample/ is
        // routed explicitly, otherwise it would be redirected to /sample.
        let router = Router::new()
            .route("/sample", any(sample_handler))
            .route("/sample/", any(latency_handler))
            .fallback(latency_handler.into_service())
            .layer(Extension(Arc::new(config)));

        Server { router, port }
    }
}
