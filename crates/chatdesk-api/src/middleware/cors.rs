//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use chatdesk_core::config::app::CorsConfig;

/// Builds a CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new().allow_headers(Any);

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    layer
        .allow_methods(methods)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
