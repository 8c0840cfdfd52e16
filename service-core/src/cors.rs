use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, Method};
use tower_http::cors::{Any, CorsLayer};

/// CORS layer with `Access-Control-Allow-Origin: *` for read-only GET endpoints.
pub fn open_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}
