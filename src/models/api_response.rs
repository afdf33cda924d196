use actix_cors::Cors;
use actix_web::{http::header::HeaderName, middleware::DefaultHeaders, HttpResponse};
use serde::Serialize;

/// Version of the Solana Actions protocol the payloads follow
pub const ACTION_VERSION: &str = "2.1.3";

pub const ALLOWED_METHODS: &str = "GET,POST,PUT,OPTIONS";
pub const ALLOWED_HEADERS: &str = concat!(
    "Content-Type, Authorization, Content-Encoding, Accept-Encoding, ",
    "X-Accept-Action-Version, X-Accept-Blockchain-Ids"
);
pub const EXPOSED_HEADERS: &str = "X-Action-Version, X-Blockchain-Ids";

/// Origin handling for browser callers. Preflights are left to the
/// `OPTIONS` route so they carry the same headers as every other response.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .expose_headers(vec![
            HeaderName::from_static("x-action-version"),
            HeaderName::from_static("x-blockchain-ids"),
        ])
        .disable_preflight()
}

/// Permissive CORS and protocol headers attached to every response
pub fn action_headers(blockchain_id: &str) -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", ALLOWED_METHODS))
        .add(("Access-Control-Allow-Headers", ALLOWED_HEADERS))
        .add(("Access-Control-Expose-Headers", EXPOSED_HEADERS))
        .add(("X-Action-Version", ACTION_VERSION))
        .add(("X-Blockchain-Ids", blockchain_id.to_string()))
}

// Success response helper
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}
