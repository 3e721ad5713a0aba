//! Health check endpoint.

use actix_web::{HttpResponse, http::header::ContentType};

/// GET /v1/
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}
