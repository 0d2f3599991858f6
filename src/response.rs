use actix_web::HttpResponse;
use serde_json::json;

use crate::constants::RECORD_NOT_FOUND;

/// Shared 404 body for single-record lookups.
pub fn record_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "message": RECORD_NOT_FOUND }))
}
