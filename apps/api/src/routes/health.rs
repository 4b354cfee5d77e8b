use axum::Json;
use serde_json::{json, Value};

use crate::analysis::client::MODEL;

/// GET /health
/// Reports service liveness and the analysis model in use.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "resumelens-api",
        "version": env!("CARGO_PKG_VERSION"),
        "model": MODEL
    }))
}
