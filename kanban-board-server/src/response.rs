//! Success envelope

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// `200 {"message": ..., "data": ...}`; a `null` payload is sent as `{}`
#[derive(Debug)]
pub struct Envelope {
    message: &'static str,
    data: Value,
}

impl Envelope {
    pub fn new(message: &'static str, data: Value) -> Self {
        Self { message, data }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let data = if self.data.is_null() {
            json!({})
        } else {
            self.data
        };
        Json(json!({ "message": self.message, "data": data })).into_response()
    }
}
