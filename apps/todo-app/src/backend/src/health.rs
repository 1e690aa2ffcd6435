use crate::{
    SharedTodoService,
    api::{ErrorResponse, create_response, json_encode},
};
use chrono::{DateTime, Utc};
use ic_http_certification::{HttpRequest, HttpResponse, StatusCode};
use matchit::Params;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

pub fn serve_health(
    _service: &SharedTodoService,
    _req: &HttpRequest,
    _params: &Params,
) -> HttpResponse<'static> {
    let health = HealthStatus {
        status: "OK",
        timestamp: Utc::now(),
    };

    match json_encode(&health) {
        Ok(body) => create_response(StatusCode::OK, body),
        Err(err) => {
            tracing::error!("Failed to serialize health status: {err}");
            ErrorResponse::internal_error()
        }
    }
}
