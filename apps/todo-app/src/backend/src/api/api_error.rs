use super::ErrorResponse;
use ic_http_certification::HttpResponse;
use thiserror::Error;
use todo_core::TodoError;

pub const TODO_NOT_FOUND_MESSAGE: &str = "Todo not found";

pub const INVALID_ID_MESSAGE: &str = "Invalid ID format";

pub type ApiResult<T = HttpResponse<'static>> = Result<T, ApiError>;

/// Failures a route handler can end with, before they become a status code.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Todo(#[from] TodoError),

    #[error("Invalid request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Invalid query string: {0}")]
    MalformedQuery(#[from] serde_urlencoded::de::Error),

    #[error("Invalid request URL: {0}")]
    MalformedUrl(String),
}

impl ApiError {
    pub fn into_response(self) -> HttpResponse<'static> {
        match self {
            ApiError::Todo(TodoError::Validation(err)) => {
                tracing::warn!(field = %err.field, "Rejected invalid todo: {}", err.reason);
                ErrorResponse::bad_request(err.reason)
            }
            ApiError::Todo(TodoError::NotFound(id)) => {
                tracing::debug!(%id, "Todo not found");
                ErrorResponse::not_found(TODO_NOT_FOUND_MESSAGE)
            }
            ApiError::Todo(TodoError::MalformedIdentifier(id)) => {
                tracing::warn!(id = %id, "Rejected malformed todo id");
                ErrorResponse::bad_request(INVALID_ID_MESSAGE)
            }
            ApiError::Todo(TodoError::StoreUnavailable(err)) => {
                tracing::error!("Todo store failure: {err}");
                ErrorResponse::internal_error()
            }
            err @ (ApiError::MalformedBody(_)
            | ApiError::MalformedQuery(_)
            | ApiError::MalformedUrl(_)) => {
                tracing::warn!("Rejected malformed request: {err}");
                ErrorResponse::bad_request(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ic_http_certification::StatusCode;
    use rstest::rstest;
    use todo_core::{StoreError, TodoId, ValidationError, ValidationField};

    #[rstest]
    #[case(
        TodoError::Validation(ValidationError::new(ValidationField::Title, "Title is required")),
        StatusCode::BAD_REQUEST
    )]
    #[case(TodoError::NotFound(TodoId::generate()), StatusCode::NOT_FOUND)]
    #[case(
        TodoError::MalformedIdentifier("invalid-id".to_string()),
        StatusCode::BAD_REQUEST
    )]
    #[case(
        TodoError::StoreUnavailable(StoreError::Unavailable("down".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn maps_todo_errors_to_status_codes(#[case] err: TodoError, #[case] status: StatusCode) {
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status_code(), status);
    }

    #[test]
    fn store_failures_do_not_leak_details() {
        let response =
            ApiError::from(TodoError::StoreUnavailable(StoreError::Unavailable(
                "secret connection string".to_string(),
            )))
            .into_response();

        let body = String::from_utf8_lossy(response.body());
        assert!(!body.contains("secret"));
    }

    #[test]
    fn malformed_identifier_message_mentions_invalid_id() {
        let response =
            ApiError::from(TodoError::MalformedIdentifier("invalid-id".to_string())).into_response();

        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert!(body["message"].as_str().unwrap().contains("Invalid ID"));
    }
}
