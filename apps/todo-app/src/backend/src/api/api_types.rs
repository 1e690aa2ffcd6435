use super::json_encode;
use ic_http_certification::{HttpResponse, StatusCode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const INTERNAL_ERROR_BODY: &[u8] = br#"{"success":false,"message":"Internal server error"}"#;

/// Envelope wrapping every todo API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseBody<T = ()> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub struct ApiResponse<T = ()> {
    body: ApiResponseBody<T>,
    status_code: StatusCode,
}

impl<'a, T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> HttpResponse<'a> {
        Self::success(StatusCode::OK, data).build()
    }

    pub fn created(data: T) -> HttpResponse<'a> {
        Self::success(StatusCode::CREATED, data).build()
    }

    pub fn ok_message(message: impl Into<String>) -> HttpResponse<'a> {
        Self::with_message(StatusCode::OK, true, message.into()).build()
    }

    pub fn bad_request(message: impl Into<String>) -> HttpResponse<'a> {
        Self::with_message(StatusCode::BAD_REQUEST, false, message.into()).build()
    }

    pub fn not_found(message: impl Into<String>) -> HttpResponse<'a> {
        Self::with_message(StatusCode::NOT_FOUND, false, message.into()).build()
    }

    /// 405 response advertising the methods the path does accept.
    pub fn not_allowed(allow: impl Into<String>) -> HttpResponse<'a> {
        Self::with_message(
            StatusCode::METHOD_NOT_ALLOWED,
            false,
            "Method not allowed".to_string(),
        )
        .build_with_headers(vec![("allow".to_string(), allow.into())])
    }

    pub fn internal_error() -> HttpResponse<'a> {
        Self::with_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            false,
            "Internal server error".to_string(),
        )
        .build()
    }

    fn success(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code,
            body: ApiResponseBody {
                success: true,
                count: None,
                data: Some(data),
                message: None,
            },
        }
    }

    fn with_message(status_code: StatusCode, success: bool, message: String) -> Self {
        Self {
            status_code,
            body: ApiResponseBody {
                success,
                count: None,
                data: None,
                message: Some(message),
            },
        }
    }

    fn build(self) -> HttpResponse<'a> {
        self.build_with_headers(Vec::new())
    }

    fn build_with_headers(self, extra_headers: Vec<(String, String)>) -> HttpResponse<'a> {
        match json_encode(&self.body) {
            Ok(body) => create_response_with_headers(self.status_code, body, extra_headers),
            Err(err) => {
                tracing::error!("Failed to serialize response body: {err}");
                create_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
            }
        }
    }
}

impl<'a, T: Serialize> ApiResponse<Vec<T>> {
    /// 200 response carrying a collection and its length.
    pub fn ok_list(data: Vec<T>) -> HttpResponse<'a> {
        let mut response = Self::success(StatusCode::OK, data);
        response.body.count = response.body.data.as_ref().map(Vec::len);

        response.build()
    }
}

pub type ErrorResponse = ApiResponse<()>;

pub(crate) fn create_response<'a>(
    status_code: StatusCode,
    body: impl Into<Cow<'a, [u8]>>,
) -> HttpResponse<'a> {
    create_response_with_headers(status_code, body, Vec::new())
}

fn create_response_with_headers<'a>(
    status_code: StatusCode,
    body: impl Into<Cow<'a, [u8]>>,
    extra_headers: Vec<(String, String)>,
) -> HttpResponse<'a> {
    let mut headers = vec![
        ("content-type".to_string(), "application/json".to_string()),
        (
            "strict-transport-security".to_string(),
            "max-age=31536000; includeSubDomains".to_string(),
        ),
        ("x-content-type-options".to_string(), "nosniff".to_string()),
        ("referrer-policy".to_string(), "no-referrer".to_string()),
        (
            "cache-control".to_string(),
            "no-store, max-age=0".to_string(),
        ),
        ("pragma".to_string(), "no-cache".to_string()),
    ];
    headers.extend(extra_headers);

    HttpResponse::builder()
        .with_status_code(status_code)
        .with_headers(headers)
        .with_body(body)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn body_json(response: &HttpResponse) -> Value {
        serde_json::from_slice(response.body()).unwrap()
    }

    #[test]
    fn success_envelope_omits_absent_members() {
        let response = ApiResponse::ok("hello");

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            body_json(&response),
            serde_json::json!({ "success": true, "data": "hello" })
        );
    }

    #[test]
    fn list_envelope_carries_count() {
        let response = ApiResponse::ok_list(vec![1, 2, 3]);

        assert_eq!(
            body_json(&response),
            serde_json::json!({ "success": true, "count": 3, "data": [1, 2, 3] })
        );
    }

    #[test]
    fn error_envelope_carries_message() {
        let response = ErrorResponse::not_found("Todo not found");

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(&response),
            serde_json::json!({ "success": false, "message": "Todo not found" })
        );
    }

    #[test]
    fn responses_are_json() {
        let response = ErrorResponse::not_allowed("GET");

        assert!(
            response
                .headers()
                .iter()
                .any(|(name, value)| name == "content-type" && value == "application/json")
        );
    }
}
