use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todo_app_backend::{TodoApp, decode_request, encode_response};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_core::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const MAX_REQUEST_BODY_BYTES: usize = 100 * 1024;

pub async fn start_gateway(
    listen_addr: &str,
    app: TodoApp,
) -> Result<(Router, TcpListener), anyhow::Error> {
    let router = create_http_gateway_router(app);

    let listener = create_http_gateway_listener(listen_addr)
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to create HTTP gateway listener for address: {listen_addr}: {e}"
            )
        })?;

    Ok((router, listener))
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_tracing(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Every request falls through to the todo app, which does its own routing.
pub fn create_http_gateway_router(app: TodoApp) -> Router {
    Router::new()
        .fallback(forward_to_app)
        .with_state(app)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn create_http_gateway_listener(addr: &str) -> Result<TcpListener, String> {
    TcpListener::bind(addr).await.map_err(|e| e.to_string())
}

async fn forward_to_app(State(app): State<TodoApp>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let body = match axum::body::to_bytes(body, MAX_REQUEST_BODY_BYTES).await {
        Ok(body) => body.to_vec(),
        Err(err) => {
            tracing::warn!("[forward_to_app] Failed to read request body: {err}");
            return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
        }
    };

    let req = match decode_request(&parts, body) {
        Ok(req) => req,
        Err(err) => {
            tracing::warn!("[forward_to_app] Failed to decode request: {err}");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    let res = app.http_request(&req);

    match encode_response(&res) {
        Ok(response) => response.map(Body::from).into_response(),
        Err(err) => {
            tracing::error!("[forward_to_app] Failed to encode response: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use todo_core::InMemoryStore;
    use tower::ServiceExt;

    fn router() -> Router {
        create_http_gateway_router(TodoApp::new(Arc::new(InMemoryStore::new())))
    }

    async fn send(router: Router, request: Request) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request {
        http::Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn forwards_requests_to_the_todo_app() {
        let router = router();

        let (status, created) = send(
            router.clone(),
            json_request("POST", "/api/todos", json!({ "title": "Buy milk" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, listed) = send(
            router,
            http::Request::builder()
                .uri("/api/todos?completed=false")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["count"], 1);
        assert_eq!(listed["data"][0]["id"], created["data"]["id"]);
    }

    #[tokio::test]
    async fn serves_health_outside_the_api_prefix() {
        let (status, body) = send(
            router(),
            http::Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn allows_cross_origin_requests() {
        let response = router()
            .oneshot(
                http::Request::builder()
                    .uri("/api/todos")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn rejects_oversized_bodies() {
        let response = router()
            .oneshot(
                http::Request::builder()
                    .method("POST")
                    .uri("/api/todos")
                    .body(Body::from(vec![b' '; MAX_REQUEST_BODY_BYTES + 1]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
