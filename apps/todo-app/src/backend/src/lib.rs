mod api;
mod health;
mod http;
mod router;
mod todo;

pub use api::{ApiResponseBody, INVALID_ID_MESSAGE, TODO_NOT_FOUND_MESSAGE};
pub use health::HealthStatus;
pub use http::{HttpConversionError, decode_request, encode_response};
pub use todo::{
    SnapshotError, SnapshotResult, TODO_DELETED_MESSAGE, persist_snapshot, restore_snapshot,
};

use api::ErrorResponse;
use health::serve_health;
use ic_http_certification::{HttpRequest, HttpResponse};
use matchit::Router;
use once_cell::sync::OnceCell;
use router::MethodRouter;
use std::sync::Arc;
use todo::*;
use todo_core::{TodoService, TodoStore};

pub const API_PREFIX: &str = "/api";

pub type SharedStore = Arc<dyn TodoStore>;

pub type SharedTodoService = TodoService<SharedStore>;

/// Entry point for HTTP requests against the todo API.
#[derive(Clone)]
pub struct TodoApp {
    service: SharedTodoService,
}

impl TodoApp {
    pub fn new(store: SharedStore) -> Self {
        Self {
            service: TodoService::new(store),
        }
    }

    pub fn http_request(&self, req: &HttpRequest) -> HttpResponse<'static> {
        let path = match req.get_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("[http_request] Failed to parse request path: {err}");

                return ErrorResponse::bad_request(format!("Invalid request URL: {err}"));
            }
        };

        serve_route(&self.service, req, &path)
    }
}

fn serve_route(service: &SharedTodoService, req: &HttpRequest, path: &str) -> HttpResponse<'static> {
    let router = get_router();

    let Ok(handler) = router.at(path) else {
        tracing::debug!("[serve_route] No route found for path: {path}");

        return ErrorResponse::not_found("Route not found");
    };

    handler.value.route(service, req, &handler.params)
}

fn get_router() -> &'static Router<MethodRouter> {
    static ROUTER: OnceCell<Router<MethodRouter>> = OnceCell::new();

    ROUTER.get_or_init(|| {
        let routes = [
            (
                format!("{API_PREFIX}/todos"),
                MethodRouter::new()
                    .get(list_todos_handler)
                    .post(create_todo_handler)
                    .build(),
            ),
            (
                format!("{API_PREFIX}/todos/{{id}}"),
                MethodRouter::new()
                    .get(get_todo_handler)
                    .put(update_todo_handler)
                    .delete(delete_todo_handler)
                    .build(),
            ),
            (
                format!("{API_PREFIX}/todos/{{id}}/toggle"),
                MethodRouter::new().patch(toggle_todo_handler).build(),
            ),
            ("/health".to_string(), MethodRouter::new().get(serve_health).build()),
        ];

        let mut router = Router::new();
        for (path, method_router) in routes {
            if let Err(err) = router.insert(path.as_str(), method_router) {
                tracing::error!("[get_router] Failed to register route {path}: {err}");
            }
        }

        router
    })
}
