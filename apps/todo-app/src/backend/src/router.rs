use crate::{SharedTodoService, api::ErrorResponse};
use ic_http_certification::{HttpRequest, HttpResponse, Method};
use matchit::Params;
use std::collections::HashMap;

pub type RouteHandler =
    for<'a> fn(&'a SharedTodoService, &'a HttpRequest, &'a Params) -> HttpResponse<'static>;

type MethodMap = HashMap<Method, RouteHandler>;

pub struct MethodRouter {
    routes: MethodMap,
}

impl MethodRouter {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    pub fn get(self, handler: RouteHandler) -> Self {
        self.add_route(Method::GET, handler)
    }

    pub fn post(self, handler: RouteHandler) -> Self {
        self.add_route(Method::POST, handler)
    }

    pub fn patch(self, handler: RouteHandler) -> Self {
        self.add_route(Method::PATCH, handler)
    }

    pub fn put(self, handler: RouteHandler) -> Self {
        self.add_route(Method::PUT, handler)
    }

    pub fn delete(self, handler: RouteHandler) -> Self {
        self.add_route(Method::DELETE, handler)
    }

    pub fn build(self) -> Self {
        self
    }

    pub fn route(
        &self,
        service: &SharedTodoService,
        req: &HttpRequest,
        params: &Params,
    ) -> HttpResponse<'static> {
        let Some(handler) = self.routes.get(req.method()) else {
            let allow = self.allowed_methods();
            tracing::debug!(method = %req.method(), %allow, "No handler registered for method");

            return ErrorResponse::not_allowed(allow);
        };

        handler(service, req, params)
    }

    /// Registered methods as an `Allow` header value, in a stable order.
    pub fn allowed_methods(&self) -> String {
        let mut methods = self
            .routes
            .keys()
            .map(Method::as_str)
            .collect::<Vec<_>>();
        methods.sort_unstable();

        methods.join(", ")
    }

    fn add_route(mut self, method: Method, handler: RouteHandler) -> Self {
        self.routes.insert(method, handler);

        self
    }
}
