//! Shared helpers for driving the todo router in integration tests.

#![allow(dead_code)]

use ic_http_certification::{HttpRequest, Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use todo_app_backend::TodoApp;
use todo_core::InMemoryStore;

pub struct TestApp {
    pub app: TodoApp,
    pub store: Arc<InMemoryStore>,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(InMemoryStore::new());

    TestApp {
        app: TodoApp::new(store.clone()),
        store,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl TestApp {
    pub fn send(&self, method: Method, url: &str, body: Option<Value>) -> TestResponse {
        let body = body
            .map(|body| serde_json::to_vec(&body).unwrap())
            .unwrap_or_default();
        let req = HttpRequest::builder()
            .with_method(method)
            .with_url(url.to_string())
            .with_headers(vec![(
                "content-type".to_string(),
                "application/json".to_string(),
            )])
            .with_body(body)
            .build();

        let res = self.app.http_request(&req);

        TestResponse {
            status: res.status_code(),
            headers: res.headers().to_vec(),
            body: serde_json::from_slice(res.body()).unwrap(),
        }
    }

    pub fn get(&self, url: &str) -> TestResponse {
        self.send(Method::GET, url, None)
    }

    pub fn post(&self, url: &str, body: Value) -> TestResponse {
        self.send(Method::POST, url, Some(body))
    }

    pub fn put(&self, url: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, url, Some(body))
    }

    pub fn patch(&self, url: &str) -> TestResponse {
        self.send(Method::PATCH, url, None)
    }

    pub fn delete(&self, url: &str) -> TestResponse {
        self.send(Method::DELETE, url, None)
    }

    /// Creates a todo through the API and returns its id.
    pub fn create(&self, body: Value) -> String {
        let res = self.post("/api/todos", body);
        assert_eq!(res.status, StatusCode::CREATED, "create failed: {}", res.body);

        res.body["data"]["id"].as_str().unwrap().to_string()
    }
}

pub const UNKNOWN_ID: &str = "6f1c7e0a-3b1d-4a8e-9c55-0d2f3a4b5c6d";
