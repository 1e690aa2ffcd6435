use async_trait::async_trait;
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;
use todo_core::{Todo, TodoId, TodoInput};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

pub type ClientResult<T = ()> = Result<T, ClientError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error(r#"Request to the todo API failed: {0}"#)]
    Transport(String),

    #[error(r#"The todo API rejected the request with status {status}"#)]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error(r#"The todo API returned an unexpected body: {0}"#)]
    UnexpectedBody(String),
}

impl ClientError {
    /// The message the server attached to a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

/// Operations the client performs against the todo API.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Todo>>;

    async fn create(&self, input: TodoInput) -> ClientResult<Todo>;

    async fn toggle(&self, id: TodoId) -> ClientResult<Todo>;

    async fn delete(&self, id: TodoId) -> ClientResult;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todos/{id}", self.base_url)
    }
}

impl Default for HttpTodoApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ClientResult<Vec<Todo>> {
        let response = self.client.get(self.todos_url()).send().await?;

        expect_data(read_envelope(response).await?)
    }

    async fn create(&self, input: TodoInput) -> ClientResult<Todo> {
        let response = self
            .client
            .post(self.todos_url())
            .json(&input)
            .send()
            .await?;

        expect_data(read_envelope(response).await?)
    }

    async fn toggle(&self, id: TodoId) -> ClientResult<Todo> {
        let response = self
            .client
            .patch(format!("{}/toggle", self.todo_url(id)))
            .send()
            .await?;

        expect_data(read_envelope(response).await?)
    }

    async fn delete(&self, id: TodoId) -> ClientResult {
        let response = self.client.delete(self.todo_url(id)).send().await?;
        read_envelope::<serde_json::Value>(response).await?;

        Ok(())
    }
}

async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> ClientResult<Envelope<T>> {
    let status = response.status();
    let bytes = response.bytes().await?;

    let envelope = serde_json::from_slice::<Envelope<T>>(&bytes);

    match envelope {
        Ok(envelope) if status.is_success() && envelope.success => Ok(envelope),
        Ok(envelope) => Err(ClientError::Rejected {
            status: status.as_u16(),
            message: envelope.message,
        }),
        Err(_) if !status.is_success() => Err(ClientError::Rejected {
            status: status.as_u16(),
            message: None,
        }),
        Err(err) => Err(ClientError::UnexpectedBody(err.to_string())),
    }
}

fn expect_data<T>(envelope: Envelope<T>) -> ClientResult<T> {
    envelope
        .data
        .ok_or_else(|| ClientError::UnexpectedBody("missing data member".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:5000/api", "http://localhost:5000/api/todos")]
    #[case("http://localhost:5000/api/", "http://localhost:5000/api/todos")]
    fn builds_collection_url(#[case] base_url: &str, #[case] expected: &str) {
        let api = HttpTodoApi::new(base_url);

        assert_eq!(api.todos_url(), expected);
    }

    #[test]
    fn builds_document_url() {
        let api = HttpTodoApi::default();
        let id: TodoId = "3f2b8c1e-9a4d-4e7f-8b6a-1c2d3e4f5a6b".parse().unwrap();

        assert_eq!(
            api.todo_url(id),
            "http://localhost:5000/api/todos/3f2b8c1e-9a4d-4e7f-8b6a-1c2d3e4f5a6b"
        );
    }

    #[test]
    fn exposes_rejection_message() {
        let err = ClientError::Rejected {
            status: 400,
            message: Some("Title must be at least 3 characters".to_string()),
        };

        assert_eq!(
            err.server_message(),
            Some("Title must be at least 3 characters")
        );
        assert_eq!(ClientError::Transport("refused".into()).server_message(), None);
    }

    #[test]
    fn envelope_tolerates_missing_members() {
        let envelope: Envelope<Vec<Todo>> =
            serde_json::from_str(r#"{ "success": false, "message": "Todo not found" }"#).unwrap();

        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Todo not found"));
    }
}
