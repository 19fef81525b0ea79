//! HTTP backend for a Session View running outside the API process.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::interview::handlers::{
    ChatRequest, ChatResponse, ReviewRequest, ReviewResponse, USER_HEADER,
};
use crate::interview::session::{BackendError, InterviewBackend};
use crate::models::Turn;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    details: Option<String>,
}

/// Talks to `POST /api/chat` and `POST /api/review`.
#[derive(Clone)]
pub struct HttpInterviewClient {
    client: Client,
    base_url: String,
    user: Option<String>,
}

impl HttpInterviewClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user: None,
        }
    }

    /// Forwards a user identifier the way the identity proxy would.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, BackendError> {
        let mut request = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body);
        if let Some(user) = &self.user {
            request = request.header(USER_HEADER, user);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status = status.as_u16();
        let text = response.text().await?;
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(ErrorBody {
                error,
                details: Some(details),
            }) => format!("{error}: {details}"),
            Ok(ErrorBody { error, .. }) => error,
            Err(_) => return Err(BackendError::Unreadable { status }),
        };
        Err(BackendError::Server { status, message })
    }
}

#[async_trait]
impl InterviewBackend for HttpInterviewClient {
    async fn reply(
        &self,
        role: &str,
        difficulty: &str,
        transcript: &[Turn],
    ) -> Result<String, BackendError> {
        let body = ChatRequest {
            role: Some(role.to_string()),
            difficulty: Some(difficulty.to_string()),
            messages: Some(transcript.to_vec()),
        };
        let response: ChatResponse = self.post("/api/chat", &body).await?.json().await?;
        Ok(response.reply)
    }

    async fn review(&self, role: &str, transcript: &[Turn]) -> Result<String, BackendError> {
        let body = ReviewRequest {
            role: Some(role.to_string()),
            messages: Some(transcript.to_vec()),
        };
        let response: ReviewResponse = self.post("/api/review", &body).await?.json().await?;
        Ok(response.review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::interview::prompts::{REPLY_FAILED, REPLY_UNREACHABLE, REVIEW_FAILED};
    use crate::interview::session::{InterviewSession, SessionState};
    use crate::test_support::{FakeGeneration, FakeStore};

    async fn spawn_api(llm: FakeGeneration, store: Arc<FakeStore>) -> String {
        let state = crate::state::AppState::new(Arc::new(llm), store);
        let app = crate::routes::build_router(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_session_over_http_end_to_end() {
        let store = Arc::new(FakeStore::default());
        let llm = FakeGeneration::replying("What is a closure?");
        let base_url = spawn_api(llm, store.clone()).await;
        let client = HttpInterviewClient::new(base_url).with_user("dev@example.com");

        let mut session = InterviewSession::new("frontend", "medium");
        session.start().unwrap();
        let turn = session.send(&client, "ready").await.unwrap();
        assert_eq!(turn.content, "What is a closure?");

        let review = session.end(&client).await.unwrap();
        assert_eq!(review, "What is a closure?");
        assert_eq!(session.state(), SessionState::Reviewed);

        let records = store.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "dev@example.com");
        assert_eq!(records[0].role, "frontend");
        assert_eq!(records[0].transcript.len(), 3);
    }

    #[tokio::test]
    async fn test_server_error_becomes_fallback_turn() {
        let base_url = spawn_api(FakeGeneration::failing(), Arc::new(FakeStore::default())).await;
        let client = HttpInterviewClient::new(base_url);

        let err = client
            .reply("backend", "easy", &[Turn::user("hi")])
            .await
            .unwrap_err();
        match err {
            BackendError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to get AI response");
            }
            other => panic!("expected Server error, got {other:?}"),
        }

        let mut session = InterviewSession::new("backend", "easy");
        session.start().unwrap();
        let turn = session.send(&client, "hi").await.unwrap();
        assert_eq!(turn.content, REPLY_FAILED);
        assert_eq!(session.end(&client).await.unwrap(), REVIEW_FAILED);
    }

    #[tokio::test]
    async fn test_non_json_error_body_uses_transport_fallback() {
        let router = axum::Router::new().route(
            "/api/chat",
            axum::routing::post(|| async {
                (axum::http::StatusCode::BAD_GATEWAY, "Bad Gateway")
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        let client = HttpInterviewClient::new(format!("http://{addr}"));

        let err = client
            .reply("backend", "easy", &[Turn::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Unreadable { status: 502 }));

        let mut session = InterviewSession::new("backend", "easy");
        session.start().unwrap();
        let turn = session.send(&client, "hi").await.unwrap();
        assert_eq!(turn.content, REPLY_UNREACHABLE);
    }

    #[tokio::test]
    async fn test_unreachable_server_uses_transport_fallback() {
        // bind then drop so nothing is listening on the port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = HttpInterviewClient::new(format!("http://{addr}"));

        let mut session = InterviewSession::new("devops", "hard");
        session.start().unwrap();
        let turn = session.send(&client, "hello").await.unwrap();
        assert_eq!(turn.content, REPLY_UNREACHABLE);
    }
}
