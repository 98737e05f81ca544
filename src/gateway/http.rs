//! reqwest-backed gateway client
//!
//! Works natively and on `wasm32` (reqwest delegates to `fetch` there).

use super::QuizGateway;
use crate::types::{
    ApiErrorPayload, AppError, AuthSession, LoginRequest, QuizSummary, RegisterRequest, Result,
};
use crate::utils::config::ClientConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

const LOGIN_PATH: &str = "/api/student-auth/login";
const REGISTER_PATH: &str = "/api/student-auth/register";
const QUIZ_STATS_PATH: &str = "/api/quizzes/stats";

/// HTTP client for the SmartQuiz backend.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpGateway {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);

        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send<R: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<R> {
        let response = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The error body is optional; a missing or malformed one still
            // yields a gateway error, just without a message.
            let payload = response
                .json::<ApiErrorPayload>()
                .await
                .unwrap_or_default();
            tracing::warn!(status = status.as_u16(), message = ?payload.message, "gateway rejected request");
            return Err(AppError::Gateway {
                status: status.as_u16(),
                message: payload.message,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| AppError::Serialization(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait(?Send)]
impl QuizGateway for HttpGateway {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        tracing::debug!(%email, "student login");
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(self.client.post(self.url(LOGIN_PATH)).json(&body))
            .await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthSession> {
        tracing::debug!(email = %request.email, "student registration");
        self.send(self.client.post(self.url(REGISTER_PATH)).json(request))
            .await
    }

    async fn quizzes_with_stats(&self) -> Result<Vec<QuizSummary>> {
        tracing::debug!("fetching quiz statistics");
        self.send(self.client.get(self.url(QUIZ_STATS_PATH))).await
    }
}
