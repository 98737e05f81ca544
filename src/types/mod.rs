use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============= Chat Types =============

/// A single entry in the chat transcript.
///
/// Messages are immutable once created; the transcript only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl Message {
    /// Create a message authored by the person at the keyboard.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create a message authored by the assistant.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }

    /// Wall-clock label shown under the bubble, e.g. `09:41`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

// ============= Quiz Types =============

/// Read-only projection of a quiz with its attempt statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub attempt_count: u32,
    #[serde(default)]
    pub submitted_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
}

// ============= Authentication Types =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload. The confirmation field never leaves the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub usn: String,
    pub branch: String,
    pub year: String,
    pub semester: String,
}

/// Snapshot of the student profile returned by the gateway.
///
/// Unknown fields are kept so the cached blob round-trips whatever the
/// backend sends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default, rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Successful authentication: opaque token plus profile snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub student: StudentProfile,
}

/// Error body returned by the gateway on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
}

// ============= Error Types =============

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Gateway error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Gateway {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Human-readable text for the notification sink.
    ///
    /// Only gateway messages and client-side validation text are shown
    /// verbatim; everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Gateway {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            AppError::InvalidInput(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
