//! Gateway contract
//!
//! The backend API is an external collaborator. Views depend on
//! [`QuizGateway`] only, so tests and alternative transports can stand in
//! for the HTTP implementation in [`http`].

#[cfg(feature = "http")]
pub mod http;

use crate::types::{AuthSession, QuizSummary, RegisterRequest, Result};
use async_trait::async_trait;

#[cfg(feature = "http")]
pub use http::HttpGateway;

/// Operations the portal screens call on the backend.
///
/// Futures are not `Send`: the browser runs everything on one event loop.
#[async_trait(?Send)]
pub trait QuizGateway {
    /// Authenticate a student with email and password.
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession>;

    /// Create a student account and sign it in.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthSession>;

    /// Every quiz together with its attempt statistics.
    async fn quizzes_with_stats(&self) -> Result<Vec<QuizSummary>>;
}

#[async_trait(?Send)]
impl<G: QuizGateway + ?Sized> QuizGateway for std::rc::Rc<G> {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        (**self).login(email, password).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthSession> {
        (**self).register(request).await
    }

    async fn quizzes_with_stats(&self) -> Result<Vec<QuizSummary>> {
        (**self).quizzes_with_stats().await
    }
}
