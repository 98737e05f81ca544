//! Mock collaborators for testing.
//!
//! These stand in for the gateway, storage, notification sink, router and
//! timer so view flows can be exercised without a browser or a backend.

use async_trait::async_trait;
use smartquiz::auth::session::{KeyValueStore, MemoryStore};
use smartquiz::notify::{Notifier, Severity};
use smartquiz::routes::{Navigator, Route};
use smartquiz::timer::Timer;
use smartquiz::types::{
    AppError, AuthSession, QuizSummary, RegisterRequest, Result, StudentProfile,
};
use smartquiz::QuizGateway;
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Mock gateway with configurable responses and call counters.
///
/// # Examples
///
/// ```ignore
/// // A gateway that accepts every login
/// let gateway = MockGateway::new().with_session(sample_session());
///
/// // A gateway that rejects with a message
/// let gateway = MockGateway::new().failing(401, Some("Invalid credentials"));
/// ```
pub struct MockGateway {
    session: Option<AuthSession>,
    quizzes: RefCell<Vec<Vec<QuizSummary>>>,
    error: Option<AppError>,
    latency: Duration,
    pub login_calls: Cell<usize>,
    pub register_calls: Cell<usize>,
    pub fetch_calls: Cell<usize>,
    pub last_register: RefCell<Option<RegisterRequest>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            session: None,
            quizzes: RefCell::new(Vec::new()),
            error: None,
            latency: Duration::ZERO,
            login_calls: Cell::new(0),
            register_calls: Cell::new(0),
            fetch_calls: Cell::new(0),
            last_register: RefCell::new(None),
        }
    }

    /// Successful auth calls return `session`.
    pub fn with_session(mut self, session: AuthSession) -> Self {
        self.session = Some(session);
        self
    }

    /// Queue one snapshot per fetch; the last one repeats.
    pub fn with_snapshots(self, snapshots: Vec<Vec<QuizSummary>>) -> Self {
        *self.quizzes.borrow_mut() = snapshots;
        self
    }

    /// Every call fails with a gateway error.
    pub fn failing(mut self, status: u16, message: Option<&str>) -> Self {
        self.error = Some(AppError::Gateway {
            status,
            message: message.map(str::to_string),
        });
        self
    }

    /// Every call sleeps on the tokio clock before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn respond<T>(&self, value: Option<T>) -> Result<T> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        value.ok_or_else(|| AppError::Internal("mock has no response configured".to_string()))
    }
}

#[async_trait(?Send)]
impl QuizGateway for MockGateway {
    async fn login(&self, _email: &str, _password: &str) -> Result<AuthSession> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.respond(self.session.clone()).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthSession> {
        self.register_calls.set(self.register_calls.get() + 1);
        *self.last_register.borrow_mut() = Some(request.clone());
        self.respond(self.session.clone()).await
    }

    async fn quizzes_with_stats(&self) -> Result<Vec<QuizSummary>> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        let next = {
            let mut queue = self.quizzes.borrow_mut();
            if queue.len() > 1 {
                Some(queue.remove(0))
            } else {
                queue.first().cloned()
            }
        };
        self.respond(Some(next.unwrap_or_default())).await
    }
}

/// Store that counts writes per key on top of [`MemoryStore`].
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    pub writes: RefCell<Vec<String>>,
    pub fail_writes: bool,
    fail_key: RefCell<Option<String>>,
}

impl CountingStore {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// From now on, writes to `key` fail while other keys still succeed.
    pub fn fail_writes_to(&self, key: &str) {
        *self.fail_key.borrow_mut() = Some(key.to_string());
    }

    pub fn writes_to(&self, key: &str) -> usize {
        self.writes.borrow().iter().filter(|k| *k == key).count()
    }
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes || self.fail_key.borrow().as_deref() == Some(key) {
            return Err(AppError::Storage("quota exceeded".to_string()));
        }
        self.writes.borrow_mut().push(key.to_string());
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }
}

/// Notifier that keeps everything it is told.
#[derive(Default)]
pub struct RecordingNotifier {
    pub events: RefCell<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn last(&self) -> Option<(Severity, String)> {
        self.events.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.events.borrow_mut().push((severity, message.to_string()));
    }
}

/// Navigator that records requested routes.
#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: RefCell<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

/// Timer on tokio's clock; pair with `start_paused = true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

pub fn sample_session() -> AuthSession {
    AuthSession {
        token: "eyJhbGciOiJIUzI1NiJ9.test".to_string(),
        student: StudentProfile {
            id: Some("s-001".to_string()),
            name: "Meera Nair".to_string(),
            email: "meera@college.edu".to_string(),
            usn: Some("1XX21CS045".to_string()),
            branch: Some("CSE".to_string()),
            year: Some("3".to_string()),
            semester: Some("5".to_string()),
            ..StudentProfile::default()
        },
    }
}

pub fn sample_quiz(id: &str, average_score: Option<f64>) -> QuizSummary {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "title": format!("Unit test {}", id),
        "createdAt": "2026-02-14T08:00:00Z",
        "attemptCount": 4,
        "submittedCount": 3,
        "averageScore": average_score,
    }))
    .expect("valid quiz fixture")
}
