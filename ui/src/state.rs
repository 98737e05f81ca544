//! Global application state and the browser-side adapters the core needs

use async_trait::async_trait;
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use smartquiz::auth::{KeyValueStore, SessionRepository};
use smartquiz::notify::{Notifier, Severity};
use smartquiz::routes::{Navigator, Route};
use smartquiz::timer::Timer;
use smartquiz::types::{AppError, AuthSession, Result};
use smartquiz::{ClientConfig, HttpGateway, StateCell};
use std::time::Duration;
use wasm_bindgen::JsValue;

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Client settings, fixed at startup
    pub config: ClientConfig,
    /// Signed-in student, restored from local storage on load
    pub session: RwSignal<Option<AuthSession>>,
    /// Notifications currently on screen
    pub toasts: RwSignal<Vec<Toast>>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        let session = match Self::session_repository().load() {
            Ok(session) => session,
            Err(err) => {
                tracing::error!(error = %err, "stored session is unreadable");
                None
            }
        };

        Self {
            config,
            session: RwSignal::new(session),
            toasts: RwSignal::new(vec![]),
        }
    }

    pub fn session_repository() -> SessionRepository<BrowserStore> {
        SessionRepository::new(BrowserStore)
    }

    /// Gateway client carrying the current session token, if any.
    pub fn gateway(&self) -> Result<HttpGateway> {
        let gateway = HttpGateway::new(&self.config)?;
        Ok(match self.session.get_untracked() {
            Some(session) => gateway.with_token(session.token),
            None => gateway,
        })
    }

    pub fn notifier(&self) -> ToastNotifier {
        ToastNotifier {
            toasts: self.toasts,
        }
    }

    pub fn student_name(&self) -> Option<String> {
        self.session
            .with(|s| s.as_ref().map(|session| session.student.name.clone()))
    }

    pub fn sign_out(&self) {
        if let Err(err) = Self::session_repository().clear() {
            tracing::error!(error = %err, "failed to clear stored session");
        }
        self.session.set(None);
    }
}

// ============= Core adapters =============

/// Reactive signal exposed to the core's view-state contract.
///
/// Accessors return `None` once the owning view has been disposed.
pub struct SignalCell<S: 'static>(pub RwSignal<S>);

impl<S> Clone for SignalCell<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SignalCell<S> {}

impl<S: Send + Sync + 'static> StateCell<S> for SignalCell<S> {
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }
}

/// `localStorage`, read and written as raw strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn storage_error(err: JsValue) -> AppError {
    AppError::Storage(format!("{:?}", err))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::raw().remove_item(key).map_err(storage_error)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// A notification on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub severity: Severity,
    pub message: String,
}

/// Pushes toasts and removes each one after [`TOAST_TTL`].
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id: id.clone(),
                severity,
                message: message.to_string(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::sleep(TOAST_TTL).await;
            toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

/// Router-backed [`Navigator`]; `Route::Back` walks browser history.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

/// Navigator for the current router context.
pub fn use_router_navigator() -> RouterNavigator<impl Fn(&str) + Clone + 'static> {
    let navigate = use_navigate();
    RouterNavigator {
        navigate: move |path: &str| navigate(path, Default::default()),
    }
}

impl<F: Fn(&str)> Navigator for RouterNavigator<F> {
    fn navigate(&self, route: Route) {
        match route.path() {
            Some(path) => (self.navigate)(&path),
            None => {
                let back = web_sys::window().map(|w| w.history().and_then(|h| h.back()));
                if let Some(Err(err)) = back {
                    tracing::warn!(error = ?err, "history navigation failed");
                }
            }
        }
    }
}
