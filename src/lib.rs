//! # SmartQuiz client core
//!
//! Runtime-agnostic building blocks behind the Faculty Quest / SmartQuiz
//! portals: the request lifecycle every screen runs its gateway calls
//! through, the list and form state those screens render, the session
//! record written after sign-in, the chat widget model and the splash
//! sequence.
//!
//! Nothing in this crate depends on a UI framework. Views keep their state
//! wherever their runtime wants (reactive signals in the Leptos build,
//! `Rc<RefCell<_>>` in tests) and expose it through
//! [`StateCell`](lifecycle::StateCell).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use smartquiz::{ClientConfig, HttpGateway, ViewScope, TracingNotifier};
//! use smartquiz::results::{fetch_results, initial_state};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let config = ClientConfig::from_env()?;
//! let gateway = HttpGateway::new(&config)?;
//! let scope = ViewScope::new();
//! let state = Rc::new(RefCell::new(initial_state()));
//!
//! fetch_results(&scope, &state, &gateway, &TracingNotifier).await;
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `http` | reqwest-backed [`HttpGateway`] (default) |
//!
//! ## Modules
//!
//! - [`lifecycle`] - idle/pending/settled controller for gateway calls
//! - [`collection`] - append-or-replace list state
//! - [`auth`] - credential form and session repository
//! - [`chat`] - quiz-generation chat widget
//! - [`results`] - quiz statistics dashboard
//! - [`splash`] - loading screen sequence
//! - [`gateway`] - backend API contract and HTTP client
//! - [`types`] - wire types and error handling

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// Credential drafts, sign-in flows and the session record.
pub mod auth;
/// Quiz-generation chat widget.
pub mod chat;
/// Ordered list state.
pub mod collection;
/// Backend API contract and HTTP implementation.
pub mod gateway;
/// Request lifecycle controller.
pub mod lifecycle;
/// Notification sink contract.
pub mod notify;
/// Results dashboard view model.
pub mod results;
/// Routing boundary.
pub mod routes;
/// View-lifetime cancellation.
pub mod scope;
/// Splash/loading sequence.
pub mod splash;
/// Timer abstraction.
pub mod timer;
/// Core types (wire payloads, messages, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use auth::{CredentialForm, KeyValueStore, MemoryStore, SessionRepository};
pub use chat::{ChatState, ReplyGenerator, ScriptedReply};
pub use collection::ListState;
#[cfg(feature = "http")]
pub use gateway::HttpGateway;
pub use gateway::QuizGateway;
pub use lifecycle::{run_request, Lifecycle, Outcome, StateCell};
pub use notify::{Notifier, Severity, TracingNotifier};
pub use routes::{Navigator, Route};
pub use scope::ViewScope;
pub use splash::{SplashConfig, SplashState};
pub use timer::Timer;
pub use types::{AppError, Result};
pub use utils::config::ClientConfig;
