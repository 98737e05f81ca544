//! Student authentication on the client side
//!
//! This module holds the login/registration screen's state and the session
//! record written after a successful sign-in.
//!
//! # Module Structure
//!
//! - [`auth::form`](crate::auth::form) - credential drafts and the submit flows
//! - [`auth::session`](crate::auth::session) - the session record in client-side storage
//!
//! # Usage
//!
//! ```ignore
//! use smartquiz::auth::{form, CredentialForm, SessionRepository, MemoryStore};
//!
//! let form = Rc::new(RefCell::new(CredentialForm::default()));
//! let session = SessionRepository::new(MemoryStore::default());
//!
//! form::submit_login(&scope, &form, &gateway, &session, &notifier, &navigator).await;
//! ```
//!
//! Nothing here validates, refreshes or revokes the token; it is stored
//! as an opaque string and only removed by [`SessionRepository::clear`].

/// Credential drafts and submit flows.
pub mod form;
/// Session record persistence.
pub mod session;

pub use form::{AuthTab, CredentialForm, LoginDraft, LoginField, RegisterDraft, RegisterField};
pub use session::{KeyValueStore, MemoryStore, SessionRepository};
