//! Asynchronous request lifecycle controller
//!
//! Every screen that talks to the gateway runs its request through
//! [`run_request`], which walks a [`Lifecycle`] through
//! `idle -> pending -> settled{ok|error}`:
//!
//! - on success the value is installed into the lifecycle's data [`Slot`]
//!   and any previous error is cleared;
//! - on failure the previous data is left untouched, the error text is
//!   recorded and forwarded to the [`Notifier`];
//! - if the owning [`ViewScope`] is cancelled while the request is in
//!   flight, nothing is written at all.
//!
//! The controller does not deduplicate. Callers check
//! [`Lifecycle::is_pending`] (usually by disabling the submit control)
//! before starting a second request for the same action.
//!
//! View state lives wherever the UI runtime keeps it; [`StateCell`] is the
//! seam. The core implements it for `Rc<RefCell<S>>`, the browser build for
//! reactive signals.

use crate::notify::Notifier;
use crate::scope::ViewScope;
use crate::types::Result;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// Mutable view state that may disappear when its view unmounts.
///
/// Both accessors return `None` once the backing state is gone.
pub trait StateCell<S> {
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;

    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
}

impl<S> StateCell<S> for Rc<RefCell<S>> {
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<S, C: StateCell<S> + ?Sized> StateCell<S> for &C {
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        (**self).update(f)
    }

    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        (**self).read(f)
    }
}

/// A [`StateCell`] focused on one field of a larger state.
pub struct Lens<'a, C, S, T> {
    cell: &'a C,
    get: fn(&S) -> &T,
    get_mut: fn(&mut S) -> &mut T,
}

impl<'a, C, S, T> Lens<'a, C, S, T>
where
    C: StateCell<S>,
{
    pub fn new(cell: &'a C, get: fn(&S) -> &T, get_mut: fn(&mut S) -> &mut T) -> Self {
        Self { cell, get, get_mut }
    }
}

impl<C, S, T> StateCell<T> for Lens<'_, C, S, T>
where
    C: StateCell<S>,
{
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let get_mut = self.get_mut;
        self.cell.update(|s| f(get_mut(s)))
    }

    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let get = self.get;
        self.cell.read(|s| f(get(s)))
    }
}

/// Destination for a successful result.
pub trait Slot<T> {
    fn install(&mut self, value: T);
}

/// Keeps the latest successful value.
impl<T> Slot<T> for Option<T> {
    fn install(&mut self, value: T) {
        *self = Some(value);
    }
}

/// Discards results; for actions whose only effect is the side effect.
impl<T> Slot<T> for () {
    fn install(&mut self, _value: T) {}
}

/// Three-state request lifecycle plus the data it guards.
#[derive(Debug, Clone, PartialEq)]
pub struct Lifecycle<D> {
    pending: bool,
    error: Option<String>,
    data: D,
}

impl<D> Lifecycle<D> {
    pub fn new(data: D) -> Self {
        Self {
            pending: false,
            error: None,
            data,
        }
    }

    /// Start in the pending state, for screens that fetch on mount.
    pub fn pending(data: D) -> Self {
        Self {
            pending: true,
            error: None,
            data,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn is_idle(&self) -> bool {
        !self.pending && self.error.is_none()
    }

    fn begin(&mut self) {
        self.pending = true;
    }

    fn succeed<T>(&mut self, value: T)
    where
        D: Slot<T>,
    {
        self.data.install(value);
        self.pending = false;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.pending = false;
        self.error = Some(message);
    }
}

impl<D: Default> Default for Lifecycle<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

/// How a lifecycle-driven action ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The operation resolved and its value was installed.
    Completed(T),
    /// The operation (or client-side validation) failed; the message was
    /// shown to the user.
    Failed(String),
    /// The view was torn down first; no state was touched.
    Cancelled,
    /// The caller declined to start the action (e.g. already pending).
    Ignored,
}

impl<T> Outcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Completed(value) => Outcome::Completed(f(value)),
            Outcome::Failed(msg) => Outcome::Failed(msg),
            Outcome::Cancelled => Outcome::Cancelled,
            Outcome::Ignored => Outcome::Ignored,
        }
    }
}

/// Drive one invocation of `op` through the lifecycle held in `cell`.
///
/// `fallback` is shown when the error carries no message of its own.
pub async fn run_request<T, D, C, N, Fut>(
    scope: &ViewScope,
    cell: &C,
    notifier: &N,
    fallback: &str,
    op: Fut,
) -> Outcome<T>
where
    T: Clone,
    D: Slot<T>,
    C: StateCell<Lifecycle<D>>,
    N: Notifier + ?Sized,
    Fut: Future<Output = Result<T>>,
{
    if scope.is_cancelled() || cell.update(Lifecycle::begin).is_none() {
        return Outcome::Cancelled;
    }

    let result = match scope.run(op).await {
        Some(result) => result,
        None => {
            tracing::debug!("request dropped: view torn down while pending");
            return Outcome::Cancelled;
        }
    };

    match result {
        Ok(value) => {
            let installed = value.clone();
            match cell.update(move |lc| lc.succeed(installed)) {
                Some(()) => Outcome::Completed(value),
                None => Outcome::Cancelled,
            }
        }
        Err(err) => {
            let message = err.user_message(fallback);
            tracing::warn!(error = %err, "request failed");
            let recorded = message.clone();
            if cell.update(move |lc| lc.fail(recorded)).is_none() {
                return Outcome::Cancelled;
            }
            notifier.error(&message);
            Outcome::Failed(message)
        }
    }
}
