//! View-lifetime cancellation
//!
//! Every asynchronous task a view starts (requests, delayed replies,
//! splash timers) runs under that view's [`ViewScope`]. Tearing the view
//! down calls [`ViewScope::cancel`], which aborts the registered futures so
//! none of their continuations touch state that no longer exists.

use futures::future::{AbortHandle, Abortable, Aborted};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation token scoped to one mounted view.
///
/// Cheap to clone; all clones share the same cancellation state.
#[derive(Clone, Default)]
pub struct ViewScope {
    inner: Arc<ScopeInner>,
}

#[derive(Default)]
struct ScopeInner {
    cancelled: AtomicBool,
    handles: Mutex<Vec<AbortHandle>>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `fut` so that cancelling this scope aborts it.
    ///
    /// A future guarded after cancellation is aborted before its first poll.
    pub fn guard<F: Future>(&self, fut: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        if self.is_cancelled() {
            handle.abort();
        } else {
            let mut handles = self.inner.handles.lock();
            handles.retain(|h| !h.is_aborted());
            handles.push(handle);
        }
        Abortable::new(fut, registration)
    }

    /// Drive `fut` to completion unless the scope is cancelled first.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        match self.guard(fut).await {
            Ok(output) if !self.is_cancelled() => Some(output),
            Ok(_) | Err(Aborted) => None,
        }
    }

    /// Abort every guarded future. Idempotent.
    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        let handles = std::mem::take(&mut *self.inner.handles.lock());
        tracing::debug!(tasks = handles.len(), "view scope cancelled");
        for handle in handles {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for ViewScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewScope")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    #[test]
    fn test_run_completes_when_live() {
        let scope = ViewScope::new();
        let out = block_on(scope.run(async { 7 }));
        assert_eq!(out, Some(7));
    }

    #[test]
    fn test_guard_after_cancel_never_polls() {
        let scope = ViewScope::new();
        scope.cancel();

        let mut polled = false;
        let out = block_on(scope.run(async {
            polled = true;
        }));

        assert!(out.is_none());
        assert!(!polled);
    }

    #[test]
    fn test_cancel_aborts_pending_future() {
        let scope = ViewScope::new();
        let (_tx, rx) = oneshot::channel::<u8>();
        let guarded = scope.guard(rx);

        scope.cancel();

        assert!(block_on(guarded).is_err());
        assert!(scope.is_cancelled());
    }

    #[test]
    fn test_clones_share_state() {
        let scope = ViewScope::new();
        let clone = scope.clone();
        clone.cancel();
        clone.cancel();
        assert!(scope.is_cancelled());
    }
}
