//! Fixed-delay timer abstraction
//!
//! The core never picks an async runtime. The browser build sleeps on
//! `setTimeout` through gloo-timers; native tests use tokio's clock.

use async_trait::async_trait;
use std::time::Duration;

/// Source of fixed-delay suspension points.
#[async_trait(?Send)]
pub trait Timer {
    /// Resolve once `duration` has elapsed.
    async fn sleep(&self, duration: Duration);
}

#[async_trait(?Send)]
impl<T: Timer + ?Sized> Timer for &T {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await
    }
}

#[async_trait(?Send)]
impl<T: Timer + ?Sized> Timer for std::rc::Rc<T> {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await
    }
}
