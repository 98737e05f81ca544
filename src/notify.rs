//! Notification sink contract
//!
//! Views surface transient success/failure messages through a
//! [`Notifier`]. The browser build renders toasts; anything else can fall
//! back to [`TracingNotifier`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);

    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, severity: Severity, message: &str) {
        (**self).notify(severity, message)
    }
}

impl<N: Notifier + ?Sized> Notifier for std::rc::Rc<N> {
    fn notify(&self, severity: Severity, message: &str) {
        (**self).notify(severity, message)
    }
}

/// Writes notifications to the tracing subscriber instead of the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => tracing::info!(%message, "notification"),
            Severity::Error => tracing::error!(%message, "notification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(Severity, String)>>);

    impl Notifier for Recorder {
        fn notify(&self, severity: Severity, message: &str) {
            self.0.borrow_mut().push((severity, message.to_string()));
        }
    }

    #[test]
    fn test_helpers_route_severity_through_references() {
        let recorder = std::rc::Rc::new(Recorder::default());
        let by_ref: &dyn Notifier = &recorder;

        by_ref.success("Saved");
        recorder.error("Offline");

        assert_eq!(
            *recorder.0.borrow(),
            vec![
                (Severity::Success, "Saved".to_string()),
                (Severity::Error, "Offline".to_string()),
            ]
        );
    }

    #[test]
    fn test_tracing_notifier_stands_in_for_a_toast_sink() {
        fn surface(notifier: &impl Notifier) {
            notifier.success("Quiz created");
            notifier.error("Could not reach the server");
        }

        surface(&TracingNotifier);
        surface(&std::rc::Rc::new(TracingNotifier));
    }
}
