use serde_json::Value;
use tracing::{error, warn};

/// Sink for user-visible error notifications (toasts, banners, ...)
pub trait Notifier: Send + Sync {
    /// Shows `message` to the user as an error
    fn notify_error(&self, message: &str);
}

/// Navigation hook used to move the user to another view
pub trait Navigator: Send + Sync {
    /// Navigates to `path`, handing `state` to the target view
    fn navigate_to(&self, path: &str, state: Value);
}

/// Notifier that only writes the message to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        warn!("Notification: {}", message);
    }
}

/// Navigator that only writes the navigation to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate_to(&self, path: &str, state: Value) {
        error!("Navigation to {} with state {}", path, state);
    }
}
