use tracing::debug;

/// Non-blocking, user-visible feedback for an action.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints notifications to the terminal.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        debug!(notification = "success", "{}", message);
        println!("✓ {}", message);
    }

    fn error(&self, message: &str) {
        debug!(notification = "error", "{}", message);
        eprintln!("✗ {}", message);
    }
}
