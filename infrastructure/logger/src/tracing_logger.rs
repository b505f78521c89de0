use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`; the subscriber is set up by each binary.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "PullDate -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "PullDate -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "PullDate -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "PullDate -- ", "{}", message);
    }
}
