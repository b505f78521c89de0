/// Logging port used by the application layer.
///
/// Implemented in `infrastructure/logger` on top of `tracing`; tests plug in a mock.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
