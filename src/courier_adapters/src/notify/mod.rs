pub mod tracing_alert_sink;
pub mod tracing_progress_sink;

pub use tracing_alert_sink::TracingAlertSink;
pub use tracing_progress_sink::TracingProgressSink;
