//! Request-scoped observability for Stride workloads.
//!
//! Structured logging with request correlation: every log line carries
//! the request ID, workload name, and route, in JSON or human format.

mod context;
mod logging;

pub use context::RequestId;
pub use logging::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
