//! The logging contract the adapter instruments itself through.
//!
//! The adapter never talks to a logging backend directly; it emits through
//! [`TraceLogger`], so instrumentation is toggled by the implementation a
//! caller supplies. [`NoopLogger`] disables it entirely, [`TracingLogger`]
//! forwards to the `tracing` ecosystem.

use std::sync::Arc;

/// Severity of an adapter trace event.
///
/// Successful operations and lifecycle events log at [`TraceLevel::Trace`];
/// failures log at [`TraceLevel::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLevel {
    Trace,
    Error,
}

pub const ERROR_KEY: &str = "error";
pub const QUERY_KEY: &str = "query";
pub const ROWS_AFFECTED_KEY: &str = "rows_affected";
pub const DURATION_KEY: &str = "duration";

/// Structured fields attached to a trace event.
pub type Fields = Vec<(&'static str, String)>;

/// Structured logger consumed by the adapter.
///
/// Implementations must be cheap to clone contextually: `with` binds fields
/// to every subsequent event, `with_caller_skip` adjusts call-site
/// attribution for backends that resolve the caller by walking stack frames
/// (the adapter sits several frames above the triggering call).
pub trait TraceLogger: Send + Sync {
    fn log(&self, level: TraceLevel, message: &str, fields: &[(&'static str, String)]);

    fn with(&self, fields: Fields) -> Arc<dyn TraceLogger>;

    fn with_caller_skip(&self, skip: usize) -> Arc<dyn TraceLogger>;
}

/// Logger that drops every event. Supplying it disables instrumentation
/// without changing any operation's behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl TraceLogger for NoopLogger {
    fn log(&self, _level: TraceLevel, _message: &str, _fields: &[(&'static str, String)]) {}

    fn with(&self, _fields: Fields) -> Arc<dyn TraceLogger> {
        Arc::new(NoopLogger)
    }

    fn with_caller_skip(&self, _skip: usize) -> Arc<dyn TraceLogger> {
        Arc::new(NoopLogger)
    }
}

/// [`TraceLogger`] backed by the `tracing` crate.
///
/// Bound fields accumulate across `with` calls and are rendered into each
/// event. `tracing` resolves callsites at the macro, so the configured
/// caller skip is surfaced as a `caller_skip` field for subscribers that
/// re-resolve the origin themselves.
#[derive(Debug, Default, Clone)]
pub struct TracingLogger {
    bound: Fields,
    caller_skip: usize,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn render(&self, fields: &[(&'static str, String)]) -> String {
        let mut out = String::new();
        for (key, value) in self.bound.iter().chain(fields.iter()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        if self.caller_skip > 0 {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("caller_skip={}", self.caller_skip));
        }
        out
    }
}

impl TraceLogger for TracingLogger {
    fn log(&self, level: TraceLevel, message: &str, fields: &[(&'static str, String)]) {
        let rendered = self.render(fields);
        match level {
            TraceLevel::Trace => {
                tracing::trace!(target: "sqlbridge", fields = %rendered, "{message}")
            }
            TraceLevel::Error => {
                tracing::error!(target: "sqlbridge", fields = %rendered, "{message}")
            }
        }
    }

    fn with(&self, fields: Fields) -> Arc<dyn TraceLogger> {
        let mut bound = self.bound.clone();
        bound.extend(fields);
        Arc::new(TracingLogger {
            bound,
            caller_skip: self.caller_skip,
        })
    }

    fn with_caller_skip(&self, skip: usize) -> Arc<dyn TraceLogger> {
        Arc::new(TracingLogger {
            bound: self.bound.clone(),
            caller_skip: skip,
        })
    }
}
