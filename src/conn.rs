use std::sync::Arc;

use crate::error::{ErrorClassifier, NoopClassifier, Result};
use crate::result::ExecResult;
use crate::rows::{Row, Rows};
use crate::runner;
use crate::stmt::Stmt;
use crate::trace::{self, NoopLogger, TraceLevel, TraceLogger};
use crate::traits::DriverConn;
use crate::tx::Tx;
use crate::types::SqlValue;

/// One live database session.
///
/// A `Conn` exclusively owns the driver connection handle it is built over;
/// the handle, classifier, and tracer are set at construction and never
/// reassigned. Concurrency safety is exactly that of the underlying driver:
/// the adapter adds no locking of its own.
pub struct Conn {
    driver: Box<dyn DriverConn>,
    classifier: Arc<dyn ErrorClassifier>,
    tracer: Arc<dyn TraceLogger>,
}

impl Conn {
    /// Wrap an already established driver connection.
    ///
    /// Starts with an empty classifier table and instrumentation disabled;
    /// see [`Conn::with_classifier`] and [`Conn::with_tracer`].
    pub fn new(driver: Box<dyn DriverConn>) -> Self {
        Self {
            driver,
            classifier: Arc::new(NoopClassifier),
            tracer: Arc::new(NoopLogger),
        }
    }

    /// Use the given driver binding's error classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn ErrorClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Instrument every operation through the given logger.
    pub fn with_tracer(mut self, tracer: Arc<dyn TraceLogger>) -> Self {
        self.tracer = tracer;
        self
    }

    pub async fn exec(&self, query: &str, params: &[SqlValue]) -> Result<ExecResult> {
        runner::run_exec(
            self.driver.as_ref(),
            &self.classifier,
            &self.tracer,
            query,
            params,
        )
        .await
    }

    pub async fn query(&self, query: &str, params: &[SqlValue]) -> Result<Rows> {
        runner::run_query(
            self.driver.as_ref(),
            &self.classifier,
            &self.tracer,
            query,
            params,
        )
        .await
    }

    pub async fn query_row(&self, query: &str, params: &[SqlValue]) -> Row {
        runner::run_query_row(
            self.driver.as_ref(),
            &self.classifier,
            &self.tracer,
            query,
            params,
        )
        .await
    }

    /// Bind a query to this connection. Never fails.
    pub fn prepare(&self, query: &str) -> Result<Stmt<'_, dyn DriverConn>> {
        self.tracer.log(
            TraceLevel::Trace,
            "prepared a statement",
            &[(trace::QUERY_KEY, query.to_string())],
        );
        Ok(Stmt::new(
            self.driver.as_ref(),
            Arc::clone(&self.classifier),
            Arc::clone(&self.tracer),
            query.to_string(),
        ))
    }

    /// Open a transaction scoped to this connection.
    pub async fn begin(&self) -> Result<Tx> {
        runner::run_begin(self.driver.as_ref(), &self.classifier, &self.tracer).await
    }

    pub async fn ping(&self) -> Result<()> {
        match self.driver.ping().await {
            Ok(()) => {
                self.tracer
                    .log(TraceLevel::Trace, "pinged the connection", &[]);
                Ok(())
            }
            Err(raw) => {
                let err = self.classifier.classify(raw);
                self.tracer.log(
                    TraceLevel::Error,
                    "failed to ping the connection",
                    &[(trace::ERROR_KEY, err.to_string())],
                );
                Err(err)
            }
        }
    }

    /// Close the connection. Always returns `Ok`: close is best-effort from
    /// the caller's perspective, and a driver close failure is only
    /// observable through instrumentation.
    pub async fn close(self) -> Result<()> {
        if let Err(err) = self.driver.close().await {
            self.tracer.log(
                TraceLevel::Error,
                "failed to close the connection",
                &[(trace::ERROR_KEY, err.to_string())],
            );
        } else {
            self.tracer
                .log(TraceLevel::Trace, "closed the connection", &[]);
        }
        Ok(())
    }
}
