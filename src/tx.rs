use std::sync::Arc;

use crate::error::{ErrorClassifier, Result};
use crate::result::ExecResult;
use crate::rows::{Row, Rows};
use crate::runner;
use crate::stmt::Stmt;
use crate::trace::{self, TraceLevel, TraceLogger};
use crate::traits::DriverTx;
use crate::types::SqlValue;

/// An open unit-of-work scoped to one connection.
///
/// [`Tx::commit`] and [`Tx::rollback`] consume the transaction, so the
/// terminal states of the lifecycle are enforced by move semantics: a
/// committed or rolled back transaction cannot be touched again. Either
/// call forwards to the driver exactly once and is never retried.
pub struct Tx {
    driver: Box<dyn DriverTx>,
    classifier: Arc<dyn ErrorClassifier>,
    tracer: Arc<dyn TraceLogger>,
}

impl std::fmt::Debug for Tx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tx").finish_non_exhaustive()
    }
}

impl Tx {
    pub(crate) fn new(
        driver: Box<dyn DriverTx>,
        classifier: Arc<dyn ErrorClassifier>,
        tracer: Arc<dyn TraceLogger>,
    ) -> Self {
        Self {
            driver,
            classifier,
            tracer,
        }
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

    /// Bind a query to this transaction. Never fails.
    pub fn prepare(&self, query: &str) -> Result<Stmt<'_, dyn DriverTx>> {
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

    /// Open a nested transaction. Whether this yields a savepoint, a true
    /// nested transaction, or an error is the driver's own policy; the
    /// adapter imposes none.
    pub async fn begin(&self) -> Result<Tx> {
        runner::run_begin(self.driver.as_ref(), &self.classifier, &self.tracer).await
    }

    pub async fn commit(self) -> Result<()> {
        match self.driver.commit().await {
            Ok(()) => {
                self.tracer
                    .log(TraceLevel::Trace, "committed a transaction", &[]);
                Ok(())
            }
            Err(raw) => {
                let err = self.classifier.classify(raw);
                self.tracer.log(
                    TraceLevel::Error,
                    "failed to commit a transaction",
                    &[(trace::ERROR_KEY, err.to_string())],
                );
                Err(err)
            }
        }
    }

    pub async fn rollback(self) -> Result<()> {
        match self.driver.rollback().await {
            Ok(()) => {
                self.tracer
                    .log(TraceLevel::Trace, "rolled back a transaction", &[]);
                Ok(())
            }
            Err(raw) => {
                let err = self.classifier.classify(raw);
                self.tracer.log(
                    TraceLevel::Error,
                    "failed to rollback a transaction",
                    &[(trace::ERROR_KEY, err.to_string())],
                );
                Err(err)
            }
        }
    }
}
