use std::sync::Arc;

use crate::error::{ErrorClassifier, Result};
use crate::result::ExecResult;
use crate::rows::{Row, Rows};
use crate::runner;
use crate::trace::TraceLogger;
use crate::traits::{Execer, Querier, RowQuerier};
use crate::types::SqlValue;

/// A query string bound to its execution context.
///
/// A statement is sugar, not a resource: the adapter holds no driver-side
/// prepared handle, it only replays the bound query through the same
/// dispatch as the context it was prepared on.
pub struct Stmt<'a, C: ?Sized> {
    conn: &'a C,
    classifier: Arc<dyn ErrorClassifier>,
    tracer: Arc<dyn TraceLogger>,
    query: String,
}

impl<'a, C> Stmt<'a, C>
where
    C: Execer + Querier + RowQuerier + ?Sized,
{
    pub(crate) fn new(
        conn: &'a C,
        classifier: Arc<dyn ErrorClassifier>,
        tracer: Arc<dyn TraceLogger>,
        query: String,
    ) -> Self {
        Self {
            conn,
            classifier,
            tracer,
            query,
        }
    }

    /// The bound query text.
    pub fn query_text(&self) -> &str {
        &self.query
    }

    pub async fn exec(&self, params: &[SqlValue]) -> Result<ExecResult> {
        runner::run_exec(
            self.conn,
            &self.classifier,
            &self.tracer,
            &self.query,
            params,
        )
        .await
    }

    pub async fn query(&self, params: &[SqlValue]) -> Result<Rows> {
        runner::run_query(
            self.conn,
            &self.classifier,
            &self.tracer,
            &self.query,
            params,
        )
        .await
    }

    pub async fn query_row(&self, params: &[SqlValue]) -> Row {
        runner::run_query_row(
            self.conn,
            &self.classifier,
            &self.tracer,
            &self.query,
            params,
        )
        .await
    }

    /// Does nothing and always succeeds: no driver-side prepared resource
    /// is held.
    pub fn close(self) -> Result<()> {
        Ok(())
    }
}
