//! Shared dispatch helpers behind Conn, Tx, and Stmt.
//!
//! Every query-shaped operation funnels through here: bind the query text
//! to the tracer, time the driver call, classify any failure, and emit
//! exactly one trace event. Instrumentation is strictly an observer; it
//! never changes an operation's outcome.

use std::sync::Arc;
use std::time::Instant;

use crate::error::{ErrorClassifier, Result};
use crate::result::ExecResult;
use crate::rows::{Row, Rows};
use crate::trace::{self, TraceLevel, TraceLogger};
use crate::tx::Tx;
use crate::traits::{Beginner, Execer, Querier, RowQuerier};
use crate::types::SqlValue;

pub(crate) async fn run_exec<E>(
    execer: &E,
    classifier: &Arc<dyn ErrorClassifier>,
    tracer: &Arc<dyn TraceLogger>,
    query: &str,
    params: &[SqlValue],
) -> Result<ExecResult>
where
    E: Execer + ?Sized,
{
    let tracer = tracer.with(vec![(trace::QUERY_KEY, query.to_string())]);

    let start = Instant::now();
    let outcome = execer.exec(query, params).await;
    let elapsed = start.elapsed();

    match outcome {
        Ok(exec) => {
            let mut fields = vec![(trace::DURATION_KEY, format!("{elapsed:?}"))];
            if let Some(n) = exec.rows_affected {
                fields.push((trace::ROWS_AFFECTED_KEY, n.to_string()));
            }
            tracer.log(TraceLevel::Trace, "executed", &fields);
            Ok(ExecResult::new(exec))
        }
        Err(raw) => {
            let err = classifier.classify(raw);
            tracer.log(
                TraceLevel::Error,
                "failed to execute",
                &[(trace::ERROR_KEY, err.to_string())],
            );
            Err(err)
        }
    }
}

pub(crate) async fn run_query<Q>(
    querier: &Q,
    classifier: &Arc<dyn ErrorClassifier>,
    tracer: &Arc<dyn TraceLogger>,
    query: &str,
    params: &[SqlValue],
) -> Result<Rows>
where
    Q: Querier + ?Sized,
{
    let tracer = tracer.with(vec![(trace::QUERY_KEY, query.to_string())]);

    let start = Instant::now();
    let outcome = querier.query(query, params).await;
    let elapsed = start.elapsed();

    match outcome {
        Ok(driver_rows) => {
            tracer.log(
                TraceLevel::Trace,
                "executed",
                &[(trace::DURATION_KEY, format!("{elapsed:?}"))],
            );
            Ok(Rows::new(driver_rows, Arc::clone(classifier), tracer))
        }
        Err(raw) => {
            let err = classifier.classify(raw);
            tracer.log(
                TraceLevel::Error,
                "failed to execute",
                &[(trace::ERROR_KEY, err.to_string())],
            );
            Err(err)
        }
    }
}

pub(crate) async fn run_query_row<R>(
    row_querier: &R,
    classifier: &Arc<dyn ErrorClassifier>,
    tracer: &Arc<dyn TraceLogger>,
    query: &str,
    params: &[SqlValue],
) -> Row
where
    R: RowQuerier + ?Sized,
{
    let tracer = tracer.with(vec![(trace::QUERY_KEY, query.to_string())]);

    let start = Instant::now();
    let driver_row = row_querier.query_row(query, params).await;
    let elapsed = start.elapsed();

    tracer.log(
        TraceLevel::Trace,
        "executed",
        &[(trace::DURATION_KEY, format!("{elapsed:?}"))],
    );

    Row::new(driver_row, Arc::clone(classifier), tracer)
}

pub(crate) async fn run_begin<B>(
    beginner: &B,
    classifier: &Arc<dyn ErrorClassifier>,
    tracer: &Arc<dyn TraceLogger>,
) -> Result<Tx>
where
    B: Beginner + ?Sized,
{
    match beginner.begin().await {
        Ok(driver_tx) => {
            tracer.log(TraceLevel::Trace, "began a transaction", &[]);
            Ok(Tx::new(
                driver_tx,
                Arc::clone(classifier),
                Arc::clone(tracer),
            ))
        }
        Err(raw) => {
            let err = classifier.classify(raw);
            tracer.log(
                TraceLevel::Error,
                "failed to begin a transaction",
                &[(trace::ERROR_KEY, err.to_string())],
            );
            Err(err)
        }
    }
}
