use async_trait::async_trait;

use crate::error::DriverError;
use crate::types::{NamedRow, SqlValue};

/// Result type alias for driver-level operations.
pub type DriverResult<T> = std::result::Result<T, DriverError>;

/// Outcome of a driver-level execute.
///
/// `None` in either field means the driver has no native support for that
/// value; the adapter surfaces the gap as a canonical error rather than a
/// zero that could be mistaken for a real count or id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverExec {
    pub rows_affected: Option<u64>,
    pub last_insert_id: Option<i64>,
}

/// Single-row cursor returned by a driver's query-row call.
///
/// The call itself never fails; the outcome (including the driver's
/// "no rows" and "multiple rows" sentinels) surfaces on scan.
pub trait DriverRow: Send {
    fn scan(self: Box<Self>) -> DriverResult<NamedRow>;
}

/// Multi-row cursor over a driver's query result, advanced then scanned.
pub trait DriverRows: Send {
    /// Advance to the next row. Returns false at end-of-set or after a fault.
    fn next(&mut self) -> bool;

    /// The row the cursor currently points at.
    fn scan(&mut self) -> DriverResult<NamedRow>;

    /// Any fault encountered during iteration. The fault is taken; later
    /// calls return `None`.
    fn take_err(&mut self) -> Option<DriverError>;

    fn close(&mut self) -> DriverResult<()>;
}

/// Executes a non-row-returning query.
#[async_trait]
pub trait Execer: Send + Sync {
    async fn exec(&self, query: &str, params: &[SqlValue]) -> DriverResult<DriverExec>;
}

/// Executes a multi-row query.
#[async_trait]
pub trait Querier: Send + Sync {
    async fn query(
        &self,
        query: &str,
        params: &[SqlValue],
    ) -> DriverResult<Box<dyn DriverRows>>;
}

/// Executes a single-row query. Errors are deferred to the cursor's scan.
#[async_trait]
pub trait RowQuerier: Send + Sync {
    async fn query_row(&self, query: &str, params: &[SqlValue]) -> Box<dyn DriverRow>;
}

/// Opens a transaction. On a transaction handle, nesting semantics (true
/// nesting, savepoints, or an error) are the driver's own.
#[async_trait]
pub trait Beginner: Send + Sync {
    async fn begin(&self) -> DriverResult<Box<dyn DriverTx>>;
}

/// A live driver connection. The adapter owns exactly one per [`crate::Conn`]
/// and is written against this composition of capabilities, never against a
/// concrete driver type.
#[async_trait]
pub trait DriverConn: Execer + Querier + RowQuerier + Beginner {
    async fn ping(&self) -> DriverResult<()>;

    /// Tear down the connection. Failures are reported so the adapter can
    /// log them, but never reach the caller.
    async fn close(&self) -> DriverResult<()>;
}

/// An open driver transaction. Commit and rollback are forwarded by the
/// adapter exactly once and never retried.
#[async_trait]
pub trait DriverTx: Execer + Querier + RowQuerier + Beginner {
    async fn commit(&self) -> DriverResult<()>;

    async fn rollback(&self) -> DriverResult<()>;
}
