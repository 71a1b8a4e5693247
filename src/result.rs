use crate::error::{Error, Result};
use crate::traits::DriverExec;

/// Outcome of a non-row-returning execution.
#[derive(Debug, Clone, Copy)]
pub struct ExecResult {
    rows_affected: Option<u64>,
    last_insert_id: Option<i64>,
}

impl ExecResult {
    pub(crate) fn new(exec: DriverExec) -> Self {
        Self {
            rows_affected: exec.rows_affected,
            last_insert_id: exec.last_insert_id,
        }
    }

    /// The driver-reported affected-row count.
    ///
    /// Fails with [`Error::UnsupportedRowsAffected`] only when the driver
    /// itself reported no count.
    pub fn rows_affected(&self) -> Result<u64> {
        self.rows_affected.ok_or(Error::UnsupportedRowsAffected)
    }

    /// The id generated for the last inserted row.
    ///
    /// Drivers without native support (the PostgreSQL family) always fail
    /// with [`Error::UnsupportedLastInsertId`]; a fixed error is returned
    /// rather than a zero that could be mistaken for a real id of 0.
    pub fn last_insert_id(&self) -> Result<i64> {
        self.last_insert_id.ok_or(Error::UnsupportedLastInsertId)
    }
}
