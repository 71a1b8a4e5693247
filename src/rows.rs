use std::sync::Arc;

use crate::error::{Error, ErrorClassifier, Result};
use crate::trace::{self, TraceLevel, TraceLogger};
use crate::traits::{DriverRow, DriverRows};
use crate::types::NamedRow;

/// A single-row query cursor.
///
/// The query call producing it never fails; any fault, including the
/// driver's "no rows" and "multiple rows" cases, surfaces on [`Row::scan`]
/// as a classified error.
pub struct Row {
    driver_row: Box<dyn DriverRow>,
    classifier: Arc<dyn ErrorClassifier>,
    tracer: Arc<dyn TraceLogger>,
}

impl Row {
    pub(crate) fn new(
        driver_row: Box<dyn DriverRow>,
        classifier: Arc<dyn ErrorClassifier>,
        tracer: Arc<dyn TraceLogger>,
    ) -> Self {
        Self {
            driver_row,
            classifier,
            tracer,
        }
    }

    pub fn scan(self) -> Result<NamedRow> {
        match self.driver_row.scan() {
            Ok(row) => {
                self.tracer.log(TraceLevel::Trace, "scanned a row", &[]);
                Ok(row)
            }
            Err(raw) => {
                let err = self.classifier.classify(raw);
                self.tracer.log(
                    TraceLevel::Error,
                    "failed to scan a row",
                    &[(trace::ERROR_KEY, err.to_string())],
                );
                Err(err)
            }
        }
    }
}

/// A multi-row query cursor supporting sequential advance-then-scan access.
pub struct Rows {
    driver_rows: Box<dyn DriverRows>,
    classifier: Arc<dyn ErrorClassifier>,
    tracer: Arc<dyn TraceLogger>,
    fault: Option<Error>,
}

impl Rows {
    pub(crate) fn new(
        driver_rows: Box<dyn DriverRows>,
        classifier: Arc<dyn ErrorClassifier>,
        tracer: Arc<dyn TraceLogger>,
    ) -> Self {
        Self {
            driver_rows,
            classifier,
            tracer,
            fault: None,
        }
    }

    /// Advance to the next row. Returns false at end-of-set or after a
    /// fault; the caller must then check [`Rows::err`].
    pub fn next(&mut self) -> bool {
        self.driver_rows.next()
    }

    pub fn scan(&mut self) -> Result<NamedRow> {
        match self.driver_rows.scan() {
            Ok(row) => {
                self.tracer.log(TraceLevel::Trace, "scanned a row", &[]);
                Ok(row)
            }
            Err(raw) => {
                let err = self.classifier.classify(raw);
                self.tracer.log(
                    TraceLevel::Error,
                    "failed to scan a row",
                    &[(trace::ERROR_KEY, err.to_string())],
                );
                Err(err)
            }
        }
    }

    /// Any fault encountered during iteration, classified. The fault is
    /// cached on first observation, so checking again after the loop sees
    /// the same error.
    pub fn err(&mut self) -> Option<&Error> {
        if self.fault.is_none() {
            self.fault = self
                .driver_rows
                .take_err()
                .map(|raw| self.classifier.classify(raw));
        }
        self.fault.as_ref()
    }

    /// Close the cursor. Always returns `Ok`: a request should not fail
    /// because cleanup did, so a driver close failure is only observable
    /// through instrumentation.
    pub fn close(mut self) -> Result<()> {
        if let Err(err) = self.driver_rows.close() {
            self.tracer.log(
                TraceLevel::Error,
                "failed to close the rows",
                &[(trace::ERROR_KEY, err.to_string())],
            );
        } else {
            self.tracer.log(TraceLevel::Trace, "closed the rows", &[]);
        }
        Ok(())
    }

    /// Drain the cursor: scan every remaining row, surface any iteration
    /// fault, then close. The cursor is closed on every path, including
    /// failures.
    pub fn collect(mut self) -> Result<Vec<NamedRow>> {
        let mut rows = Vec::new();
        while self.next() {
            match self.scan() {
                Ok(row) => rows.push(row),
                Err(err) => {
                    self.close()?;
                    return Err(err);
                }
            }
        }
        self.err();
        let fault = self.fault.take();
        self.close()?;
        match fault {
            Some(err) => Err(err),
            None => Ok(rows),
        }
    }
}
