mod tokio_postgres;

use thiserror::Error;

pub use self::in_memory_test::{
    InMemoryClassifier, InMemoryDriver, RecordedCall, ScriptedRows, ServerError,
};
pub use self::tokio_postgres::{connect, PgDriverConn, PgErrorClassifier};

/// Row-count fault raised by bindings whose single-row cursor materializes
/// the full match before scanning. Classifiers map these to the canonical
/// no-rows and too-many-rows errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RowCountError {
    #[error("query returned no rows")]
    NoRows,

    #[error("query returned more than one row")]
    TooManyRows,
}
