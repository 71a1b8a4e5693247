use thiserror::Error;

/// An opaque error produced by an underlying driver.
///
/// Drivers report failures through this alias; the adapter never inspects
/// them beyond what the configured [`ErrorClassifier`] does.
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Canonical error for sqlbridge operations.
///
/// Classified variants keep the original driver error as their source, so
/// callers match on the variant (or [`Error::kind`]) for portable handling
/// and reach the driver-specific detail through [`Error::driver_error`].
#[derive(Debug, Error)]
pub enum Error {
    /// The driver has no native last-insert-id mechanism.
    #[error("unsupported last insert id")]
    UnsupportedLastInsertId,

    /// The driver did not report an affected-row count.
    #[error("unsupported rows affected")]
    UnsupportedRowsAffected,

    #[error("no rows in result set")]
    NoRows(#[source] DriverError),

    #[error("too many rows in result set")]
    TooManyRows(#[source] DriverError),

    #[error("violated the check constraint")]
    CheckViolation(#[source] DriverError),

    #[error("violated the unique constraint")]
    UniqueViolation(#[source] DriverError),

    #[error("violated the not null constraint")]
    NotNullViolation(#[source] DriverError),

    #[error("violated the foreign key constraint")]
    ForeignKeyViolation(#[source] DriverError),

    /// A row lookup referenced a column the result does not contain.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// A driver error no classification rule matched, passed through verbatim.
    #[error(transparent)]
    Driver(DriverError),
}

/// Result type alias for sqlbridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Discriminant of [`Error`], for matching without touching the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedLastInsertId,
    UnsupportedRowsAffected,
    NoRows,
    TooManyRows,
    CheckViolation,
    UniqueViolation,
    NotNullViolation,
    ForeignKeyViolation,
    ColumnNotFound,
    Driver,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedLastInsertId => ErrorKind::UnsupportedLastInsertId,
            Error::UnsupportedRowsAffected => ErrorKind::UnsupportedRowsAffected,
            Error::NoRows(_) => ErrorKind::NoRows,
            Error::TooManyRows(_) => ErrorKind::TooManyRows,
            Error::CheckViolation(_) => ErrorKind::CheckViolation,
            Error::UniqueViolation(_) => ErrorKind::UniqueViolation,
            Error::NotNullViolation(_) => ErrorKind::NotNullViolation,
            Error::ForeignKeyViolation(_) => ErrorKind::ForeignKeyViolation,
            Error::ColumnNotFound(_) => ErrorKind::ColumnNotFound,
            Error::Driver(_) => ErrorKind::Driver,
        }
    }

    /// Build a classified error of the given kind around a driver error.
    ///
    /// Kinds that do not carry a driver cause fall back to pass-through.
    pub fn classified(kind: ErrorKind, source: DriverError) -> Self {
        match kind {
            ErrorKind::NoRows => Error::NoRows(source),
            ErrorKind::TooManyRows => Error::TooManyRows(source),
            ErrorKind::CheckViolation => Error::CheckViolation(source),
            ErrorKind::UniqueViolation => Error::UniqueViolation(source),
            ErrorKind::NotNullViolation => Error::NotNullViolation(source),
            ErrorKind::ForeignKeyViolation => Error::ForeignKeyViolation(source),
            _ => Error::Driver(source),
        }
    }

    /// The original driver error behind this one, if any.
    pub fn driver_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::NoRows(e)
            | Error::TooManyRows(e)
            | Error::CheckViolation(e)
            | Error::UniqueViolation(e)
            | Error::NotNullViolation(e)
            | Error::ForeignKeyViolation(e)
            | Error::Driver(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Consume this error, yielding the original driver error if one is held.
    pub fn into_driver_error(self) -> Option<DriverError> {
        match self {
            Error::NoRows(e)
            | Error::TooManyRows(e)
            | Error::CheckViolation(e)
            | Error::UniqueViolation(e)
            | Error::NotNullViolation(e)
            | Error::ForeignKeyViolation(e)
            | Error::Driver(e) => Some(e),
            _ => None,
        }
    }
}

/// Maps a raw driver error to a canonical [`Error`].
///
/// Each driver binding ships its own classifier holding that driver's code
/// table and sentinel set; the canonical variants are shared across drivers.
/// A classifier must never drop the raw error: unmatched errors come back as
/// [`Error::Driver`].
pub trait ErrorClassifier: Send + Sync {
    fn classify(&self, err: DriverError) -> Error;
}

/// Classifier with an empty rule table; every error passes through verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClassifier;

impl ErrorClassifier for NoopClassifier {
    fn classify(&self, err: DriverError) -> Error {
        Error::Driver(err)
    }
}

/// SQLSTATE class 23 (integrity constraint violation) codes, shared by every
/// binding whose driver reports standard SQLSTATEs.
pub fn constraint_kind(sql_state: &str) -> Option<ErrorKind> {
    match sql_state {
        "23514" => Some(ErrorKind::CheckViolation),
        "23505" => Some(ErrorKind::UniqueViolation),
        "23502" => Some(ErrorKind::NotNullViolation),
        "23503" => Some(ErrorKind::ForeignKeyViolation),
        _ => None,
    }
}
