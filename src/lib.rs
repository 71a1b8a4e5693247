//! sqlbridge - a driver-agnostic SQL data-access layer
//!
//! Presents one stable operation set (exec, query, query-row, prepare,
//! begin/commit/rollback, ping, close) over an underlying database driver,
//! normalizing the driver's failure signals into a small portable error
//! taxonomy and optionally instrumenting every operation with structured
//! tracing. The adapter is written exclusively against minimal capability
//! traits, never against a concrete driver type.
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//! use sqlbridge::{drivers, ErrorKind, NoopLogger, SqlValue};
//!
//! let conn = drivers::connect("postgres://localhost/mydb", Arc::new(NoopLogger)).await?;
//!
//! let result = conn
//!     .exec(
//!         "INSERT INTO users (name) VALUES ($1)",
//!         &[SqlValue::from("John")],
//!     )
//!     .await;
//! match result {
//!     Ok(r) => println!("inserted {} row(s)", r.rows_affected()?),
//!     Err(e) if e.kind() == ErrorKind::UniqueViolation => println!("already exists"),
//!     Err(e) => return Err(e),
//! }
//!
//! let row = conn
//!     .query_row("SELECT id, name FROM users WHERE name = $1", &[
//!         SqlValue::from("John"),
//!     ])
//!     .await
//!     .scan()?;
//! let id = row.get("id")?.as_i64();
//! ```

pub mod drivers;
pub mod error;
pub mod trace;
pub mod traits;
pub mod types;

mod conn;
mod result;
mod rows;
mod runner;
mod stmt;
mod tx;

// Re-export main types for convenient access
pub use conn::Conn;
pub use error::{DriverError, Error, ErrorClassifier, ErrorKind, NoopClassifier, Result};
pub use result::ExecResult;
pub use rows::{Row, Rows};
pub use stmt::Stmt;
pub use trace::{NoopLogger, TraceLevel, TraceLogger, TracingLogger};
pub use tx::Tx;
pub use types::{NamedRow, SqlValue};
