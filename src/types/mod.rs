mod row;
mod sql_value;

pub use row::NamedRow;
pub use sql_value::SqlValue;
