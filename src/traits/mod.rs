mod driver;

pub use driver::{
    Beginner, DriverConn, DriverExec, DriverResult, DriverRow, DriverRows, DriverTx, Execer,
    Querier, RowQuerier,
};
