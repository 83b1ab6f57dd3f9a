//! Query execution: the session boundary, the result-set driver, and query
//! synthesis.
//!
//! Every query runs under one process-wide lock from connect to release.

mod executor;
mod lock;
pub mod memory;
mod session;
pub mod statement;
mod synthesize;


pub use executor::{
    QuerySession, Row, execute_query as query, execute_query_namespace as query_namespace,
    execute_rows as query_rows,
};
pub use memory::{MemoryConnector, MemoryRecord};
pub use session::{ConnectArgs, Connector, DEFAULT_NAMESPACE, LOCAL_SERVER, ResultSet, Session};
pub use statement::{Columns, SelectStatement, StatementError};
pub use synthesize::{create_query, create_query_for};
