//! ## Crate layout
//! - `core`: values, coercion, the record binder, the result-set driver,
//!   query synthesis, and the session boundary traits.
//! - `Record`: derive macro generating a record's static field list.
//!
//! ```ignore
//! use wql::prelude::*;
//!
//! #[derive(Debug, Default, Record)]
//! #[record(name = "Win32_Process", rename_all = "PascalCase")]
//! pub struct Process {
//!     pub name: String,
//!     pub handle_count: u32,
//! }
//!
//! let session = QuerySession::new(connector);
//! let mut processes: Vec<Process> = Vec::new();
//! session.query(&create_query::<Vec<Process>>(""), &mut processes)?;
//! ```

pub use wql_core as core;
pub use wql_derive::Record;

// generated code names `::wql::core`, including inside this crate
extern crate self as wql;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{
    db::{
        ConnectArgs, Connector, QuerySession, Row, create_query, create_query_for, query,
        query_namespace, query_rows,
    },
    error::{QueryError, SessionError},
};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        Record,
        core::{
            db::{ConnectArgs, QuerySession, create_query},
            traits::{Destination as _, Record as _},
            types::Timestamp,
            value::Value,
        },
    };
}
