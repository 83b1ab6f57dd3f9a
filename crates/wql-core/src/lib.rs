//! Core runtime for wql: the record model, field coercion, the per-record
//! binder, and the result-set driver.
//!
//! Records are plain structs deriving `Record` (see the `wql` crate). A query
//! opens a session through a [`db::Connector`], walks the result set, binds
//! each source record into a fresh destination record, and appends it.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod bind;
pub mod db;
pub mod error;
pub mod model;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Record-facing vocabulary only. Connectors and errors stay one module
/// level down.
///

pub mod prelude {
    pub use crate::{
        db::{ConnectArgs, QuerySession, create_query},
        traits::{Destination, Record},
        types::Timestamp,
        value::Value,
    };
}
