//! The binding engine: shape validation, the coercion table, and the
//! per-record binder.

mod coercion;
mod record;
mod shape;


pub use coercion::{Coerced, Coercion, coerce};
pub use record::{BindReport, bind_record};
pub use shape::{BindCategory, Shape, classify};

use crate::{error::PropertyError, value::Value};

///
/// PropertySource
///
/// Named-property lookup on one source record. The binder depends on this
/// capability only, never on a concrete transport.
///

pub trait PropertySource {
    /// Fetch a property by name. An absent property is
    /// [`PropertyError::Missing`]; any other error aborts the query.
    fn property(&self, name: &str) -> Result<Value, PropertyError>;
}

impl<S: PropertySource + ?Sized> PropertySource for &S {
    fn property(&self, name: &str) -> Result<Value, PropertyError> {
        (**self).property(name)
    }
}
