//! Binding-facing traits.
//!
//! `Record` is generated by `#[derive(Record)]`. `FieldType` is implemented
//! here for every supported field type. `Element` and `Destination` describe
//! the caller's container so its shape can be checked before any work.

mod field;
mod shape;

#[cfg(test)]
mod tests;

pub use field::FieldType;
pub use shape::{Destination, Element, ElementShape, QueryTarget, Unbound};

use crate::{bind::Coerced, model::RecordModel};

///
/// Record
///
/// A destination record type with a static, ordered field list.
///
/// ## Semantics
/// - `Default` provides the freshly allocated instance each source record
///   is bound into
/// - `MODEL.fields[i]` describes the field written by `assign(i, _)`
/// - `assign` is only called for settable fields, with a value already
///   coerced to that field's kind
///

pub trait Record: Default + 'static {
    const MODEL: &'static RecordModel;

    fn assign(&mut self, index: usize, value: Coerced);
}
