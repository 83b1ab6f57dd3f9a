use crate::{bind::Coerced, model::RecordModel, traits::Record, types::Timestamp};
use std::{collections::VecDeque, rc::Rc, sync::Arc};

///
/// ElementShape
///
/// What a destination container holds, before validation.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElementShape {
    /// The record type itself.
    Record,
    /// An owning pointer to the record type.
    RecordRef,
    /// Anything else; rejected as an entity type.
    Invalid,
}

///
/// Element
///
/// A type a destination container can hold. Record types (via derive) and
/// pointers to them are valid; scalars, options, and vectors are not.
///

pub trait Element: Sized {
    type Record: Record;
    const SHAPE: ElementShape;

    fn from_record(record: Self::Record) -> Self;
}

impl<R: Record> Element for Box<R> {
    type Record = R;
    const SHAPE: ElementShape = ElementShape::RecordRef;

    fn from_record(record: R) -> Self {
        Self::new(record)
    }
}

impl<R: Record> Element for Rc<R> {
    type Record = R;
    const SHAPE: ElementShape = ElementShape::RecordRef;

    fn from_record(record: R) -> Self {
        Self::new(record)
    }
}

impl<R: Record> Element for Arc<R> {
    type Record = R;
    const SHAPE: ElementShape = ElementShape::RecordRef;

    fn from_record(record: R) -> Self {
        Self::new(record)
    }
}

macro_rules! impl_invalid_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                type Record = Unbound;
                const SHAPE: ElementShape = ElementShape::Invalid;

                fn from_record(_: Unbound) -> Self {
                    Self::default()
                }
            }
        )*
    };
}

impl_invalid_element!(
    bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String,
    Timestamp,
);

impl<T> Element for Option<T> {
    type Record = Unbound;
    const SHAPE: ElementShape = ElementShape::Invalid;

    fn from_record(_: Unbound) -> Self {
        None
    }
}

impl<T> Element for Vec<T> {
    type Record = Unbound;
    const SHAPE: ElementShape = ElementShape::Invalid;

    fn from_record(_: Unbound) -> Self {
        Self::new()
    }
}

///
/// Unbound
///
/// Placeholder record for element types that are not records.
/// Never bound: shape validation rejects these containers first.
///

#[doc(hidden)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Unbound;

impl Record for Unbound {
    const MODEL: &'static RecordModel = &RecordModel {
        name: "",
        fields: &[],
    };

    fn assign(&mut self, _: usize, _: Coerced) {}
}

///
/// Destination
///
/// Caller-owned container that receives bound records in source order.
///

pub trait Destination {
    type Element: Element;

    /// Only growable sequences are binding targets.
    const GROWABLE: bool;

    fn append(&mut self, element: Self::Element);
}

impl<E: Element> Destination for Vec<E> {
    type Element = E;
    const GROWABLE: bool = true;

    fn append(&mut self, element: E) {
        self.push(element);
    }
}

impl<E: Element> Destination for VecDeque<E> {
    type Element = E;
    const GROWABLE: bool = true;

    fn append(&mut self, element: E) {
        self.push_back(element);
    }
}

impl<E: Element> Destination for Option<E> {
    type Element = E;
    const GROWABLE: bool = false;

    fn append(&mut self, element: E) {
        *self = Some(element);
    }
}

///
/// QueryTarget
///
/// Anything `create_query` can derive a column list from: a record, a
/// pointer to one, or a sequence of either.
///

pub trait QueryTarget {
    fn record_model() -> Option<&'static RecordModel>;
}

const fn element_model<E: Element>() -> Option<&'static RecordModel> {
    match E::SHAPE {
        ElementShape::Invalid => None,
        ElementShape::Record | ElementShape::RecordRef => Some(<E::Record as Record>::MODEL),
    }
}

impl<E: Element> QueryTarget for Vec<E> {
    fn record_model() -> Option<&'static RecordModel> {
        element_model::<E>()
    }
}

impl<E: Element> QueryTarget for VecDeque<E> {
    fn record_model() -> Option<&'static RecordModel> {
        element_model::<E>()
    }
}

impl<R: Record> QueryTarget for Box<R> {
    fn record_model() -> Option<&'static RecordModel> {
        Some(R::MODEL)
    }
}

impl<R: Record> QueryTarget for Rc<R> {
    fn record_model() -> Option<&'static RecordModel> {
        Some(R::MODEL)
    }
}

impl<R: Record> QueryTarget for Arc<R> {
    fn record_model() -> Option<&'static RecordModel> {
        Some(R::MODEL)
    }
}
