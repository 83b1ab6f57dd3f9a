use crate::{
    error::QueryError,
    model::RecordModel,
    traits::{Destination, Element, ElementShape, Record},
};

///
/// BindCategory
///
/// How bound records are stored in the destination container.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BindCategory {
    ByValue,
    ByReference,
}

///
/// Shape
///
/// A validated destination: its storage category and record model.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Shape {
    pub category: BindCategory,
    pub model: &'static RecordModel,
}

/// Classify a destination container type.
///
/// Valid targets are growable sequences of a record type or of an owning
/// pointer to one; everything else is [`QueryError::InvalidEntityType`].
pub fn classify<D>() -> Result<Shape, QueryError>
where
    D: Destination + ?Sized,
{
    if !D::GROWABLE {
        return Err(QueryError::InvalidEntityType);
    }

    let category = match <D::Element as Element>::SHAPE {
        ElementShape::Record => BindCategory::ByValue,
        ElementShape::RecordRef => BindCategory::ByReference,
        ElementShape::Invalid => return Err(QueryError::InvalidEntityType),
    };

    Ok(Shape {
        category,
        model: <<D::Element as Element>::Record as Record>::MODEL,
    })
}
