use super::*;
use crate::{
    bind::Coerced,
    model::FieldKind,
    test_fixtures::{LogonSession, Process},
    types::Timestamp,
};
use std::{collections::VecDeque, rc::Rc, sync::Arc};
use time::OffsetDateTime;

#[test]
fn field_kinds_follow_rust_types() {
    assert_eq!(<i8 as FieldType>::KIND, FieldKind::Int);
    assert_eq!(<i64 as FieldType>::KIND, FieldKind::Int);
    assert_eq!(<u16 as FieldType>::KIND, FieldKind::Uint);
    assert_eq!(<usize as FieldType>::KIND, FieldKind::Uint);
    assert_eq!(<bool as FieldType>::KIND, FieldKind::Bool);
    assert_eq!(<String as FieldType>::KIND, FieldKind::Text);
    assert_eq!(<Timestamp as FieldType>::KIND, FieldKind::Timestamp);
    assert_eq!(<OffsetDateTime as FieldType>::KIND, FieldKind::Timestamp);
    assert_eq!(<f64 as FieldType>::KIND, FieldKind::Unsupported);
    assert_eq!(<Vec<u8> as FieldType>::KIND, FieldKind::Unsupported);
}

#[test]
fn option_wraps_inner_kind() {
    assert_eq!(<Option<u32> as FieldType>::KIND, FieldKind::Uint);
    assert!(<Option<u32> as FieldType>::OPTIONAL);
    assert!(!<u32 as FieldType>::OPTIONAL);
}

#[test]
fn integer_assignment_truncates_to_width() {
    let mut narrow = 0_i8;
    FieldType::assign(&mut narrow, Coerced::Int(300));
    assert_eq!(narrow, 44);

    let mut unsigned = 0_u8;
    FieldType::assign(&mut unsigned, Coerced::Uint(257));
    assert_eq!(unsigned, 1);
}

#[test]
fn assignment_of_other_kind_leaves_slot() {
    let mut flag = true;
    FieldType::assign(&mut flag, Coerced::Int(0));
    assert!(flag);

    let mut load = 1.5_f64;
    FieldType::assign(&mut load, Coerced::Text("0.25".to_string()));
    assert!((load - 1.5).abs() < f64::EPSILON);
}

#[test]
fn optional_assignment_sets_some() {
    let mut parent: Option<u32> = None;
    FieldType::assign(&mut parent, Coerced::Uint(4));
    assert_eq!(parent, Some(4));
}

#[test]
fn element_shapes() {
    assert_eq!(<Process as Element>::SHAPE, ElementShape::Record);
    assert_eq!(<Box<Process> as Element>::SHAPE, ElementShape::RecordRef);
    assert_eq!(<Rc<Process> as Element>::SHAPE, ElementShape::RecordRef);
    assert_eq!(<Arc<LogonSession> as Element>::SHAPE, ElementShape::RecordRef);
    assert_eq!(<u32 as Element>::SHAPE, ElementShape::Invalid);
    assert_eq!(<String as Element>::SHAPE, ElementShape::Invalid);
    assert_eq!(<Option<Process> as Element>::SHAPE, ElementShape::Invalid);
    assert_eq!(<Vec<Process> as Element>::SHAPE, ElementShape::Invalid);
}

#[test]
fn destinations_append_in_order() {
    let mut list = VecDeque::new();
    Destination::append(&mut list, Box::new(Process::default()));
    Destination::append(
        &mut list,
        Box::new(Process {
            name: "second".to_string(),
            ..Process::default()
        }),
    );

    assert_eq!(list.len(), 2);
    assert_eq!(list[1].name, "second");
    assert!(<VecDeque<Box<Process>> as Destination>::GROWABLE);
    assert!(!<Option<Process> as Destination>::GROWABLE);
}

#[test]
fn query_target_models() {
    let model = <Vec<Process> as QueryTarget>::record_model().map(|m| m.name);
    assert_eq!(model, Some("Win32_Process"));

    let model = <VecDeque<Arc<LogonSession>> as QueryTarget>::record_model().map(|m| m.name);
    assert_eq!(model, Some("Win32_LogonSession"));

    assert_eq!(<Box<Process> as QueryTarget>::record_model().map(|m| m.name), Some("Win32_Process"));
    assert_eq!(<Rc<Process> as QueryTarget>::record_model().map(|m| m.name), Some("Win32_Process"));
    assert_eq!(
        <Arc<LogonSession> as QueryTarget>::record_model().map(|m| m.name),
        Some("Win32_LogonSession")
    );
    assert!(<Vec<u32> as QueryTarget>::record_model().is_none());
    assert!(<Vec<Option<Process>> as QueryTarget>::record_model().is_none());
}

#[test]
fn unbound_model_is_empty() {
    assert_eq!(<Unbound as Record>::MODEL.name, "");
    assert!(<Unbound as Record>::MODEL.fields.is_empty());
}
