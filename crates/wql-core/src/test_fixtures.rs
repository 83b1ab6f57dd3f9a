//! Hand-written records and sources shared by unit tests.

use crate::{
    bind::{Coerced, PropertySource},
    error::{PropertyError, SessionError},
    model::{FieldKind, FieldModel, RecordModel},
    traits::{Element, ElementShape, FieldType, QueryTarget, Record},
    types::Timestamp,
    value::Value,
};
use std::collections::BTreeMap;

///
/// Process
///

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Process {
    pub name: String,
    pub handle_count: u32,
    pub priority: i8,
    pub critical: bool,
    pub creation_date: Timestamp,
    pub parent_id: Option<u32>,
    pub caption: Option<String>,
    pub load: f64,
}

impl Record for Process {
    const MODEL: &'static RecordModel = &RecordModel {
        name: "Win32_Process",
        fields: &[
            FieldModel::new("Name", <String as FieldType>::KIND, false, true),
            FieldModel::new("HandleCount", <u32 as FieldType>::KIND, false, true),
            FieldModel::new("Priority", <i8 as FieldType>::KIND, false, true),
            FieldModel::new("Critical", <bool as FieldType>::KIND, false, true),
            FieldModel::new("CreationDate", <Timestamp as FieldType>::KIND, false, true),
            FieldModel::new("ParentId", <u32 as FieldType>::KIND, true, true),
            FieldModel::new("Caption", <String as FieldType>::KIND, true, true),
            FieldModel::new("Load", FieldKind::Unsupported, false, true),
        ],
    };

    fn assign(&mut self, index: usize, value: Coerced) {
        match index {
            0 => FieldType::assign(&mut self.name, value),
            1 => FieldType::assign(&mut self.handle_count, value),
            2 => FieldType::assign(&mut self.priority, value),
            3 => FieldType::assign(&mut self.critical, value),
            4 => FieldType::assign(&mut self.creation_date, value),
            5 => FieldType::assign(&mut self.parent_id, value),
            6 => FieldType::assign(&mut self.caption, value),
            7 => FieldType::assign(&mut self.load, value),
            _ => {}
        }
    }
}

impl Element for Process {
    type Record = Self;
    const SHAPE: ElementShape = ElementShape::Record;

    fn from_record(record: Self) -> Self {
        record
    }
}

impl QueryTarget for Process {
    fn record_model() -> Option<&'static RecordModel> {
        Some(Self::MODEL)
    }
}

///
/// LogonSession
/// Record with a non-public field.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct LogonSession {
    pub(crate) session_id: u32,
    pub user: String,
}

impl Record for LogonSession {
    const MODEL: &'static RecordModel = &RecordModel {
        name: "Win32_LogonSession",
        fields: &[
            FieldModel::new("SessionId", <u32 as FieldType>::KIND, false, false),
            FieldModel::new("User", <String as FieldType>::KIND, false, true),
        ],
    };

    fn assign(&mut self, index: usize, value: Coerced) {
        match index {
            0 => FieldType::assign(&mut self.session_id, value),
            1 => FieldType::assign(&mut self.user, value),
            _ => {}
        }
    }
}

impl Element for LogonSession {
    type Record = Self;
    const SHAPE: ElementShape = ElementShape::Record;

    fn from_record(record: Self) -> Self {
        record
    }
}

impl QueryTarget for LogonSession {
    fn record_model() -> Option<&'static RecordModel> {
        Some(Self::MODEL)
    }
}

///
/// Props
/// Property bag backed by a map; `fail_on` names a property whose lookup
/// fails at the session layer.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct Props {
    values: BTreeMap<String, Value>,
    fail_on: Option<String>,
}

impl Props {
    pub(crate) fn new<const N: usize>(entries: [(&str, Value); N]) -> Self {
        Self {
            values: entries
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            fail_on: None,
        }
    }

    pub(crate) fn fail_on(mut self, name: &str) -> Self {
        self.fail_on = Some(name.to_string());
        self
    }
}

impl PropertySource for Props {
    fn property(&self, name: &str) -> Result<Value, PropertyError> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(SessionError::property(format!("lost connection reading {name}")).into());
        }

        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| PropertyError::missing(name))
    }
}

/// A fully populated, well-formed process property bag.
pub(crate) fn process_props(name: &str, handles: i64) -> Props {
    Props::new([
        ("Name", Value::from(name)),
        ("HandleCount", Value::Int(handles)),
        ("Priority", Value::Int(8)),
        ("Critical", Value::Bool(false)),
        ("CreationDate", Value::from("20240315093012.123456+060")),
        ("ParentId", Value::Int(4)),
        ("Caption", Value::Null),
        ("Load", Value::from("0.25")),
    ])
}
