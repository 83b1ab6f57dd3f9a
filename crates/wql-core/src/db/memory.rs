//! In-memory session source.
//!
//! Serves fixed records per namespace and class. Property, class, and
//! namespace names match case-insensitively, as the remote data model does.
//! Predicates are not evaluated.

use crate::{
    bind::PropertySource,
    db::{
        session::{ConnectArgs, Connector, DEFAULT_NAMESPACE, LOCAL_SERVER, ResultSet, Session},
        statement::{Columns, SelectStatement},
    },
    error::{PropertyError, SessionError},
    value::Value,
};
use std::{collections::BTreeMap, sync::Arc};

///
/// MemoryRecord
///
/// Ordered property bag.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryRecord {
    properties: Vec<(String, Value)>,
}

impl MemoryRecord {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// Set a property, replacing any existing one of the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();

        match self.position(&name) {
            Some(index) => self.properties[index] = (name, value),
            None => self.properties.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|index| &self.properties[index].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.properties
            .iter()
            .position(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
    }

    // Keep only the named properties, in the requested order.
    fn project(&self, columns: &[String]) -> Self {
        columns
            .iter()
            .filter_map(|column| {
                let index = self.position(column)?;
                Some(self.properties[index].clone())
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MemoryRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.set(name, value);
        }

        record
    }
}

impl PropertySource for MemoryRecord {
    fn property(&self, name: &str) -> Result<Value, PropertyError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| PropertyError::missing(name))
    }
}

///
/// MemoryNamespace
///

#[derive(Clone, Debug, Default)]
pub struct MemoryNamespace {
    classes: BTreeMap<String, Vec<MemoryRecord>>,
}

impl MemoryNamespace {
    fn records(&self, class: &str) -> Option<&[MemoryRecord]> {
        self.classes
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(class))
            .map(|(_, records)| records.as_slice())
    }
}

///
/// MemoryConnector
///

#[derive(Clone, Debug, Default)]
pub struct MemoryConnector {
    namespaces: BTreeMap<String, Arc<MemoryNamespace>>,
}

impl MemoryConnector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to `class` in `namespace`, creating both if needed.
    pub fn insert(&mut self, namespace: &str, class: &str, record: MemoryRecord) {
        self.class_mut(namespace, class).push(record);
    }

    /// Create `class` in `namespace` with no records, so queries against it
    /// return an empty result set instead of an invalid class error.
    pub fn declare(&mut self, namespace: &str, class: &str) {
        self.class_mut(namespace, class);
    }

    fn class_mut(&mut self, namespace: &str, class: &str) -> &mut Vec<MemoryRecord> {
        let namespace = Arc::make_mut(self.namespaces.entry(namespace_key(namespace)).or_default());
        let class = match namespace
            .classes
            .keys()
            .find(|name| name.eq_ignore_ascii_case(class))
        {
            Some(existing) => existing.clone(),
            None => class.to_string(),
        };

        namespace.classes.entry(class).or_default()
    }

    /// Append a record to `class` in [`DEFAULT_NAMESPACE`].
    #[must_use]
    pub fn with_record(mut self, class: &str, record: MemoryRecord) -> Self {
        self.insert(DEFAULT_NAMESPACE, class, record);
        self
    }

    #[must_use]
    pub fn with_records(
        mut self,
        namespace: &str,
        class: &str,
        records: impl IntoIterator<Item = MemoryRecord>,
    ) -> Self {
        for record in records {
            self.insert(namespace, class, record);
        }
        self
    }
}

impl Connector for MemoryConnector {
    type Session = MemorySession;

    fn connect(&self, args: &ConnectArgs) -> Result<MemorySession, SessionError> {
        let server = args.server_or_default();
        if !is_local(server) {
            return Err(SessionError::connect(format!(
                "the RPC server {server:?} is unavailable"
            )));
        }

        let namespace = args.namespace_or_default();
        let data = self
            .namespaces
            .get(&namespace_key(namespace))
            .cloned()
            .ok_or_else(|| SessionError::connect(format!("invalid namespace {namespace:?}")))?;

        Ok(MemorySession { data })
    }
}

///
/// MemorySession
///

#[derive(Clone, Debug)]
pub struct MemorySession {
    data: Arc<MemoryNamespace>,
}

impl Session for MemorySession {
    type Results = MemoryResultSet;

    fn execute(&self, query: &str) -> Result<MemoryResultSet, SessionError> {
        let statement =
            SelectStatement::parse(query).map_err(|err| SessionError::execute(err.to_string()))?;

        if let Some(predicate) = &statement.predicate {
            return Err(SessionError::unsupported(format!(
                "the in-memory source does not evaluate predicates: {predicate}"
            )));
        }

        let records = self
            .data
            .records(&statement.class)
            .ok_or_else(|| SessionError::execute(format!("invalid class {:?}", statement.class)))?;

        let records = match &statement.columns {
            Columns::All => records.to_vec(),
            Columns::Named(columns) => records.iter().map(|r| r.project(columns)).collect(),
        };

        Ok(MemoryResultSet { records })
    }
}

///
/// MemoryResultSet
///

#[derive(Clone, Debug)]
pub struct MemoryResultSet {
    records: Vec<MemoryRecord>,
}

impl ResultSet for MemoryResultSet {
    type Item = MemoryRecord;

    fn count(&self) -> Result<usize, SessionError> {
        Ok(self.records.len())
    }

    fn item(&self, position: usize) -> Result<MemoryRecord, SessionError> {
        self.records.get(position).cloned().ok_or_else(|| {
            SessionError::fetch(format!(
                "position {position} out of range for {} records",
                self.records.len()
            ))
        })
    }
}

// `root/CIMV2` and `ROOT\cimv2` name the same namespace.
fn namespace_key(namespace: &str) -> String {
    namespace.replace('/', "\\").to_ascii_lowercase()
}

fn is_local(server: &str) -> bool {
    server == LOCAL_SERVER || server.eq_ignore_ascii_case("localhost")
}
