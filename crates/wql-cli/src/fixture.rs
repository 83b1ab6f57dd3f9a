//! JSON fixture loading: `{ namespace: { class: [ { property: value } ] } }`.

use crate::error::CliError;
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};
use wql::core::{
    db::{MemoryConnector, MemoryRecord},
    value::Value,
};

///
/// Fixture
///

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Fixture {
    namespaces: BTreeMap<String, BTreeMap<String, Vec<BTreeMap<String, Value>>>>,
}

impl Fixture {
    pub fn into_connector(self) -> MemoryConnector {
        let mut connector = MemoryConnector::new();
        for (namespace, classes) in self.namespaces {
            for (class, records) in classes {
                connector.declare(&namespace, &class);
                for record in records {
                    connector.insert(&namespace, &class, record.into_iter().collect::<MemoryRecord>());
                }
            }
        }

        connector
    }
}

pub fn parse(path: &Path, text: &str) -> Result<MemoryConnector, CliError> {
    let fixture: Fixture = serde_json::from_str(text).map_err(|source| CliError::FixtureJson {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(fixture.into_connector())
}

pub fn load(path: &Path) -> Result<MemoryConnector, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::FixtureIo {
        path: path.to_path_buf(),
        source,
    })?;

    parse(path, &text)
}
