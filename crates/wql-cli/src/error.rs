use std::{io, path::PathBuf};
use thiserror::Error as ThisError;
use wql::{QueryError, core::db::StatementError};

///
/// CliError
///

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("wql: cannot read fixture {path:?}: {source}")]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("wql: invalid fixture {path:?}: {source}")]
    FixtureJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("wql: invalid log filter {filter:?}: {reason}")]
    LogFilter { filter: String, reason: String },

    #[error("wql: cannot encode rows: {0}")]
    Output(#[source] serde_json::Error),

    #[error("wql: filters are not supported by the fixture source, found {predicate:?}")]
    Predicate { predicate: String },

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Statement(#[from] StatementError),

    #[error("wql: must specify columns, * not supported")]
    Wildcard,

    #[error("wql: cannot write output: {0}")]
    Write(#[source] io::Error),
}
