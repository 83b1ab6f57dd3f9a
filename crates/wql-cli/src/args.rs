use crate::error::CliError;
use clap::Parser;
use std::path::PathBuf;
use wql::core::db::{Columns, SelectStatement};

///
/// Args
///

#[derive(Debug, Parser)]
#[command(
    name = "wql",
    version,
    about = "Run a WQL query and print the result set as JSON",
    after_help = "WHERE clauses are not supported: the fixture source returns whole classes."
)]
pub struct Args {
    /// Namespace to query (defaults to root\cimv2).
    #[arg(short = 'n', long, env = "WQL_NAMESPACE")]
    pub namespace: Option<String>,

    /// JSON file of namespace -> class -> records served as the source.
    #[arg(long, env = "WQL_FIXTURE")]
    pub fixture: PathBuf,

    /// Log filter written to stderr, e.g. `warn` or `wql_core=debug`.
    #[arg(long, env = "WQL_LOG", default_value = "warn")]
    pub log: String,

    /// The query, unquoted: SELECT <columns> FROM <class>.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

///
/// Plan
/// Query text plus the columns each output row carries.
///

#[derive(Debug, Eq, PartialEq)]
pub struct Plan {
    pub query: String,
    pub columns: Vec<String>,
}

impl Args {
    pub fn plan(&self) -> Result<Plan, CliError> {
        plan(&self.query)
    }
}

/// Validate the query words and collect the selected columns.
pub fn plan<S: AsRef<str>>(words: &[S]) -> Result<Plan, CliError> {
    let statement = SelectStatement::from_words(words.iter().map(AsRef::as_ref))?;

    let Columns::Named(columns) = statement.columns else {
        return Err(CliError::Wildcard);
    };
    if let Some(predicate) = statement.predicate {
        return Err(CliError::Predicate { predicate });
    }
    let query = words.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");

    Ok(Plan { query, columns })
}
