//! `wql` runs one WQL query and writes the result set to stdout as JSON.
//!
//! ```text
//! wql [-n NAMESPACE] --fixture FILE SELECT Name, HandleCount FROM Win32_Process
//! ```
//!
//! The query is not quoted. Columns must be named; `*` is not supported.

mod args;
mod error;
mod fixture;
mod logging;


use crate::{args::Args, error::CliError};
use clap::Parser;
use std::{
    io::{self, Write},
    process::ExitCode,
};
use wql::{ConnectArgs, QuerySession, Row};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = logging::init(&args.log) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let plan = args.plan()?;
    let connector = fixture::load(&args.fixture)?;

    let mut connect = ConnectArgs::new();
    if let Some(namespace) = &args.namespace {
        connect = connect.namespace(namespace.as_str());
    }
    tracing::debug!(query = %plan.query, columns = ?plan.columns, ?connect, "running query");

    let session = QuerySession::new(connector).with_args(connect);
    let mut rows: Vec<Row> = Vec::new();
    session.query_rows(&plan.query, &plan.columns, &mut rows)?;

    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, &rows).map_err(CliError::Output)?;
    writeln!(out).map_err(CliError::Write)?;

    Ok(())
}
