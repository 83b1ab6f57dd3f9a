use crate::{
    bind::{BindReport, PropertySource, bind_record, classify},
    db::{
        lock::SessionGuard,
        session::{ConnectArgs, Connector, ResultSet, Session},
        statement::SelectStatement,
    },
    error::{FieldMismatch, MismatchReason, PropertyError, QueryError},
    traits::{Destination, Element},
    value::Value,
};
use std::collections::BTreeMap;
use tracing::debug;

///
/// Row
/// Dynamically bound record: selected column name → value.
///

pub type Row = BTreeMap<String, Value>;

///
/// QuerySession
///
/// Connector plus default connection arguments.
///

#[derive(Debug)]
pub struct QuerySession<C> {
    connector: C,
    args: ConnectArgs,
}

impl<C: Connector> QuerySession<C> {
    #[must_use]
    pub const fn new(connector: C) -> Self {
        Self {
            connector,
            args: ConnectArgs::new(),
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: ConnectArgs) -> Self {
        self.args = args;
        self
    }

    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.args.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub const fn connector(&self) -> &C {
        &self.connector
    }

    #[must_use]
    pub const fn args(&self) -> &ConnectArgs {
        &self.args
    }

    // ---------------------------------------------------------------------
    // Query entry points
    // ---------------------------------------------------------------------

    /// Run `query` with this session's arguments and append to `dst`.
    pub fn query<D>(&self, query: &str, dst: &mut D) -> Result<(), QueryError>
    where
        D: Destination + ?Sized,
    {
        execute_query(&self.connector, query, dst, &self.args)
    }

    /// Run `query` against `namespace` on the configured server.
    pub fn query_namespace<D>(
        &self,
        query: &str,
        dst: &mut D,
        namespace: &str,
    ) -> Result<(), QueryError>
    where
        D: Destination + ?Sized,
    {
        let args = self.args.clone().namespace(namespace);

        execute_query(&self.connector, query, dst, &args)
    }

    /// Run `query` and append one [`Row`] per record holding `columns`.
    pub fn query_rows<S>(
        &self,
        query: &str,
        columns: &[S],
        dst: &mut Vec<Row>,
    ) -> Result<(), QueryError>
    where
        S: AsRef<str>,
    {
        execute_rows(&self.connector, query, columns, dst, &self.args)
    }
}

///
/// MismatchLog
///
/// Keep-last aggregation of field mismatches across a result set.
///

#[derive(Debug, Default)]
struct MismatchLog {
    last: Option<FieldMismatch>,
    count: usize,
}

impl MismatchLog {
    fn absorb(&mut self, report: BindReport) {
        self.count += report.mismatches().len();
        if let Some(last) = report.into_last() {
            self.last = Some(last);
        }
    }

    fn finish(self) -> Result<(), QueryError> {
        self.last.map_or(Ok(()), |mismatch| Err(mismatch.into()))
    }
}

/// Run `query` on a session opened with `args` and append every bound
/// record to `dst`, in source order.
///
/// - `dst` is validated before the source is contacted.
/// - Field mismatches never stop iteration; the last one is returned once
///   every record has been appended.
/// - Any other error returns immediately. Records already appended stay
///   in `dst`.
pub fn execute_query<C, D>(
    connector: &C,
    query: &str,
    dst: &mut D,
    args: &ConnectArgs,
) -> Result<(), QueryError>
where
    C: Connector + ?Sized,
    D: Destination + ?Sized,
{
    let shape = classify::<D>()?;

    let _guard = SessionGuard::acquire();
    let session = connector.connect(args)?;
    let results = session.execute(query)?;
    let count = results.count()?;

    debug!(
        record = shape.model.name,
        category = ?shape.category,
        count,
        "binding result set"
    );

    let mut log = MismatchLog::default();
    for position in 0..count {
        let mut record = <<D::Element as Element>::Record as Default>::default();
        let report = {
            let item = results.item(position)?;
            bind_record(&item, &mut record)?
        };

        log.absorb(report);
        dst.append(<D::Element as Element>::from_record(record));
    }

    debug!(count, mismatches = log.count, "result set bound");

    log.finish()
}

/// [`execute_query`] against `namespace` on the local machine.
pub fn execute_query_namespace<C, D>(
    connector: &C,
    query: &str,
    dst: &mut D,
    namespace: &str,
) -> Result<(), QueryError>
where
    C: Connector + ?Sized,
    D: Destination + ?Sized,
{
    execute_query(connector, query, dst, &ConnectArgs::new().namespace(namespace))
}

/// Run `query` and append one [`Row`] per record with every column in
/// `columns`. An absent column is a `no such source property` mismatch and
/// is aggregated exactly as [`execute_query`] does.
pub fn execute_rows<C, S>(
    connector: &C,
    query: &str,
    columns: &[S],
    dst: &mut Vec<Row>,
    args: &ConnectArgs,
) -> Result<(), QueryError>
where
    C: Connector + ?Sized,
    S: AsRef<str>,
{
    let record_name = SelectStatement::parse(query).map_or_else(|_| "row".to_string(), |s| s.class);

    let _guard = SessionGuard::acquire();
    let session = connector.connect(args)?;
    let results = session.execute(query)?;
    let count = results.count()?;

    debug!(record = %record_name, count, "reading rows");

    let mut log = MismatchLog::default();
    for position in 0..count {
        let item = results.item(position)?;
        let mut row = Row::new();
        let mut report = Vec::new();

        for column in columns {
            let column = column.as_ref();
            match item.property(column) {
                Ok(value) => {
                    row.insert(column.to_string(), value);
                }
                Err(PropertyError::Missing { .. }) => report.push(FieldMismatch::new(
                    record_name.as_str(),
                    column,
                    MismatchReason::NoSuchProperty,
                )),
                Err(PropertyError::Session(err)) => return Err(err.into()),
            }
        }
        drop(item);

        log.count += report.len();
        if let Some(last) = report.pop() {
            log.last = Some(last);
        }
        dst.push(row);
    }

    debug!(count, mismatches = log.count, "rows read");

    log.finish()
}
