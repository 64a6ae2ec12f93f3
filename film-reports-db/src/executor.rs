//! The tabular query-execution capability and its SQLite implementation.
//!
//! Reports never talk to a database directly. They hand a bound [`Query`] to
//! whatever [`QueryExecutor`] the caller injected and return its table
//! unchanged. Errors raised by the executor propagate to the report's caller
//! as-is.

use film_reports_model::{ResultTable, Value};
use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection};

/// A fixed SQL statement plus the values bound to its positional
/// placeholders (`?1`, `?2`, ...).
///
/// Queries are only built by the dispatcher from validated arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    report: &'static str,
    sql: &'static str,
    params: Vec<Value>,
}

impl Query {
    pub(crate) fn new(report: &'static str, sql: &'static str, params: Vec<Value>) -> Self {
        Self {
            report,
            sql,
            params,
        }
    }

    /// Name of the report this query was built for.
    pub fn report(&self) -> &'static str {
        self.report
    }

    pub fn sql(&self) -> &'static str {
        self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// Runs a query and returns an ordered table of rows.
pub trait QueryExecutor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&self, query: &Query) -> Result<ResultTable, Self::Error>;
}

impl QueryExecutor for Connection {
    type Error = rusqlite::Error;

    fn execute(&self, query: &Query) -> Result<ResultTable, rusqlite::Error> {
        let mut stmt = self.prepare(query.sql())?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let bound: Vec<rusqlite::types::Value> = query.params().iter().map(to_sql_value).collect();
        let mut table = ResultTable::new(columns);
        let mut rows = stmt.query(params_from_iter(bound.iter()))?;
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(width);
            for i in 0..width {
                values.push(from_value_ref(row.get_ref(i)?));
            }
            table.push_row(values);
        }
        Ok(table)
    }
}

fn to_sql_value(value: &Value) -> rusqlite::types::Value {
    use rusqlite::types::Value as Sql;
    match value {
        Value::Null => Sql::Null,
        Value::Integer(i) => Sql::Integer(*i),
        Value::Real(f) => Sql::Real(*f),
        Value::Text(s) => Sql::Text(s.clone()),
        Value::Blob(b) => Sql::Blob(b.clone()),
    }
}

fn from_value_ref(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_round_trip_through_sqlite() {
        let conn = Connection::open_in_memory().unwrap();
        let query = Query::new(
            "probe",
            "SELECT ?1 AS i, ?2 AS r, ?3 AS t, ?4 AS n, ?5 AS b",
            vec![
                Value::Integer(7),
                Value::Real(2.5),
                Value::from("Athenai"),
                Value::Null,
                Value::Blob(vec![0xde, 0xad]),
            ],
        );

        let table = QueryExecutor::execute(&conn, &query).unwrap();
        assert_eq!(table.columns(), ["i", "r", "t", "n", "b"]);
        let row = table.row(0).unwrap();
        assert_eq!(row.get("i"), Some(&Value::Integer(7)));
        assert_eq!(row.get("r"), Some(&Value::Real(2.5)));
        assert_eq!(row.get("t"), Some(&Value::from("Athenai")));
        assert_eq!(row.get("n"), Some(&Value::Null));
        assert_eq!(row.get("b"), Some(&Value::Blob(vec![0xde, 0xad])));
    }

    #[test]
    fn test_errors_pass_through_unchanged() {
        let conn = Connection::open_in_memory().unwrap();
        let query = Query::new("probe", "SELECT * FROM no_such_table", vec![]);
        let err = QueryExecutor::execute(&conn, &query).unwrap_err();
        assert!(matches!(err, rusqlite::Error::SqliteFailure(_, _)));
    }

    #[test]
    fn test_empty_result_keeps_columns() {
        let conn = Connection::open_in_memory().unwrap();
        let query = Query::new("probe", "SELECT 1 AS one WHERE 0", vec![]);
        let table = QueryExecutor::execute(&conn, &query).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns(), ["one"]);
    }
}
