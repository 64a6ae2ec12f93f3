use std::io::Write;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use film_reports_db::{QueryExecutor, ReportDef, build_query, run_report};
use film_reports_model::Arg;

use crate::CliError;
use crate::cli_types::{Invocation, OutputFormat};
use crate::output;

use super::{open_existing, resolve_db};

/// Printed when a report yields the absent-result sentinel.
pub(crate) const NO_RESULT: &str = "no result (arguments rejected or report not implemented)";

/// Run one report and print its rows.
///
/// Rejected arguments and unimplemented reports are not errors: the
/// sentinel message is printed and the process exits successfully.
pub(crate) fn run_report_command(
    db: Option<PathBuf>,
    format: OutputFormat,
    invocation: Invocation<'_>,
) -> Result<(), CliError> {
    if invocation.opts.show_sql {
        show_sql(invocation.report, &invocation.args);
    }

    let resolved = resolve_db(db);
    let Some(conn) = open_existing(&resolved)? else {
        return Ok(());
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&conn, invocation.report, &invocation.args, format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run `report` on `executor` and render the rows to `out`.
///
/// Returns `false` for the absent-result sentinel, in which case nothing is
/// written to `out`.
pub(crate) fn write_report<E, W>(
    executor: &E,
    report: &ReportDef,
    args: &[Arg],
    format: OutputFormat,
    out: &mut W,
) -> Result<bool, CliError>
where
    E: QueryExecutor + ?Sized,
    W: Write,
{
    let result = run_report(executor, report, args)
        .map_err(|e| CliError::database(format!("{} failed: {}", report.name, e)))?;

    let Some(table) = result else {
        log::warn!("{}: {}", report.name, NO_RESULT);
        return Ok(false);
    };
    log::debug!("{}: {} row(s)", report.name, table.len());
    output::render(&table, format, out)?;
    Ok(true)
}

fn show_sql(report: &ReportDef, args: &[Arg]) {
    let Some(query) = build_query(report, args) else {
        return;
    };
    log::info!("{}", "SQL:".if_supports_color(Stdout, |t| t.bold()));
    for line in query.sql().lines() {
        log::info!("  {}", line.trim());
    }
    let params: Vec<String> = query.params().iter().map(|v| format!("{:?}", v)).collect();
    log::info!(
        "{} [{}]",
        "Params:".if_supports_color(Stdout, |t| t.bold()),
        params.join(", "),
    );
    crate::log_blank();
}

#[cfg(test)]
mod tests {
    use super::*;

    use film_reports_db::{CLIENT_FROM_CITY, FILM_CAST, NUMBER_FILM_BY_LENGTH, open_memory};
    use rusqlite::Connection;

    const SAMPLE: &str = include_str!("../../../data/sample.yaml");

    fn seeded() -> Connection {
        let conn = open_memory().unwrap();
        let dataset = film_reports_model::parse_dataset(SAMPLE, "sample.yaml").unwrap();
        film_reports_db::seed_dataset(&conn, &dataset).unwrap();
        conn
    }

    fn run(conn: &Connection, report: &ReportDef, args: &[Arg]) -> (bool, String) {
        let mut buf = Vec::new();
        let found = write_report(conn, report, args, OutputFormat::Csv, &mut buf).unwrap();
        (found, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_rows_are_rendered() {
        let conn = seeded();
        let (found, text) = run(&conn, &CLIENT_FROM_CITY, &[Arg::from("Athenai")]);
        assert!(found);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "city,first_name,last_name");
        assert_eq!(lines.len(), 4);
        assert!(lines[1..].iter().all(|l| l.starts_with("Athenai,")));
    }

    #[test]
    fn test_sentinel_writes_nothing() {
        let conn = seeded();
        let (found, text) = run(&conn, &NUMBER_FILM_BY_LENGTH, &[Arg::Int(60), Arg::Int(10)]);
        assert!(!found);
        assert!(text.is_empty());

        let (found, text) = run(&conn, &FILM_CAST, &[Arg::from("Amadeus Holy")]);
        assert!(!found);
        assert!(text.is_empty());
    }

    #[test]
    fn test_database_errors_are_reported() {
        // Schema-less database: the query itself fails
        let conn = Connection::open_in_memory().unwrap();
        let mut buf = Vec::new();
        let err = write_report(
            &conn,
            &CLIENT_FROM_CITY,
            &[Arg::from("Athenai")],
            OutputFormat::Table,
            &mut buf,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Database(_)));
        assert!(buf.is_empty());
    }
}
