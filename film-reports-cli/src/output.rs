//! Rendering report results as a table, JSON, or CSV.

use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use film_reports_model::{ResultTable, Value};

use crate::CliError;
use crate::cli_types::OutputFormat;

pub(crate) fn render<W: Write>(
    table: &ResultTable,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(table, out)?,
        OutputFormat::Json => write_json(table, out)?,
        OutputFormat::Csv => write_csv(table, out)?,
    }
    Ok(())
}

fn write_table<W: Write>(table: &ResultTable, out: &mut W) -> Result<(), CliError> {
    let cells: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.values().iter().map(Value::to_string).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns().iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    // Numeric columns are right-aligned, judged by the first non-null cell
    let numeric: Vec<bool> = (0..widths.len())
        .map(|i| {
            table
                .rows()
                .map(|row| &row.values()[i])
                .find(|v| !v.is_null())
                .is_some_and(|v| v.as_f64().is_some())
        })
        .collect();

    let header: Vec<String> = table
        .columns()
        .iter()
        .zip(&widths)
        .map(|(name, &width)| pad(name, width, false))
        .collect();
    writeln!(
        out,
        "{}",
        header
            .join("  ")
            .trim_end()
            .if_supports_color(Stdout, |t| t.bold())
    )?;

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .zip(&numeric)
            .map(|((cell, &width), &right)| pad(cell, width, right))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }

    let noun = if cells.len() == 1 { "row" } else { "rows" };
    writeln!(
        out,
        "{}",
        format!("({} {})", cells.len(), noun).if_supports_color(Stdout, |t| t.dimmed())
    )?;
    Ok(())
}

fn pad(text: &str, width: usize, right: bool) -> String {
    if right {
        format!("{:>width$}", text)
    } else {
        format!("{:<width$}", text)
    }
}

fn write_json<W: Write>(table: &ResultTable, out: &mut W) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, table)
        .map_err(|e| CliError::output(format!("Failed to write JSON: {}", e)))?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(table: &ResultTable, out: &mut W) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(table.columns())
        .map_err(|e| CliError::output(format!("Failed to write CSV header: {}", e)))?;
    for row in table.rows() {
        writer
            .write_record(row.values().iter().map(Value::to_string))
            .map_err(|e| CliError::output(format!("Failed to write CSV row: {}", e)))?;
    }
    writer.flush()?;
    Ok(())
}
