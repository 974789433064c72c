use crate::error::JoblistResult;
use crate::extract::TableExtractor;
use crate::pipeline::process_upload;
use crate::types::{ExtractReport, JobRow, OUTPUT_COLUMNS};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Execute the process command
pub fn process(
    input: PathBuf,
    output: PathBuf,
    preview_rows: usize,
    verbose: bool,
) -> JoblistResult<()> {
    println!("{}", "🔧 Job Listing - Process".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        println!("{}", "📖 Reading job listing...".cyan());
    }
    let raw = read_input(&input)?;

    if verbose {
        println!("   {} bytes read\n", raw.len());
        println!("{}", "🧹 Filtering, sorting and rendering...".cyan());
    }
    let processed = process_upload(&raw)?;

    print_report(&processed.report);
    print_preview(processed.preview(preview_rows), processed.table.len());

    processed.workbook.save(&output)?;

    println!("{}", "✅ Export Complete!".bold().green());
    println!(
        "   Excel file: {} ({} jobs)\n",
        output.display(),
        processed.table.len()
    );

    Ok(())
}

/// Execute the preview command
pub fn preview(input: PathBuf, rows: usize) -> JoblistResult<()> {
    println!("{}", "🔍 Job Listing - Preview".bold().green());
    println!("   Input: {}\n", input.display());

    let raw = read_input(&input)?;
    let extraction = TableExtractor::default().extract_with_report(&raw)?;

    print_report(&extraction.report);
    print_preview(extraction.table.head(rows), extraction.table.len());

    Ok(())
}

fn read_input(path: &Path) -> JoblistResult<Vec<u8>> {
    Ok(fs::read(path)?)
}

fn print_report(report: &ExtractReport) {
    println!("{}", "📋 Rows:".bold().cyan());
    println!("   Read:    {}", report.rows_read);
    println!("   Kept:    {}", report.rows_kept.to_string().bold().green());
    if report.rows_dropped() > 0 {
        println!(
            "   Dropped: {} (no job number {}, not a job row {}, no key tag {})",
            report.rows_dropped().to_string().yellow(),
            report.dropped_missing_job_number,
            report.dropped_not_job_row,
            report.dropped_missing_key_tag
        );
    }
    println!();
}

fn print_preview(rows: &[JobRow], total: usize) {
    if total == 0 {
        println!(
            "{}",
            "⚠️  No job rows left after filtering - the sheet will only have a header".yellow()
        );
        println!();
        return;
    }

    println!(
        "{}",
        format!("📊 Processed Data (first {} of {}):", rows.len(), total)
            .bold()
            .cyan()
    );
    for line in format_preview_table(rows).lines() {
        println!("   {}", line);
    }
    println!();
}

/// Render rows as a plain aligned text table, header first
pub fn format_preview_table(rows: &[JobRow]) -> String {
    let mut widths: Vec<usize> = OUTPUT_COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (idx, value) in row.values().iter().enumerate() {
            widths[idx] = widths[idx].max(value.chars().count());
        }
    }

    let format_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(OUTPUT_COLUMNS.to_vec())];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        lines.push(format_line(row.values().iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
