use super::*;
use crate::types::{MISSING_SENTINEL, OUTPUT_COLUMN_COUNT};
use std::io::Write;
use tempfile::TempDir;

/// Minimal export: 2 preamble lines, the 13 kept columns padded to 69, two jobs
fn sample_export() -> String {
    let mut header: Vec<String> = OUTPUT_COLUMNS.iter().map(|c| c.to_string()).collect();
    for i in header.len()..69 {
        header.push(format!("Extra {}", i));
    }

    let row = |job: &str, tag: &str| -> String {
        let mut cells = vec![String::new(); header.len()];
        cells[0] = job.to_string();
        cells[2] = "2024-03-01 09:00".to_string();
        cells[5] = tag.to_string();
        cells.join(",")
    };

    format!(
        "Job List Report\nFrom 01/03/2024 To 31/03/2024\n{}\n{}\n{}\nTotal,,,,,\n",
        header.join(","),
        row("B200", "K2"),
        row("A100", "K1"),
    )
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn sample_row(job: &str, tag: &str) -> JobRow {
    let mut values: [String; OUTPUT_COLUMN_COUNT] =
        std::array::from_fn(|_| MISSING_SENTINEL.to_string());
    values[0] = job.to_string();
    values[5] = tag.to_string();
    JobRow::new(values)
}

// =========================================================================
// format_preview_table Tests
// =========================================================================

#[test]
fn test_format_preview_table_header_only() {
    let text = format_preview_table(&[]);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Job Number | Location | Due On Site Date/Time"));
    assert!(lines[0].ends_with("Last Customer Contact Date/Time"));
    assert!(lines[1].chars().all(|c| c == '-' || c == '+'));
}

#[test]
fn test_format_preview_table_aligns_columns() {
    let rows = vec![
        sample_row("A100", "K1"),
        sample_row("A1000000000000", "K2"),
    ];
    let text = format_preview_table(&rows);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    // First column widens to the longest value
    assert!(lines[0].starts_with("Job Number     | Location"));
    assert!(lines[2].starts_with("A100           | N/A"));
    assert!(lines[3].starts_with("A1000000000000 | N/A"));
}

#[test]
fn test_format_preview_table_has_no_trailing_spaces() {
    let text = format_preview_table(&[sample_row("A100", "K1")]);
    for line in text.lines() {
        assert_eq!(line, line.trim_end());
    }
}

// =========================================================================
// process / preview Tests
// =========================================================================

#[test]
fn test_process_writes_workbook() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "job_list.csv", &sample_export());
    let output = dir.path().join("out.xlsx");

    process(input, output.clone(), 5, false).unwrap();

    let bytes = fs::read(&output).unwrap();
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_process_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.xlsx");

    let err = process(dir.path().join("nope.csv"), output.clone(), 5, true).unwrap_err();

    assert!(matches!(err, crate::error::JoblistError::Io(_)));
    assert!(!output.exists());
}

#[test]
fn test_process_malformed_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "short.csv", "title\ndates\nJob Number,Key Tag\nA1,K1\n");
    let output = dir.path().join("out.xlsx");

    let err = process(input, output.clone(), 5, false).unwrap_err();

    assert!(err.is_malformed_input());
    assert!(!output.exists());
}

#[test]
fn test_preview_succeeds_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "job_list.csv", &sample_export());

    preview(input, 1).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
