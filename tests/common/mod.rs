//! Job listing export fixtures shared by the integration tests
#![allow(dead_code)]

use joblist_export::types::OUTPUT_COLUMNS;

pub const PREAMBLE: &str = "Job List Report\nFrom 01/03/2024 To 31/03/2024\n";

/// Header columns of a realistic export: 70 columns, the 13 kept ones spread
/// among columns that are dropped.
pub fn header() -> Vec<String> {
    let mut columns = Vec::new();
    for (idx, name) in OUTPUT_COLUMNS.iter().enumerate() {
        columns.push(name.to_string());
        if idx > 0 {
            columns.push(format!("Unused {}", idx));
        }
    }
    while columns.len() < 70 {
        columns.push(format!("Trailing {}", columns.len()));
    }
    columns
}

/// Quote a cell the way a CSV writer would
pub fn quote(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Build one CSV line for `header`, filling the named cells and leaving the
/// rest empty
pub fn row_line(header: &[String], cells: &[(&str, &str)]) -> String {
    let mut values = vec![String::new(); header.len()];
    for (name, value) in cells {
        let idx = header
            .iter()
            .position(|h| h == name)
            .unwrap_or_else(|| panic!("fixture column {} not in header", name));
        values[idx] = value.to_string();
    }
    values.iter().map(|v| quote(v)).collect::<Vec<_>>().join(",")
}

/// Cells of a genuine job row
pub fn job<'a>(job_number: &'a str, key_tag: &'a str, due: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("Job Number", job_number),
        ("Key Tag", key_tag),
        ("Due On Site Date/Time", due),
        ("Customer Name", "Smith, J"),
        ("Vehicle Registration", "AB12 CDE"),
    ]
}

/// Assemble a full export: preamble, header line, then the given data lines
pub fn export(header: &[String], lines: &[String]) -> String {
    let mut out = String::from(PREAMBLE);
    out.push_str(&header.iter().map(|h| quote(h)).collect::<Vec<_>>().join(","));
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Export built from job cell lists with the default header
pub fn export_jobs(jobs: &[Vec<(&str, &str)>]) -> String {
    let header = header();
    let lines: Vec<String> = jobs.iter().map(|cells| row_line(&header, cells)).collect();
    export(&header, &lines)
}

/// The three-row sample used across suites: two jobs out of order and a
/// summary line
pub fn sample_export() -> String {
    let header = header();
    let lines = vec![
        row_line(&header, &job("B200", "K2", "2024-03-02 10:00")),
        row_line(&header, &job("A100", "K1", "2024-03-05 08:30")),
        row_line(&header, &[("Job Number", "Total"), ("Key Tag", "2")]),
    ];
    export(&header, &lines)
}
