#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const PLANS_HEADER: &str = "client, plan, biweekly, split";
pub const ROSTER_HEADER: &str = "worker, client, cycles, management";

/// Writes `header` followed by `rows` to a fresh temporary CSV file.
pub fn csv_file(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{header}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn plans(rows: &[&str]) -> NamedTempFile {
    csv_file(PLANS_HEADER, rows)
}

pub fn roster(rows: &[&str]) -> NamedTempFile {
    csv_file(ROSTER_HEADER, rows)
}

pub fn toml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    file
}
