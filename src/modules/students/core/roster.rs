// Roster parsing.
//
// The roster is a CSV export of the student spreadsheet with a header row.
// Required columns: stu_id, stu_name, year, subject. Extra columns are ignored.

use std::collections::BTreeSet;
use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::modules::students::core::student::Student;
use crate::shared::core::primitives::StudentId;

pub const REQUIRED_COLUMNS: [&str; 4] = ["stu_id", "stu_name", "year", "subject"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster read failed: {0}")]
    Read(String),

    #[error("missing columns: {0}")]
    MissingColumns(String),

    #[error("invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
}

#[derive(Debug, Deserialize)]
struct RosterRecord {
    stu_id: StudentId,
    stu_name: String,
    year: u32,
    subject: String,
}

pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<Student>, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header_record = reader
        .headers()
        .map_err(|e| RosterError::Read(e.to_string()))?
        .clone();
    let headers: BTreeSet<&str> = header_record.iter().collect();
    let missing: BTreeSet<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.contains(column))
        .collect();
    if !missing.is_empty() {
        return Err(RosterError::MissingColumns(
            missing.into_iter().collect::<Vec<_>>().join(", "),
        ));
    }

    let mut students = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| RosterError::InvalidRow {
            line: e.position().map(|p| p.line()).unwrap_or_default(),
            reason: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: RosterRecord =
            record
                .deserialize(Some(&header_record))
                .map_err(|e| RosterError::InvalidRow {
                    line,
                    reason: e.to_string(),
                })?;
        if row.stu_id <= 0 {
            return Err(RosterError::InvalidRow {
                line,
                reason: "stu_id must be positive".into(),
            });
        }
        if row.stu_name.is_empty() {
            return Err(RosterError::InvalidRow {
                line,
                reason: "stu_name is empty".into(),
            });
        }
        students.push(Student {
            stu_id: row.stu_id,
            stu_name: row.stu_name,
            year: row.year,
            subject: row.subject,
        });
    }
    Ok(students)
}
