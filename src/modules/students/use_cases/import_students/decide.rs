use std::collections::HashSet;

use crate::modules::students::core::student::Student;
use crate::modules::students::use_cases::import_students::decision::ImportDecision;
use crate::shared::core::primitives::StudentId;

/// Keeps the first occurrence of every `stu_id` that is not already stored.
pub fn decide_import(existing: &HashSet<StudentId>, roster: Vec<Student>) -> ImportDecision {
    let mut seen: HashSet<StudentId> = existing.clone();
    let mut accepted = Vec::with_capacity(roster.len());
    let mut skipped_duplicates = 0;
    for student in roster {
        if seen.insert(student.stu_id) {
            accepted.push(student);
        } else {
            skipped_duplicates += 1;
        }
    }
    ImportDecision {
        accepted,
        skipped_duplicates,
    }
}
