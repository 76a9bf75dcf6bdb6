use crate::modules::students::core::student::Student;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecision {
    pub accepted: Vec<Student>,
    pub skipped_duplicates: usize,
}
