use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{ExamId, StudentId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: ExamId,
    pub exam_name: String,
    pub exam_date: Option<NaiveDate>,
    pub session: Option<String>,
}

/// An exam that has passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExam {
    pub exam_name: String,
    pub exam_date: Option<NaiveDate>,
    pub session: Option<String>,
}

impl Exam {
    pub fn occupies_same_slot(&self, other: &NewExam) -> bool {
        self.exam_name.eq_ignore_ascii_case(&other.exam_name)
            && self.exam_date == other.exam_date
            && self.session == other.session
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub exam_id: ExamId,
    pub stu_id: StudentId,
    pub year: u32,
    pub subject_code: String,
}
