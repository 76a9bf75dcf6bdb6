use chrono::NaiveDate;

use crate::modules::exams::core::exam::{Exam, NewExam, Registration};
use crate::shared::core::primitives::{ExamId, StudentId};
use crate::shell::state::AppState;

fn exam_day() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 11, 20)
}

pub struct NewExamBuilder {
    inner: NewExam,
}

impl NewExamBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewExam {
                exam_name: "Data Structures".to_string(),
                exam_date: exam_day(),
                session: Some("FN".to_string()),
            },
        }
    }

    pub fn exam_name(mut self, v: impl Into<String>) -> Self {
        self.inner.exam_name = v.into();
        self
    }

    pub fn build(self) -> NewExam {
        self.inner
    }
}

/// A stored exam as the catalogue would return it.
pub fn exam(id: ExamId) -> Exam {
    let new_exam = NewExamBuilder::new().build();
    Exam {
        id,
        exam_name: new_exam.exam_name,
        exam_date: new_exam.exam_date,
        session: new_exam.session,
    }
}

pub fn registration(exam_id: ExamId, stu_id: StudentId, subject: &str) -> Registration {
    Registration {
        exam_id,
        stu_id,
        year: 2,
        subject_code: subject.to_string(),
    }
}

pub async fn seed_exam(state: &AppState, exam: NewExam) -> Exam {
    state.exams.create(exam).await.expect("seed exam failed")
}
