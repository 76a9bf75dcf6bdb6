use crate::modules::exams::core::exam::NewExam;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("exam_name must not be empty")]
    EmptyName,

    #[error("exam_date '{0}' is not a YYYY-MM-DD date")]
    InvalidDate(String),

    #[error("Exam {0} already exists for this date and session")]
    AlreadyExists(String),
}

pub enum Decision {
    Accepted { exam: NewExam },
    Rejected { reason: DecideError },
}
