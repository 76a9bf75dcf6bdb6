use crate::modules::exams::core::exam::Registration;
use crate::shared::core::primitives::ExamId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Exam {0} not found")]
    ExamNotFound(ExamId),

    #[error("year must be at least 1")]
    InvalidYear,

    #[error("No students found for year {0}")]
    NoStudentsInYear(u32),
}

pub enum Decision {
    Accepted {
        registrations: Vec<Registration>,
        already_registered: usize,
    },
    Rejected {
        reason: DecideError,
    },
}
