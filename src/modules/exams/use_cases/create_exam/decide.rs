use chrono::NaiveDate;

use crate::modules::exams::core::exam::{Exam, NewExam};
use crate::modules::exams::use_cases::create_exam::{
    command::CreateExam,
    decision::{DecideError, Decision},
};
use crate::shared::core::primitives::non_blank;

pub fn decide_create(existing: &[Exam], command: CreateExam) -> Decision {
    let exam_name = command.exam_name.trim().to_string();
    if exam_name.is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyName,
        };
    }

    let exam_date = match non_blank(command.exam_date) {
        None => None,
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                return Decision::Rejected {
                    reason: DecideError::InvalidDate(raw),
                };
            }
        },
    };

    let exam = NewExam {
        exam_name,
        exam_date,
        session: non_blank(command.session),
    };
    if existing.iter().any(|e| e.occupies_same_slot(&exam)) {
        return Decision::Rejected {
            reason: DecideError::AlreadyExists(exam.exam_name),
        };
    }
    Decision::Accepted { exam }
}
