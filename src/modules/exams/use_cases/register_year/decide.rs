use std::collections::HashSet;

use crate::modules::exams::core::exam::{Exam, Registration};
use crate::modules::exams::use_cases::register_year::{
    command::RegisterYear,
    decision::{DecideError, Decision},
};
use crate::modules::students::core::student::Student;
use crate::shared::core::primitives::StudentId;

pub fn decide_register_year(
    exam: Option<&Exam>,
    cohort: &[Student],
    registered: &HashSet<StudentId>,
    command: RegisterYear,
) -> Decision {
    let Some(exam) = exam else {
        return Decision::Rejected {
            reason: DecideError::ExamNotFound(command.exam_id),
        };
    };
    if command.year == 0 {
        return Decision::Rejected {
            reason: DecideError::InvalidYear,
        };
    }

    let in_year: Vec<&Student> = cohort.iter().filter(|s| s.year == command.year).collect();
    if in_year.is_empty() {
        return Decision::Rejected {
            reason: DecideError::NoStudentsInYear(command.year),
        };
    }

    let (already, fresh): (Vec<&Student>, Vec<&Student>) = in_year
        .into_iter()
        .partition(|s| registered.contains(&s.stu_id));
    Decision::Accepted {
        registrations: fresh
            .into_iter()
            .map(|s| Registration {
                exam_id: exam.id,
                stu_id: s.stu_id,
                year: s.year,
                subject_code: s.subject.clone(),
            })
            .collect(),
        already_registered: already.len(),
    }
}
