use std::collections::HashSet;

use crate::modules::allocations::adapters::outbound::allocation_repository::AllocationScope;
use crate::modules::allocations::core::planner::{Candidate, plan};
use crate::modules::allocations::core::seat::SeatAssignment;
use crate::modules::allocations::core::selection::{SelectionError, resolve_rooms};
use crate::modules::allocations::use_cases::allocate_seats::command::AllocationTarget;
use crate::modules::allocations::use_cases::allocate_seats::decision::{DecideError, Decision};
use crate::modules::classrooms::core::classroom::Classroom;
use crate::modules::exams::core::exam::{Exam, Registration};
use crate::shared::core::primitives::{ExamId, RoomId};

/// Everything a run needs, loaded by the handler.
pub struct AllocationInputs<'a> {
    pub exam_id: ExamId,
    pub exam: Option<&'a Exam>,
    pub rooms: Vec<(RoomId, Option<Classroom>)>,
    pub registrations: &'a [Registration],
    /// Seats currently held for the exam.
    pub current: &'a [SeatAssignment],
}

pub fn decide_allocation(target: &AllocationTarget, inputs: AllocationInputs<'_>) -> Decision {
    match plan_allocation(target, inputs) {
        Ok(decision) => decision,
        Err(reason) => Decision::Rejected { reason },
    }
}

fn plan_allocation(
    target: &AllocationTarget,
    inputs: AllocationInputs<'_>,
) -> Result<Decision, DecideError> {
    if inputs.exam.is_none() {
        return Err(SelectionError::ExamNotFound(inputs.exam_id).into());
    }
    let rooms = resolve_rooms(inputs.rooms)?;
    if inputs.registrations.is_empty() {
        return Err(DecideError::NoRegistrations(inputs.exam_id));
    }

    let (scope, seated_elsewhere): (AllocationScope, HashSet<_>) = match target {
        AllocationTarget::Room(room_id) => (
            AllocationScope::Room(room_id.clone()),
            inputs
                .current
                .iter()
                .filter(|s| &s.room_id != room_id)
                .map(|s| s.stu_id)
                .collect(),
        ),
        AllocationTarget::Rooms(_) => (AllocationScope::Exam, HashSet::new()),
    };

    let candidates: Vec<Candidate> = inputs
        .registrations
        .iter()
        .filter(|r| !seated_elsewhere.contains(&r.stu_id))
        .map(|r| Candidate {
            stu_id: r.stu_id,
            subject: r.subject_code.clone(),
        })
        .collect();
    let considered = candidates.len();

    Ok(Decision::Accepted {
        scope,
        plan: plan(candidates, &rooms),
        considered,
    })
}

#[cfg(test)]
mod decide_allocation_tests {
    use super::*;
    use crate::tests::fixtures::allocations::seat;
    use crate::tests::fixtures::classrooms::ClassroomBuilder;
    use crate::tests::fixtures::exams::{exam, registration};
    use rstest::{fixture, rstest};

    #[fixture]
    fn registrations() -> Vec<Registration> {
        (1..=4).map(|stu_id| registration(1, stu_id, "CS301")).collect()
    }

    fn room(room_id: &str) -> (RoomId, Option<Classroom>) {
        (
            room_id.to_string(),
            Some(
                ClassroomBuilder::new()
                    .room_id(room_id)
                    .seats_per_bench(2)
                    .bench("1", 2)
                    .bench("2", 2)
                    .build(),
            ),
        )
    }

    #[rstest]
    fn it_should_skip_students_seated_in_other_rooms(registrations: Vec<Registration>) {
        let exam = exam(1);
        let current = vec![seat(1, 1, "B", "1", 1), seat(1, 2, "A", "1", 1)];
        let decision = decide_allocation(
            &AllocationTarget::Room("A".into()),
            AllocationInputs {
                exam_id: 1,
                exam: Some(&exam),
                rooms: vec![room("A")],
                registrations: &registrations,
                current: &current,
            },
        );

        let Decision::Accepted {
            scope,
            plan,
            considered,
        } = decision
        else {
            panic!("expected Accepted, got {decision:?}");
        };
        assert_eq!(scope, AllocationScope::Room("A".into()));
        assert_eq!(considered, 3);
        let seated: Vec<_> = plan.placements.iter().map(|p| p.stu_id).collect();
        assert_eq!(seated, vec![2, 3, 4]);
    }

    #[rstest]
    fn it_should_replan_the_whole_exam_for_many_rooms(registrations: Vec<Registration>) {
        let exam = exam(1);
        let current = vec![seat(1, 1, "B", "1", 1)];
        let decision = decide_allocation(
            &AllocationTarget::Rooms(vec!["A".into(), "B".into()]),
            AllocationInputs {
                exam_id: 1,
                exam: Some(&exam),
                rooms: vec![room("A"), room("B")],
                registrations: &registrations,
                current: &current,
            },
        );

        let Decision::Accepted { scope, plan, .. } = decision else {
            panic!("expected Accepted, got {decision:?}");
        };
        assert_eq!(scope, AllocationScope::Exam);
        assert_eq!(plan.placements.len(), 4);
        assert_eq!(
            plan.rooms.iter().map(|r| r.allocated).collect::<Vec<_>>(),
            vec![2, 2]
        );
    }

    #[rstest]
    fn it_should_reject_an_unknown_room(registrations: Vec<Registration>) {
        let exam = exam(1);
        let decision = decide_allocation(
            &AllocationTarget::Room("Z".into()),
            AllocationInputs {
                exam_id: 1,
                exam: Some(&exam),
                rooms: vec![("Z".into(), None)],
                registrations: &registrations,
                current: &[],
            },
        );
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: SelectionError::RoomNotFound("Z".into()).into()
            }
        );
    }

    #[rstest]
    fn it_should_reject_an_exam_without_registrations() {
        let exam = exam(1);
        let decision = decide_allocation(
            &AllocationTarget::Room("A".into()),
            AllocationInputs {
                exam_id: 1,
                exam: Some(&exam),
                rooms: vec![room("A")],
                registrations: &[],
                current: &[],
            },
        );
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: DecideError::NoRegistrations(1)
            }
        );
    }

    #[rstest]
    fn it_should_reject_an_unknown_exam(registrations: Vec<Registration>) {
        let decision = decide_allocation(
            &AllocationTarget::Room("A".into()),
            AllocationInputs {
                exam_id: 9,
                exam: None,
                rooms: vec![room("A")],
                registrations: &registrations,
                current: &[],
            },
        );
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: SelectionError::ExamNotFound(9).into()
            }
        );
    }
}
