use crate::modules::classrooms::core::classroom::{Classroom, Layout};
use crate::modules::classrooms::use_cases::create_classroom::{
    command::CreateClassroom,
    decision::{DecideError, Decision},
};

pub fn decide_create(existing: Option<&Classroom>, command: CreateClassroom) -> Decision {
    let room_id = command.room_id.trim().to_string();
    if room_id.is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyRoomId,
        };
    }
    if existing.is_some() {
        return Decision::Rejected {
            reason: DecideError::AlreadyExists(room_id),
        };
    }
    if command.seats_per_bench == 0 {
        return Decision::Rejected {
            reason: DecideError::InvalidSeatsPerBench,
        };
    }
    if command.layout.is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyLayout,
        };
    }

    let mut layout = Layout::new();
    for (bench_id, seats) in command.layout {
        let trimmed = bench_id.trim().to_string();
        if trimmed.is_empty() {
            return Decision::Rejected {
                reason: DecideError::InvalidBench {
                    bench_id,
                    reason: "bench id is empty".into(),
                },
            };
        }
        if seats == 0 {
            return Decision::Rejected {
                reason: DecideError::InvalidBench {
                    bench_id: trimmed,
                    reason: "bench has no seats".into(),
                },
            };
        }
        if layout.insert(trimmed.clone(), seats).is_some() {
            return Decision::Rejected {
                reason: DecideError::InvalidBench {
                    bench_id: trimmed,
                    reason: "bench id appears twice".into(),
                },
            };
        }
    }

    Decision::Accepted {
        classroom: Classroom {
            room_id,
            seats_per_bench: command.seats_per_bench,
            layout,
        },
    }
}
