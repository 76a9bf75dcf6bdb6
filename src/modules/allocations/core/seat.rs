use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::classrooms::core::classroom::{Classroom, bench_order};
use crate::shared::core::primitives::{ExamId, RoomId, StudentId};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatSlot {
    pub room_id: RoomId,
    pub bench_id: String,
    pub seat_no: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub exam_id: ExamId,
    pub stu_id: StudentId,
    pub room_id: RoomId,
    pub bench_id: String,
    pub seat_no: u32,
    pub run_id: Uuid,
}

impl SeatAssignment {
    pub fn slot(&self) -> SeatSlot {
        SeatSlot {
            room_id: self.room_id.clone(),
            bench_id: self.bench_id.clone(),
            seat_no: self.seat_no,
        }
    }
}

/// Room, then natural bench order, then seat number.
pub fn position_order(a: &SeatAssignment, b: &SeatAssignment) -> Ordering {
    a.room_id
        .cmp(&b.room_id)
        .then_with(|| bench_order(&a.bench_id, &b.bench_id))
        .then_with(|| a.seat_no.cmp(&b.seat_no))
}

/// Every usable seat of the room, bench by bench.
pub fn seat_slots(classroom: &Classroom) -> Vec<SeatSlot> {
    classroom
        .benches()
        .into_iter()
        .flat_map(|bench| {
            (1..=bench.seat_count).map(move |seat_no| SeatSlot {
                room_id: classroom.room_id.clone(),
                bench_id: bench.bench_id.clone(),
                seat_no,
            })
        })
        .collect()
}
