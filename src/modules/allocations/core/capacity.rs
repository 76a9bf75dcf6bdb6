use serde::Serialize;

use crate::modules::classrooms::core::classroom::Classroom;
use crate::shared::core::primitives::{ExamId, RoomId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomCapacity {
    pub room_id: RoomId,
    pub benches: usize,
    pub seats_per_bench: u32,
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityReport {
    pub exam_id: Option<ExamId>,
    pub total_registered: usize,
    pub total_capacity: usize,
    pub shortage: usize,
    pub surplus: usize,
    pub fits: bool,
    /// Benches of the widest selected room that would cover the shortage.
    pub additional_benches_needed: usize,
    pub rooms: Vec<RoomCapacity>,
}

pub fn assess(exam_id: Option<ExamId>, demand: usize, rooms: &[Classroom]) -> CapacityReport {
    let rooms: Vec<RoomCapacity> = rooms
        .iter()
        .map(|room| RoomCapacity {
            room_id: room.room_id.clone(),
            benches: room.layout.len(),
            seats_per_bench: room.seats_per_bench,
            capacity: room.capacity(),
        })
        .collect();
    let total_capacity: usize = rooms.iter().map(|r| r.capacity).sum();
    let shortage = demand.saturating_sub(total_capacity);
    let widest = rooms
        .iter()
        .map(|r| r.seats_per_bench as usize)
        .max()
        .unwrap_or(1)
        .max(1);

    CapacityReport {
        exam_id,
        total_registered: demand,
        total_capacity,
        shortage,
        surplus: total_capacity.saturating_sub(demand),
        fits: shortage == 0,
        additional_benches_needed: shortage.div_ceil(widest),
        rooms,
    }
}
