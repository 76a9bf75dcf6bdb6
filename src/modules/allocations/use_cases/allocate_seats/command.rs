use crate::shared::core::primitives::{ExamId, RoomId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationTarget {
    /// Fill one room, leaving the exam's seats in other rooms untouched.
    Room(RoomId),
    /// Spread the whole exam over the rooms, in the given order.
    Rooms(Vec<RoomId>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocateSeats {
    pub exam_id: ExamId,
    pub target: AllocationTarget,
}
