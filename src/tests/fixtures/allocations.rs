use uuid::Uuid;

use crate::modules::allocations::core::seat::SeatAssignment;
use crate::shared::core::primitives::{ExamId, StudentId};

pub fn seat(
    exam_id: ExamId,
    stu_id: StudentId,
    room_id: &str,
    bench_id: &str,
    seat_no: u32,
) -> SeatAssignment {
    SeatAssignment {
        exam_id,
        stu_id,
        room_id: room_id.to_string(),
        bench_id: bench_id.to_string(),
        seat_no,
        run_id: Uuid::nil(),
    }
}
