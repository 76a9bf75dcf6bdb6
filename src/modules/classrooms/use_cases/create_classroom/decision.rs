use crate::modules::classrooms::core::classroom::Classroom;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Classroom {0} already exists")]
    AlreadyExists(String),

    #[error("room_id must not be empty")]
    EmptyRoomId,

    #[error("seats_per_bench must be at least 1")]
    InvalidSeatsPerBench,

    #[error("layout must contain at least one bench")]
    EmptyLayout,

    #[error("bench '{bench_id}' is invalid: {reason}")]
    InvalidBench { bench_id: String, reason: String },
}

pub enum Decision {
    Accepted { classroom: Classroom },
    Rejected { reason: DecideError },
}
