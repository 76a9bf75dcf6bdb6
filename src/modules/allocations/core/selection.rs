use std::collections::HashSet;

use thiserror::Error;

use crate::modules::classrooms::core::classroom::Classroom;
use crate::shared::core::primitives::{ExamId, RoomId};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("exam_id is required")]
    MissingExamId,

    #[error("Select at least one room")]
    NoRooms,

    #[error("Room id must not be blank")]
    BlankRoomId,

    #[error("Room {0} selected more than once")]
    DuplicateRoom(RoomId),

    #[error("Exam {0} not found")]
    ExamNotFound(ExamId),

    #[error("Classroom {0} not found")]
    RoomNotFound(RoomId),
}

impl SelectionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ExamNotFound(_) | Self::RoomNotFound(_))
    }
}

pub fn check_exam_id(exam_id: ExamId) -> Result<ExamId, SelectionError> {
    if exam_id <= 0 {
        return Err(SelectionError::MissingExamId);
    }
    Ok(exam_id)
}

/// Trimmed room ids in request order.
pub fn check_room_ids(room_ids: &[String]) -> Result<Vec<RoomId>, SelectionError> {
    if room_ids.is_empty() {
        return Err(SelectionError::NoRooms);
    }
    let mut seen = HashSet::new();
    let mut checked = Vec::with_capacity(room_ids.len());
    for room_id in room_ids {
        let room_id = room_id.trim();
        if room_id.is_empty() {
            return Err(SelectionError::BlankRoomId);
        }
        if !seen.insert(room_id) {
            return Err(SelectionError::DuplicateRoom(room_id.to_string()));
        }
        checked.push(room_id.to_string());
    }
    Ok(checked)
}

/// Fails on the first requested room that was not found.
pub fn resolve_rooms(
    lookups: Vec<(RoomId, Option<Classroom>)>,
) -> Result<Vec<Classroom>, SelectionError> {
    lookups
        .into_iter()
        .map(|(room_id, found)| found.ok_or(SelectionError::RoomNotFound(room_id)))
        .collect()
}
