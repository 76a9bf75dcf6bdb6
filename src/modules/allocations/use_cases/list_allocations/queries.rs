use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::modules::allocations::adapters::outbound::allocation_repository::AllocationRepository;
use crate::modules::allocations::core::seat::SeatAssignment;
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::student::Student;
use crate::shared::core::primitives::{ExamId, RoomId, StudentId};

/// A seat joined with the roster entry of whoever sits on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationRow {
    pub exam_id: ExamId,
    pub stu_id: StudentId,
    pub stu_name: String,
    pub year: Option<u32>,
    pub subject: Option<String>,
    pub room_id: RoomId,
    pub bench_id: String,
    pub seat_no: u32,
}

pub struct AllocationQueries {
    allocations: Arc<dyn AllocationRepository>,
    students: Arc<dyn StudentRepository>,
}

impl AllocationQueries {
    pub fn new(
        allocations: Arc<dyn AllocationRepository>,
        students: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            allocations,
            students,
        }
    }

    pub async fn by_exam(
        &self,
        exam_id: ExamId,
        room_id: Option<&str>,
    ) -> anyhow::Result<Vec<AllocationRow>> {
        let seats = self.allocations.list_by_exam(exam_id, room_id).await?;
        self.join(seats).await
    }

    pub async fn by_room(
        &self,
        room_id: &str,
        exam_id: Option<ExamId>,
    ) -> anyhow::Result<Vec<AllocationRow>> {
        let seats = self.allocations.list_by_room(room_id, exam_id).await?;
        self.join(seats).await
    }

    async fn join(&self, seats: Vec<SeatAssignment>) -> anyhow::Result<Vec<AllocationRow>> {
        if seats.is_empty() {
            return Ok(Vec::new());
        }
        let roster: HashMap<StudentId, Student> = self
            .students
            .list()
            .await?
            .into_iter()
            .map(|s| (s.stu_id, s))
            .collect();

        Ok(seats
            .into_iter()
            .map(|seat| {
                let student = roster.get(&seat.stu_id);
                AllocationRow {
                    exam_id: seat.exam_id,
                    stu_id: seat.stu_id,
                    stu_name: student.map(|s| s.stu_name.clone()).unwrap_or_default(),
                    year: student.map(|s| s.year),
                    subject: student.map(|s| s.subject.clone()),
                    room_id: seat.room_id,
                    bench_id: seat.bench_id,
                    seat_no: seat.seat_no,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod allocation_queries_tests {
    use super::*;
    use crate::modules::allocations::adapters::outbound::allocation_repository::AllocationScope;
    use crate::modules::allocations::adapters::outbound::allocations_in_memory::InMemoryAllocations;
    use crate::modules::students::adapters::outbound::students_in_memory::InMemoryStudents;
    use crate::tests::fixtures::allocations::seat;
    use crate::tests::fixtures::students::StudentBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_join_names_and_keep_unknown_students() {
        let allocations = Arc::new(InMemoryAllocations::new());
        allocations
            .replace(
                1,
                AllocationScope::Exam,
                vec![seat(1, 5, "A", "1", 1), seat(1, 99, "A", "1", 2)],
            )
            .await
            .unwrap();
        let students = Arc::new(InMemoryStudents::new());
        students
            .insert_many(vec![StudentBuilder::new().stu_id(5).stu_name("Chen Li").build()])
            .await
            .unwrap();
        let queries = AllocationQueries::new(allocations, students);

        let rows = queries.by_exam(1, None).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].stu_name, "Chen Li");
        assert_eq!(rows[0].subject.as_deref(), Some("CS301"));
        assert_eq!(rows[1].stu_name, "");
        assert_eq!(rows[1].year, None);

        assert!(queries.by_room("A", Some(2)).await.unwrap().is_empty());
    }
}
