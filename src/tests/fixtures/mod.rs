// Shared test fixtures, compiled into the crate only under cfg(test).

pub mod allocations;
pub mod classrooms;
pub mod exams;
pub mod roster;
pub mod students;
