use std::path::PathBuf;
use std::sync::Arc;

use crate::modules::allocations::adapters::outbound::allocation_repository::AllocationRepository;
use crate::modules::allocations::adapters::outbound::allocations_in_memory::InMemoryAllocations;
use crate::modules::allocations::use_cases::allocate_seats::handler::AllocateSeatsHandler;
use crate::modules::allocations::use_cases::check_capacity::handler::CheckCapacityHandler;
use crate::modules::allocations::use_cases::list_allocations::queries::AllocationQueries;
use crate::modules::allocations::use_cases::seat_lookup::handler::SeatLookupHandler;
use crate::modules::classrooms::adapters::outbound::classroom_repository::ClassroomRepository;
use crate::modules::classrooms::adapters::outbound::classrooms_in_memory::InMemoryClassrooms;
use crate::modules::classrooms::use_cases::create_classroom::handler::CreateClassroomHandler;
use crate::modules::exams::adapters::outbound::exam_repository::{
    ExamRepository, RegistrationRepository,
};
use crate::modules::exams::adapters::outbound::exams_in_memory::InMemoryExams;
use crate::modules::exams::use_cases::create_exam::handler::CreateExamHandler;
use crate::modules::exams::use_cases::register_year::handler::RegisterYearHandler;
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::adapters::outbound::students_in_memory::InMemoryStudents;
use crate::modules::students::use_cases::import_students::handler::ImportStudentsHandler;

/// Repository adapters the handlers are wired onto.
pub struct Repositories {
    pub students: Arc<dyn StudentRepository>,
    pub classrooms: Arc<dyn ClassroomRepository>,
    pub exams: Arc<dyn ExamRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub allocations: Arc<dyn AllocationRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        let exams = Arc::new(InMemoryExams::new());
        Self {
            students: Arc::new(InMemoryStudents::new()),
            classrooms: Arc::new(InMemoryClassrooms::new()),
            exams: exams.clone(),
            registrations: exams,
            allocations: Arc::new(InMemoryAllocations::new()),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
    pub classrooms: Arc<dyn ClassroomRepository>,
    pub exams: Arc<dyn ExamRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub allocations: Arc<dyn AllocationRepository>,
    pub allocation_queries: Arc<AllocationQueries>,
    pub import_students_handler: Arc<ImportStudentsHandler>,
    pub create_classroom_handler: Arc<CreateClassroomHandler>,
    pub create_exam_handler: Arc<CreateExamHandler>,
    pub register_year_handler: Arc<RegisterYearHandler>,
    pub allocate_seats_handler: Arc<AllocateSeatsHandler>,
    pub check_capacity_handler: Arc<CheckCapacityHandler>,
    pub seat_lookup_handler: Arc<SeatLookupHandler>,
}

impl AppState {
    pub fn new(repositories: Repositories, roster_path: impl Into<PathBuf>) -> Self {
        let Repositories {
            students,
            classrooms,
            exams,
            registrations,
            allocations,
        } = repositories;

        Self {
            allocation_queries: Arc::new(AllocationQueries::new(
                allocations.clone(),
                students.clone(),
            )),
            import_students_handler: Arc::new(ImportStudentsHandler::new(
                roster_path,
                students.clone(),
            )),
            create_classroom_handler: Arc::new(CreateClassroomHandler::new(classrooms.clone())),
            create_exam_handler: Arc::new(CreateExamHandler::new(exams.clone())),
            register_year_handler: Arc::new(RegisterYearHandler::new(
                exams.clone(),
                registrations.clone(),
                students.clone(),
            )),
            allocate_seats_handler: Arc::new(AllocateSeatsHandler::new(
                exams.clone(),
                registrations.clone(),
                classrooms.clone(),
                allocations.clone(),
            )),
            check_capacity_handler: Arc::new(CheckCapacityHandler::new(
                exams.clone(),
                registrations.clone(),
                classrooms.clone(),
                students.clone(),
            )),
            seat_lookup_handler: Arc::new(SeatLookupHandler::new(
                exams.clone(),
                students.clone(),
                allocations.clone(),
            )),
            students,
            classrooms,
            exams,
            registrations,
            allocations,
        }
    }

    pub fn in_memory(roster_path: impl Into<PathBuf>) -> Self {
        Self::new(Repositories::in_memory(), roster_path)
    }
}
