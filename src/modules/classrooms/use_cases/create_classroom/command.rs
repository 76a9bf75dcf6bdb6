use crate::modules::classrooms::core::classroom::Layout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClassroom {
    pub room_id: String,
    pub seats_per_bench: u32,
    pub layout: Layout,
}
