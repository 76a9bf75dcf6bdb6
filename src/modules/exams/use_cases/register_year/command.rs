use crate::shared::core::primitives::ExamId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterYear {
    pub exam_id: ExamId,
    pub year: u32,
}
