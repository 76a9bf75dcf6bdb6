use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::StudentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub stu_id: StudentId,
    pub stu_name: String,
    pub year: u32,
    pub subject: String,
}
