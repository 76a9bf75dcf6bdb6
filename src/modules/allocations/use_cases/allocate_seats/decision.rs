use thiserror::Error;

use crate::modules::allocations::adapters::outbound::allocation_repository::AllocationScope;
use crate::modules::allocations::core::planner::AllocationPlan;
use crate::modules::allocations::core::selection::SelectionError;
use crate::shared::core::primitives::ExamId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("No students registered for exam {0}")]
    NoRegistrations(ExamId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        scope: AllocationScope,
        plan: AllocationPlan,
        /// Registrants considered by this run.
        considered: usize,
    },
    Rejected {
        reason: DecideError,
    },
}
