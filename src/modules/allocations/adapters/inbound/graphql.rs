use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::allocations::use_cases::list_allocations::queries::AllocationRow;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct SeatNode {
    pub exam_id: i64,
    pub stu_id: i64,
    pub stu_name: String,
    pub room_id: String,
    pub bench_id: String,
    pub seat_no: u32,
}

impl From<AllocationRow> for SeatNode {
    fn from(row: AllocationRow) -> Self {
        Self {
            exam_id: row.exam_id,
            stu_id: row.stu_id,
            stu_name: row.stu_name,
            room_id: row.room_id,
            bench_id: row.bench_id,
            seat_no: row.seat_no,
        }
    }
}

#[derive(SimpleObject)]
pub struct CapacityNode {
    pub total_registered: i64,
    pub total_capacity: i64,
    pub shortage: i64,
    pub surplus: i64,
    pub fits: bool,
    pub additional_benches_needed: i64,
}

#[derive(Default)]
pub struct AllocationsQuery;

#[Object]
impl AllocationsQuery {
    async fn allocations(
        &self,
        context: &Context<'_>,
        exam_id: i64,
        room_id: Option<String>,
    ) -> GqlResult<Vec<SeatNode>> {
        let state = context.data_unchecked::<AppState>();
        let rows = state
            .allocation_queries
            .by_exam(exam_id, room_id.as_deref())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(rows.into_iter().map(SeatNode::from).collect())
    }

    async fn seat_lookup(
        &self,
        context: &Context<'_>,
        exam_id: i64,
        stu_id: i64,
    ) -> GqlResult<SeatNode> {
        let state = context.data_unchecked::<AppState>();
        let found = state
            .seat_lookup_handler
            .handle(exam_id, stu_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(SeatNode {
            exam_id: found.exam_id,
            stu_id: found.stu_id,
            stu_name: found.stu_name,
            room_id: found.room_id,
            bench_id: found.bench_id,
            seat_no: found.seat_no,
        })
    }

    async fn capacity_check(
        &self,
        context: &Context<'_>,
        exam_id: i64,
        rooms: Vec<String>,
    ) -> GqlResult<CapacityNode> {
        let state = context.data_unchecked::<AppState>();
        let report = state
            .check_capacity_handler
            .handle(Some(exam_id), &rooms)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(CapacityNode {
            total_registered: report.total_registered as i64,
            total_capacity: report.total_capacity as i64,
            shortage: report.shortage as i64,
            surplus: report.surplus as i64,
            fits: report.fits,
            additional_benches_needed: report.additional_benches_needed as i64,
        })
    }
}
