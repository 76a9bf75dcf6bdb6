use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::classrooms::core::classroom::Classroom;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct BenchNode {
    pub bench_id: String,
    pub seat_count: u32,
}

#[derive(SimpleObject)]
pub struct ClassroomNode {
    pub room_id: String,
    pub seats_per_bench: u32,
    pub capacity: i64,
    pub benches: Vec<BenchNode>,
}

impl From<Classroom> for ClassroomNode {
    fn from(classroom: Classroom) -> Self {
        Self {
            capacity: classroom.capacity() as i64,
            benches: classroom
                .benches()
                .into_iter()
                .map(|b| BenchNode {
                    bench_id: b.bench_id,
                    seat_count: b.seat_count,
                })
                .collect(),
            room_id: classroom.room_id,
            seats_per_bench: classroom.seats_per_bench,
        }
    }
}

#[derive(Default)]
pub struct ClassroomsQuery;

#[Object]
impl ClassroomsQuery {
    async fn classrooms(&self, context: &Context<'_>) -> GqlResult<Vec<ClassroomNode>> {
        let state = context.data_unchecked::<AppState>();
        let rooms = state
            .classrooms
            .list()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(rooms.into_iter().map(ClassroomNode::from).collect())
    }

    async fn classroom(
        &self,
        context: &Context<'_>,
        room_id: String,
    ) -> GqlResult<Option<ClassroomNode>> {
        let state = context.data_unchecked::<AppState>();
        let room = state
            .classrooms
            .get(&room_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(room.map(ClassroomNode::from))
    }
}
