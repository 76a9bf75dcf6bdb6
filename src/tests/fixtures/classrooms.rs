use crate::modules::classrooms::core::classroom::{Classroom, Layout};
use crate::shell::state::AppState;

/// Defaults to room B201 with two benches of two seats. Calling `bench` replaces the default layout.
pub struct ClassroomBuilder {
    inner: Classroom,
    custom_layout: bool,
}

impl ClassroomBuilder {
    pub fn new() -> Self {
        Self {
            inner: Classroom {
                room_id: "B201".to_string(),
                seats_per_bench: 2,
                layout: Layout::from([("1".to_string(), 2), ("2".to_string(), 2)]),
            },
            custom_layout: false,
        }
    }

    pub fn room_id(mut self, v: impl Into<String>) -> Self {
        self.inner.room_id = v.into();
        self
    }

    pub fn seats_per_bench(mut self, v: u32) -> Self {
        self.inner.seats_per_bench = v;
        self
    }

    pub fn bench(mut self, bench_id: &str, seats: u32) -> Self {
        if !self.custom_layout {
            self.inner.layout.clear();
            self.custom_layout = true;
        }
        self.inner.layout.insert(bench_id.to_string(), seats);
        self
    }

    pub fn build(self) -> Classroom {
        self.inner
    }
}

pub async fn seed_classrooms(state: &AppState, classrooms: Vec<Classroom>) {
    for classroom in classrooms {
        state
            .classrooms
            .insert(classroom)
            .await
            .expect("seed classroom failed");
    }
}
