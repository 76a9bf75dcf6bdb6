use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::RoomId;

/// Bench id to the number of seats physically on that bench.
pub type Layout = BTreeMap<String, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub room_id: RoomId,
    pub seats_per_bench: u32,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bench {
    pub bench_id: String,
    /// Seats usable for an exam: `min(seats_per_bench, seats on the bench)`.
    pub seat_count: u32,
}

/// Natural bench order: numeric ids by value first, then the rest lexically.
pub fn bench_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

impl Classroom {
    pub fn benches(&self) -> Vec<Bench> {
        let mut benches: Vec<Bench> = self
            .layout
            .iter()
            .map(|(bench_id, seats)| Bench {
                bench_id: bench_id.clone(),
                seat_count: (*seats).min(self.seats_per_bench),
            })
            .collect();
        benches.sort_by(|a, b| bench_order(&a.bench_id, &b.bench_id));
        benches
    }

    pub fn capacity(&self) -> usize {
        self.layout
            .values()
            .map(|seats| (*seats).min(self.seats_per_bench) as usize)
            .sum()
    }
}

#[cfg(test)]
mod classroom_tests {
    use super::*;
    use crate::tests::fixtures::classrooms::ClassroomBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_cap_each_bench_at_seats_per_bench() {
        let room = ClassroomBuilder::new()
            .seats_per_bench(2)
            .bench("1", 4)
            .bench("2", 1)
            .bench("3", 3)
            .build();
        assert_eq!(room.capacity(), 2 + 1 + 2);
    }

    #[rstest]
    fn it_should_order_benches_naturally() {
        let room = ClassroomBuilder::new()
            .bench("10", 2)
            .bench("2", 2)
            .bench("B", 2)
            .bench("A", 2)
            .bench("1", 2)
            .build();
        let ids: Vec<_> = room.benches().into_iter().map(|b| b.bench_id).collect();
        assert_eq!(ids, vec!["1", "2", "10", "A", "B"]);
    }

    #[rstest]
    #[case("01", "1", Ordering::Less)]
    #[case("9", "10", Ordering::Less)]
    #[case("C1-R2", "C1-R10", Ordering::Greater)]
    fn it_should_compare_bench_ids(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(bench_order(a, b), expected);
    }
}
