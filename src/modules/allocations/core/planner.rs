// Allocation engine.
//
// Seating order: registrants grouped by subject, groups visited largest first, one student
// per group per round. Consecutive students (bench-mates) therefore differ in subject
// whenever the mix allows.
//
// Balancing: below total capacity, each room gets a share of the registrants proportional
// to its capacity (largest remainder rounding). At or above it, every room is filled and the
// rest wait.

use std::collections::{BTreeMap, VecDeque};

use crate::modules::allocations::core::seat::{SeatSlot, seat_slots};
use crate::modules::classrooms::core::classroom::Classroom;
use crate::shared::core::primitives::{RoomId, StudentId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub stu_id: StudentId,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub stu_id: StudentId,
    pub slot: SeatSlot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTally {
    pub room_id: RoomId,
    pub capacity: usize,
    pub allocated: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllocationPlan {
    pub placements: Vec<Placement>,
    pub waiting: Vec<StudentId>,
    pub rooms: Vec<RoomTally>,
}

pub fn seating_order(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let total = candidates.len();
    let mut by_subject: BTreeMap<String, Vec<Candidate>> = BTreeMap::new();
    for candidate in candidates {
        by_subject
            .entry(candidate.subject.clone())
            .or_default()
            .push(candidate);
    }

    let mut groups: Vec<(String, VecDeque<Candidate>)> = by_subject
        .into_iter()
        .map(|(subject, mut members)| {
            members.sort_by_key(|c| c.stu_id);
            (subject, members.into())
        })
        .collect();
    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0)));

    let mut ordered = Vec::with_capacity(total);
    while ordered.len() < total {
        for (_, members) in groups.iter_mut() {
            if let Some(candidate) = members.pop_front() {
                ordered.push(candidate);
            }
        }
    }
    ordered
}

/// Seats each room should receive for `demand` students. Never exceeds a room's capacity.
pub fn room_quotas(capacities: &[usize], demand: usize) -> Vec<usize> {
    let total: usize = capacities.iter().sum();
    if demand >= total {
        return capacities.to_vec();
    }

    let mut quotas: Vec<usize> = capacities.iter().map(|c| demand * c / total).collect();
    let assigned: usize = quotas.iter().sum();
    let remainder = |i: usize| demand * capacities[i] % total;

    let mut by_remainder: Vec<usize> = (0..capacities.len()).collect();
    by_remainder.sort_by(|&a, &b| remainder(b).cmp(&remainder(a)).then(a.cmp(&b)));
    for &i in by_remainder.iter().take(demand - assigned) {
        quotas[i] += 1;
    }
    quotas
}

pub fn plan(candidates: Vec<Candidate>, rooms: &[Classroom]) -> AllocationPlan {
    let ordered = seating_order(candidates);
    let capacities: Vec<usize> = rooms.iter().map(Classroom::capacity).collect();
    let quotas = room_quotas(&capacities, ordered.len());

    let mut queue = ordered.into_iter();
    let mut placements = Vec::new();
    let mut tallies = Vec::with_capacity(rooms.len());
    for ((room, capacity), quota) in rooms.iter().zip(capacities).zip(quotas) {
        let before = placements.len();
        for (slot, candidate) in seat_slots(room).into_iter().zip(queue.by_ref().take(quota)) {
            placements.push(Placement {
                stu_id: candidate.stu_id,
                slot,
            });
        }
        tallies.push(RoomTally {
            room_id: room.room_id.clone(),
            capacity,
            allocated: placements.len() - before,
        });
    }

    AllocationPlan {
        placements,
        waiting: queue.map(|c| c.stu_id).collect(),
        rooms: tallies,
    }
}

#[cfg(test)]
mod planner_tests {
    use super::*;
    use crate::tests::fixtures::classrooms::ClassroomBuilder;
    use rstest::rstest;
    use std::collections::{HashMap, HashSet};

    fn candidates(pairs: &[(StudentId, &str)]) -> Vec<Candidate> {
        pairs.iter()
            .map(|(stu_id, subject)| Candidate {
                stu_id: *stu_id,
                subject: subject.to_string(),
            })
            .collect()
    }

    fn room(room_id: &str, benches: u32) -> Classroom {
        (1..=benches)
            .fold(ClassroomBuilder::new().room_id(room_id).seats_per_bench(2), |b, n| {
                b.bench(&n.to_string(), 2)
            })
            .build()
    }

    #[rstest]
    fn it_should_interleave_subjects_largest_group_first() {
        let ordered = seating_order(candidates(&[
            (1, "EE210"),
            (2, "CS301"),
            (3, "CS301"),
            (4, "ME110"),
            (5, "CS301"),
            (6, "EE210"),
        ]));
        let ids: Vec<_> = ordered.iter().map(|c| c.stu_id).collect();
        assert_eq!(ids, vec![2, 1, 4, 3, 6, 5]);
    }

    #[rstest]
    #[case(&[10, 20, 30], 30, vec![5, 10, 15])]
    #[case(&[3, 3, 3], 4, vec![2, 1, 1])]
    #[case(&[4, 6], 15, vec![4, 6])]
    #[case(&[5, 5], 0, vec![0, 0])]
    #[case(&[7, 2, 1], 9, vec![6, 2, 1])]
    fn it_should_balance_quotas_by_capacity(
        #[case] capacities: &[usize],
        #[case] demand: usize,
        #[case] expected: Vec<usize>,
    ) {
        let quotas = room_quotas(capacities, demand);
        assert_eq!(quotas, expected);
        assert!(quotas.iter().zip(capacities).all(|(q, c)| q <= c));
        assert_eq!(quotas.iter().sum::<usize>(), demand.min(capacities.iter().sum()));
    }

    #[rstest]
    fn it_should_seat_everyone_once_and_each_seat_once() {
        let pool: Vec<_> = (1..=9)
            .map(|i| (i, if i % 2 == 0 { "CS301" } else { "EE210" }))
            .collect();
        let result = plan(candidates(&pool), &[room("A", 3), room("B", 2)]);

        assert!(result.waiting.is_empty());
        assert_eq!(result.placements.len(), 9);
        let students: HashSet<_> = result.placements.iter().map(|p| p.stu_id).collect();
        let seats: HashSet<_> = result.placements.iter().map(|p| p.slot.clone()).collect();
        assert_eq!(students.len(), 9);
        assert_eq!(seats.len(), 9);
        assert_eq!(
            result.rooms.iter().map(|r| r.allocated).collect::<Vec<_>>(),
            vec![5, 4]
        );
    }

    #[rstest]
    fn it_should_put_students_of_different_subjects_on_the_same_bench() {
        let pool: Vec<_> = (1..=6)
            .map(|i| (i, ["CS301", "EE210", "ME110"][(i % 3) as usize]))
            .collect();
        let subjects: HashMap<_, _> = pool.iter().cloned().collect();
        let result = plan(candidates(&pool), &[room("A", 3)]);

        let mut benches: HashMap<String, Vec<&str>> = HashMap::new();
        for placement in &result.placements {
            benches
                .entry(placement.slot.bench_id.clone())
                .or_default()
                .push(subjects[&placement.stu_id]);
        }
        assert_eq!(benches.len(), 3);
        assert!(benches.values().all(|mates| mates[0] != mates[1]));
    }

    #[rstest]
    fn it_should_leave_overflow_waiting() {
        let pool: Vec<_> = (1..=7).map(|i| (i, "CS301")).collect();
        let result = plan(candidates(&pool), &[room("A", 2)]);
        assert_eq!(result.placements.len(), 4);
        assert_eq!(result.waiting, vec![5, 6, 7]);
        assert_eq!(result.rooms[0].capacity, 4);
    }
}
