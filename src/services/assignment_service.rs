//! Secret santa assignment
//!
//! Shuffles a copy of the roster and lets everyone give to the next person
//! in the shuffled circle. For two or more participants nobody can draw
//! themselves. Mutual pairs (A -> B, B -> A) are allowed, and only rotations
//! of a single random ordering are ever produced, so this samples n of the
//! possible derangements rather than all of them.

use crate::models::{AssignmentMap, Participant};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Builds giver -> receiver assignments
#[derive(Debug, Default, Clone, Copy)]
pub struct AssignmentService;

impl AssignmentService {
    pub fn new() -> Self {
        Self
    }

    /// Shuffle with `rng`, then pair each participant with the next one in the circle
    ///
    /// The input slice is left untouched.
    pub fn assign<R: Rng + ?Sized>(&self, participants: &[Participant], rng: &mut R) -> AssignmentMap {
        let mut shuffled = participants.to_vec();
        shuffled.shuffle(rng);
        self.assign_in_order(&shuffled)
    }

    /// Pair `participants[i]` with `participants[(i + 1) % n]` without shuffling
    pub fn assign_in_order(&self, participants: &[Participant]) -> AssignmentMap {
        let n = participants.len();
        if n == 1 {
            warn!("⚠️ only one participant, they will be assigned to themselves");
        }

        let mut map = AssignmentMap::new();
        for (i, giver) in participants.iter().enumerate() {
            let receiver = &participants[(i + 1) % n];
            debug!("{} -> {}", giver.email(), receiver.email());
            map.push(giver.clone(), receiver.clone());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn roster(n: usize) -> Vec<Participant> {
        (0..n)
            .map(|i| Participant::new(format!("Person {i}"), format!("p{i}@acme.com")))
            .collect()
    }

    #[test]
    fn no_self_assignment_and_receivers_form_a_permutation() {
        let service = AssignmentService::new();
        for n in 2..=12 {
            let people = roster(n);
            for seed in 0..25 {
                let mut rng = StdRng::seed_from_u64(seed);
                let map = service.assign(&people, &mut rng);

                assert_eq!(map.len(), n);
                assert!(map.iter().all(|a| !a.is_self_assigned()));

                let givers: HashSet<_> = map.iter().map(|a| a.giver.email()).collect();
                let receivers: HashSet<_> = map.iter().map(|a| a.receiver.email()).collect();
                assert_eq!(givers.len(), n);
                assert_eq!(receivers.len(), n);
                assert_eq!(givers, receivers);
            }
        }
    }

    #[test]
    fn single_participant_draws_themselves() {
        let people = roster(1);
        let map = AssignmentService::new().assign(&people, &mut StdRng::seed_from_u64(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("p0@acme.com"), Some(&people[0]));
    }

    #[test]
    fn empty_roster_gives_empty_map() {
        let map = AssignmentService::new().assign(&[], &mut StdRng::seed_from_u64(1));
        assert!(map.is_empty());
    }

    #[test]
    fn same_seed_same_assignment() {
        let people = roster(8);
        let service = AssignmentService::new();
        let a = service.assign(&people, &mut StdRng::seed_from_u64(2024));
        let b = service.assign(&people, &mut StdRng::seed_from_u64(2024));
        assert_eq!(a, b);
    }

    #[test]
    fn input_is_not_reordered() {
        let people = roster(6);
        let before = people.clone();
        AssignmentService::new().assign(&people, &mut StdRng::seed_from_u64(9));
        assert_eq!(people, before);
    }

    #[test]
    fn in_order_pairs_with_next_and_wraps() {
        let people = roster(3);
        let map = AssignmentService::new().assign_in_order(&people);
        assert_eq!(map.get("p0@acme.com"), Some(&people[1]));
        assert_eq!(map.get("p1@acme.com"), Some(&people[2]));
        assert_eq!(map.get("p2@acme.com"), Some(&people[0]));
    }

    #[test]
    fn assignment_is_a_single_cycle() {
        let people = roster(7);
        let map = AssignmentService::new().assign(&people, &mut StdRng::seed_from_u64(5));

        let mut current = people[0].email().to_string();
        let mut visited = HashSet::new();
        while visited.insert(current.clone()) {
            current = map.get(&current).unwrap().email().to_string();
        }
        assert_eq!(visited.len(), people.len());
    }
}
