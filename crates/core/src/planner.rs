// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Benchmark groups planning.
//!
//! The planner splits a dealt hand into runs of close values and sums their
//! scores into the benchmark the player has to stay under. It is a greedy
//! single pass over the sorted hand, not an optimal partition:
//!
//! 1. The hand is sorted by value and the second to last card is set aside
//!    as the placeholder, so that the last card never ends up alone.
//! 2. A group starts with the next two cards and grows while the distance of
//!    the candidate card from the group first card is not larger than the
//!    distance from the candidate to the card after it. When the candidate is
//!    the last card it becomes a group by itself.
//! 3. When a group closes, a new one starts at the candidate card. A remainder
//!    of three or fewer cards cannot start a group, see [PlanPolicy].
//! 4. The placeholder joins the tail group.
use log::debug;
use serde::{Deserialize, Serialize};

use memory_cards::Card;

use crate::{scoring, sort::sort_by_value};

/// Cards needed to start a new group.
const MIN_GROUP_START: usize = 4;

/// How the planner handles a remainder too short to start a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanPolicy {
    /// The remainder becomes a group, every card is in a group.
    #[default]
    Covering,
    /// The remainder is dropped from the benchmark and listed in
    /// [GoalPlan::dropped], matching the classic scoring of the game.
    Reference,
}

/// The benchmark groups for a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalPlan {
    groups: Vec<Vec<Card>>,
    dropped: Vec<Card>,
    benchmark: u32,
}

impl GoalPlan {
    /// The groups in ascending value order.
    pub fn groups(&self) -> &[Vec<Card>] {
        &self.groups
    }

    /// Cards left out of every group.
    pub fn dropped(&self) -> &[Card] {
        &self.dropped
    }

    /// The number of cards in groups.
    pub fn covered(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// The benchmark score.
    pub fn benchmark(&self) -> u32 {
        self.benchmark
    }
}

/// Computes benchmark groups for a hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalPlanner {
    policy: PlanPolicy,
}

impl GoalPlanner {
    /// Creates a planner with the given policy.
    pub fn new(policy: PlanPolicy) -> Self {
        Self { policy }
    }

    /// The planner policy.
    pub fn policy(&self) -> PlanPolicy {
        self.policy
    }

    /// Plans the benchmark groups for a hand.
    pub fn plan(&self, hand: &[Card]) -> GoalPlan {
        let mut sorted = sort_by_value(hand.iter().copied());

        let mut plan = GoalPlan::default();
        if sorted.len() < 2 {
            // No placeholder for tiny hands.
            self.remainder(&mut plan, &sorted);
        } else {
            let placeholder = sorted.remove(sorted.len() - 2);
            self.partition(&mut plan, &sorted);

            match plan.groups.last_mut() {
                Some(tail) => tail.push(placeholder),
                None => plan.dropped.push(placeholder),
            }
        }

        plan.benchmark = plan.groups.iter().map(|g| scoring::score(g)).sum();

        debug!(
            "Planned {} groups covering {} cards, {} dropped, benchmark {}",
            plan.groups.len(),
            plan.covered(),
            plan.dropped.len(),
            plan.benchmark
        );

        plan
    }

    /// Splits sorted cards into groups.
    fn partition(&self, plan: &mut GoalPlan, cards: &[Card]) {
        let mut rest = cards;

        while rest.len() >= MIN_GROUP_START {
            let mut group = rest[..2].to_vec();
            let mut next = 2;

            loop {
                if next + 1 == rest.len() {
                    // The last card is left without a right neighbour.
                    plan.groups.push(group);
                    plan.groups.push(vec![rest[next]]);
                    return;
                }

                let from_first = rest[next].value() - rest[0].value();
                let to_next = rest[next + 1].value() - rest[next].value();
                if from_first <= to_next {
                    group.push(rest[next]);
                    next += 1;
                } else {
                    plan.groups.push(group);
                    rest = &rest[next..];
                    break;
                }
            }
        }

        self.remainder(plan, rest);
    }

    fn remainder(&self, plan: &mut GoalPlan, rest: &[Card]) {
        if rest.is_empty() {
            return;
        }

        match self.policy {
            PlanPolicy::Covering => plan.groups.push(rest.to_vec()),
            PlanPolicy::Reference => plan.dropped.extend_from_slice(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory_cards::{Deck, Rank, Suit};
    use rand::{SeedableRng, rngs::StdRng};

    // Builds distinct cards with the given values, suits rotate for repeated values.
    fn cards(values: &[u8]) -> Vec<Card> {
        let mut used = [0usize; Rank::COUNT as usize];
        values
            .iter()
            .map(|&v| {
                let suit = Suit::suits().nth(used[v as usize]).unwrap();
                used[v as usize] += 1;
                Card::new(Rank::from_value(v).unwrap(), suit)
            })
            .collect()
    }

    fn values(groups: &[Vec<Card>]) -> Vec<Vec<u8>> {
        groups
            .iter()
            .map(|g| g.iter().map(|c| c.value()).collect())
            .collect()
    }

    #[test]
    fn five_cards_hand() {
        // Sorted [1, 1, 4, 5, 9]: 5 is the placeholder and [1, 1, 4, 9] is
        // split into [1, 1, 4] (3 <= 5) and the last card [9].
        let hand = cards(&[4, 9, 1, 5, 1]);

        for policy in [PlanPolicy::Covering, PlanPolicy::Reference] {
            let plan = GoalPlanner::new(policy).plan(&hand);
            assert_eq!(values(plan.groups()), [vec![1, 1, 4], vec![9, 5]]);
            assert!(plan.dropped().is_empty());
            // [1, 1, 4] = 9 + 9 + 9, [5, 9] = 16 + 16
            assert_eq!(plan.benchmark(), 27 + 32);
        }
    }

    #[test]
    fn short_remainder() {
        // Sorted [0, 0, 5, 6, 12, 12, 12], the placeholder is a 12 and the
        // remainder [12, 12] is too short to start a group.
        let hand = cards(&[12, 0, 5, 12, 6, 0, 12]);

        let plan = GoalPlanner::new(PlanPolicy::Covering).plan(&hand);
        assert_eq!(
            values(plan.groups()),
            [vec![0, 0], vec![5, 6], vec![12, 12, 12]]
        );
        assert!(plan.dropped().is_empty());
        assert_eq!(plan.covered(), hand.len());
        assert_eq!(plan.benchmark(), 2);

        let plan = GoalPlanner::new(PlanPolicy::Reference).plan(&hand);
        assert_eq!(values(plan.groups()), [vec![0, 0], vec![5, 6, 12]]);
        assert_eq!(plan.dropped().len(), 2);
        assert_eq!(plan.covered() + plan.dropped().len(), hand.len());
        // [5, 6, 12] = 7² + 6² + 7²
        assert_eq!(plan.benchmark(), 134);
    }

    #[test]
    fn equal_values() {
        let hand = cards(&[7, 8, 7, 7, 8, 7]);
        let plan = GoalPlanner::default().plan(&hand);
        assert_eq!(values(plan.groups()), [vec![7, 7, 7, 7], vec![8, 8]]);
        assert_eq!(plan.benchmark(), 0);
    }

    #[test]
    fn tiny_hands() {
        let covering = GoalPlanner::new(PlanPolicy::Covering);
        let reference = GoalPlanner::new(PlanPolicy::Reference);

        assert_eq!(covering.plan(&[]), GoalPlan::default());

        let one = cards(&[10]);
        assert_eq!(values(covering.plan(&one).groups()), [vec![10]]);
        assert_eq!(reference.plan(&one).dropped(), one.as_slice());

        let three = cards(&[2, 8, 3]);
        assert_eq!(values(covering.plan(&three).groups()), [vec![2, 8, 3]]);
        let plan = reference.plan(&three);
        assert!(plan.groups().is_empty());
        assert_eq!(plan.dropped().len(), 3);
        assert_eq!(plan.benchmark(), 0);
    }

    #[test]
    fn random_hands_coverage() {
        let mut rng = StdRng::seed_from_u64(5);
        for n in 5..=Deck::SIZE {
            let hand = Deck::new_and_shuffled(&mut rng).draw(n).unwrap();

            let plan = GoalPlanner::new(PlanPolicy::Covering).plan(&hand);
            assert!(plan.dropped().is_empty());
            assert_eq!(plan.covered(), n);

            let mut planned = plan.groups().concat();
            planned.sort_by_key(|c| c.id());
            let mut dealt = hand.clone();
            dealt.sort_by_key(|c| c.id());
            assert_eq!(planned, dealt);

            let plan = GoalPlanner::new(PlanPolicy::Reference).plan(&hand);
            assert_eq!(plan.covered() + plan.dropped().len(), n);
            assert!(plan.dropped().len() <= 3);
            assert!(!plan.groups().is_empty());
        }
    }
}
