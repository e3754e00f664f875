// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Game configuration.
use std::time::Duration;

use crate::{
    error::{Error, Result},
    planner::PlanPolicy,
};

/// The game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    num_cards: usize,
    /// The benchmark planning policy.
    pub policy: PlanPolicy,
}

impl Config {
    /// The smallest supported hand.
    pub const MIN_CARDS: usize = 5;
    /// The largest supported hand.
    pub const MAX_CARDS: usize = 52;
    /// The default hand size.
    pub const DEFAULT_CARDS: usize = 30;

    /// Creates a configuration for hands of `num_cards` cards.
    pub fn new(num_cards: usize) -> Result<Self> {
        if !(Self::MIN_CARDS..=Self::MAX_CARDS).contains(&num_cards) {
            return Err(Error::InvalidCardCount(num_cards));
        }

        Ok(Self {
            num_cards,
            policy: PlanPolicy::default(),
        })
    }

    /// Sets the benchmark planning policy.
    pub fn with_policy(mut self, policy: PlanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The number of cards in a hand.
    pub fn num_cards(&self) -> usize {
        self.num_cards
    }

    /// How long the cards stay revealed, one second per card.
    pub fn memorize_delay(&self) -> Duration {
        Duration::from_secs(self.num_cards as u64)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_cards: Self::DEFAULT_CARDS,
            policy: PlanPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_count_range() {
        assert_eq!(Config::new(4), Err(Error::InvalidCardCount(4)));
        assert_eq!(Config::new(53), Err(Error::InvalidCardCount(53)));
        assert_eq!(Config::new(5).unwrap().num_cards(), 5);
        assert_eq!(Config::new(52).unwrap().num_cards(), 52);
    }

    #[test]
    fn memorize_delay() {
        let config = Config::new(12).unwrap();
        assert_eq!(config.memorize_delay(), Duration::from_secs(12));
        assert_eq!(Config::default().memorize_delay(), Duration::from_secs(30));
    }

    #[test]
    fn error_message() {
        let err = Config::new(60).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number of cards 60, expected a value between 5 and 52"
        );
    }
}
