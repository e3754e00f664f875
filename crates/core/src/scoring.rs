// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Group penalty scoring.
//!
//! Each card in a group pays the square of its distance from the farthest of
//! the group extremes, so a group of equal values scores zero and a single
//! outlier is penalized quadratically:
//!
//! ```
//! # use memory_core::scoring::score_values;
//! assert_eq!(score_values(&[3, 5, 9]), 36 + 16 + 36);
//! assert_eq!(score_values(&[7, 7, 7]), 0);
//! ```
use crate::sort::{Valued, sort_by_value};

/// The value of the filler card added to a single card group.
pub const FILLER_VALUE: u8 = 0;

/// Scores a group of cards.
///
/// A group with a single card is scored as if a card with value
/// [FILLER_VALUE] was added to it, an empty group scores zero.
pub fn score<T: Valued>(group: &[T]) -> u32 {
    let values = group.iter().map(|c| c.value()).collect::<Vec<_>>();
    score_values(&values)
}

/// Scores a group of card values, see [score].
pub fn score_values(values: &[u8]) -> u32 {
    let mut values = values.to_vec();
    if values.len() == 1 {
        values.push(FILLER_VALUE);
    }

    let sorted = sort_by_value(values);
    let (Some(&under), Some(&over)) = (sorted.first(), sorted.last()) else {
        return 0;
    };

    sorted
        .iter()
        .map(|&v| {
            let dist = (v - under).max(over - v) as u32;
            dist * dist
        })
        .sum()
}
