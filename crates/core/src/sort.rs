// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Stable linear sort by card value.
use memory_cards::{Card, Rank};

/// A type that has a card value in `0..13`.
pub trait Valued {
    /// The card value.
    fn value(&self) -> u8;
}

impl Valued for Card {
    fn value(&self) -> u8 {
        Card::value(self)
    }
}

impl Valued for u8 {
    fn value(&self) -> u8 {
        *self
    }
}

impl<T: Valued + ?Sized> Valued for &T {
    fn value(&self) -> u8 {
        (**self).value()
    }
}

/// Sorts items by ascending value keeping the input order of equal values.
///
/// Items are pushed into one bucket per value and the buckets are concatenated,
/// no comparisons are made.
pub fn sort_by_value<T, I>(items: I) -> Vec<T>
where
    T: Valued,
    I: IntoIterator<Item = T>,
{
    let mut buckets: [Vec<T>; Rank::COUNT as usize] = Default::default();
    let mut len = 0;

    for item in items {
        // Values are always below Rank::COUNT.
        buckets[item.value() as usize].push(item);
        len += 1;
    }

    let mut sorted = Vec::with_capacity(len);
    for bucket in buckets {
        sorted.extend(bucket);
    }

    sorted
}
