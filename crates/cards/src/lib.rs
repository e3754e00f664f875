// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Memory game cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use memory_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.value(), 12);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! and a single use [Deck] type that is shuffled and then dealt once:
//!
//! ```
//! # use memory_cards::Deck;
//! let deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.draw(30).unwrap();
//! assert_eq!(hand.len(), 30);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DrawError, Rank, Suit};
