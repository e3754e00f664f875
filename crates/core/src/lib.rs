// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Memory game engine.
//!
//! A [GameSession] deals a hand, shows it for memorization and then lets the
//! player evaluate groups of face down cards. Each group pays a penalty that
//! grows with the spread of its values (see [scoring]) and the player tries to
//! keep the total under a benchmark computed by the [GoalPlanner].
//!
//! ```
//! # use memory_core::{GoalPlanner, PlanPolicy};
//! # use memory_cards::Deck;
//! let hand = Deck::new_and_shuffled(&mut rand::rng()).draw(10).unwrap();
//! let plan = GoalPlanner::new(PlanPolicy::Covering).plan(&hand);
//! assert_eq!(plan.covered(), 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod config;
pub mod error;
pub mod planner;
pub mod scoring;
pub mod session;
pub mod sort;
pub mod table;
pub mod timer;

pub use config::Config;
pub use error::{Error, Result};
pub use planner::{GoalPlan, GoalPlanner, PlanPolicy};
pub use session::{GameSession, Scores, SessionState};
pub use table::{TableCard, Visibility};
pub use timer::{Cancel, HandId, Scheduler};

// Reexport cards types.
pub use memory_cards::{Card, Deck, DrawError, Rank, Suit};
