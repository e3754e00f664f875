// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Engine error types.
use memory_cards::DrawError;

use crate::{session::SessionState, table::Visibility};

/// An engine error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The configured hand size is not in the supported range.
    #[error("invalid number of cards {0}, expected a value between {min} and {max}",
        min = crate::Config::MIN_CARDS, max = crate::Config::MAX_CARDS)]
    InvalidCardCount(usize),
    /// Drawing from the deck failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// A card transition is not allowed from the card current state.
    #[error("cannot {action} a card that is {from:?}")]
    InvalidTransition {
        /// The card state.
        from: Visibility,
        /// The rejected action.
        action: &'static str,
    },
    /// A card index is out of the hand range.
    #[error("card index {0} is out of range")]
    CardIndex(usize),
    /// A card in a group has already been evaluated.
    #[error("card {0} has already been evaluated")]
    CardLocked(usize),
    /// A card appears more than once in a group.
    #[error("card {0} appears more than once in the group")]
    DuplicateCard(usize),
    /// The session is not accepting evaluations.
    #[error("cannot evaluate cards while the session is {0:?}")]
    NotPlaying(SessionState),
}

/// Engine result type.
pub type Result<T> = std::result::Result<T, Error>;
