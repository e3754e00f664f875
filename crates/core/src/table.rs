// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Dealt cards and their visibility.
use serde::{Deserialize, Serialize};

use memory_cards::Card;

use crate::{
    error::{Error, Result},
    sort::Valued,
};

/// A card visibility state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// The card value is hidden and the card can be selected.
    #[default]
    FaceDown,
    /// The card value is shown for memorization.
    Revealed,
    /// The card has been evaluated, its value is shown and it cannot be selected.
    Locked,
}

/// A card dealt on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCard {
    card: Card,
    visibility: Visibility,
    selected: bool,
}

impl TableCard {
    /// Creates a face down card.
    pub fn new(card: Card) -> Self {
        Self {
            card,
            visibility: Visibility::FaceDown,
            selected: false,
        }
    }

    /// The dealt card.
    pub fn card(&self) -> Card {
        self.card
    }

    /// The card visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Checks if the card is highlighted for the next evaluation.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Checks if the viewer can see the card value.
    pub fn is_shown(&self) -> bool {
        !matches!(self.visibility, Visibility::FaceDown)
    }

    /// Shows the card value for memorization.
    pub fn memorize(&mut self) -> Result<()> {
        self.transition(Visibility::FaceDown, Visibility::Revealed, "memorize")
    }

    /// Hides the card value after memorization.
    pub fn conceal(&mut self) -> Result<()> {
        self.transition(Visibility::Revealed, Visibility::FaceDown, "conceal")
    }

    /// Shows the card value for good after evaluation.
    pub fn lock_reveal(&mut self) -> Result<()> {
        self.transition(Visibility::FaceDown, Visibility::Locked, "lock")?;
        self.selected = false;
        Ok(())
    }

    /// Toggles the highlight flag, returns `false` if the card cannot be selected.
    pub fn toggle_select(&mut self) -> bool {
        if self.visibility != Visibility::FaceDown {
            return false;
        }

        self.selected = !self.selected;
        true
    }

    fn transition(&mut self, from: Visibility, to: Visibility, action: &'static str) -> Result<()> {
        if self.visibility != from {
            return Err(Error::InvalidTransition {
                from: self.visibility,
                action,
            });
        }

        self.visibility = to;
        Ok(())
    }
}

impl Valued for TableCard {
    fn value(&self) -> u8 {
        self.card.value()
    }
}
