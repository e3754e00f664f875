// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Game session state.
use ahash::AHashSet;
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use memory_cards::Deck;

use crate::{
    config::Config,
    error::{Error, Result},
    planner::{GoalPlan, GoalPlanner},
    scoring,
    table::{TableCard, Visibility},
    timer::{Cancel, HandId, Scheduler},
};

/// The session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No hand has been dealt.
    #[default]
    Idle,
    /// A hand has been dealt and the benchmark computed.
    Dealt,
    /// The cards are shown waiting for the concealment timer.
    Memorizing,
    /// The cards are face down and the player can evaluate groups.
    Playing,
}

/// The benchmark and player scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// The score the player has to stay under.
    pub benchmark: u32,
    /// The player running score.
    pub player: u32,
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Goal: under {} / Points: {}", self.benchmark, self.player)
    }
}

/// A single player game session.
pub struct GameSession<S> {
    config: Config,
    scheduler: S,
    rng: StdRng,
    state: SessionState,
    hand_id: HandId,
    cards: Vec<TableCard>,
    selection: Vec<usize>,
    plan: GoalPlan,
    scores: Scores,
    conceal_timer: Option<Box<dyn Cancel>>,
}

impl<S: Scheduler> GameSession<S> {
    /// Creates a new session.
    pub fn new(config: Config, scheduler: S) -> Self {
        Self::with_rng(config, scheduler, StdRng::from_os_rng())
    }

    /// Creates a new session with user initialized randomness.
    pub fn with_rng(config: Config, scheduler: S, rng: StdRng) -> Self {
        Self {
            config,
            scheduler,
            rng,
            state: SessionState::Idle,
            hand_id: HandId::default(),
            cards: Vec::default(),
            selection: Vec::default(),
            plan: GoalPlan::default(),
            scores: Scores::default(),
            conceal_timer: None,
        }
    }

    /// Deals a new hand and shows it for memorization.
    ///
    /// A concealment still pending for the previous hand is cancelled.
    pub fn start(&mut self) -> Result<HandId> {
        if let Some(mut timer) = self.conceal_timer.take() {
            debug!("Cancel concealment for hand {}", self.hand_id);
            timer.cancel();
        }

        let hand = Deck::new_and_shuffled(&mut self.rng).draw(self.config.num_cards())?;

        self.hand_id = self.hand_id.next();
        self.plan = GoalPlanner::new(self.config.policy).plan(&hand);
        self.cards = hand.into_iter().map(TableCard::new).collect();
        self.selection.clear();
        self.scores = Scores {
            benchmark: self.plan.benchmark(),
            player: 0,
        };
        self.state = SessionState::Dealt;

        info!(
            "Dealt hand {} with {} cards, benchmark {}",
            self.hand_id,
            self.cards.len(),
            self.scores.benchmark
        );

        for card in &mut self.cards {
            card.memorize()?;
        }
        self.state = SessionState::Memorizing;

        let timer = self
            .scheduler
            .schedule_once(self.config.memorize_delay(), self.hand_id);
        self.conceal_timer = Some(timer);

        Ok(self.hand_id)
    }

    /// Turns the cards of `hand` face down, called when the timer fires.
    ///
    /// Returns `false` if `hand` is not the memorizing hand.
    pub fn conceal(&mut self, hand: HandId) -> Result<bool> {
        if hand != self.hand_id || self.state != SessionState::Memorizing {
            debug!("Ignore stale concealment for hand {hand}");
            return Ok(false);
        }

        for card in &mut self.cards {
            card.conceal()?;
        }

        self.conceal_timer = None;
        self.state = SessionState::Playing;

        info!("Concealed hand {hand}");
        Ok(true)
    }

    /// Toggles selection of the card at `index`.
    ///
    /// Returns `false` if the card cannot be selected.
    pub fn toggle_select(&mut self, index: usize) -> Result<bool> {
        let card = self.cards.get_mut(index).ok_or(Error::CardIndex(index))?;
        if !card.toggle_select() {
            return Ok(false);
        }

        if card.is_selected() {
            self.selection.push(index);
        } else {
            self.selection.retain(|&i| i != index);
        }

        debug!("Selection {:?}", self.selection);
        Ok(true)
    }

    /// Evaluates the selected cards, an empty selection scores zero.
    pub fn evaluate_selection(&mut self) -> Result<u32> {
        if self.selection.is_empty() {
            return Ok(0);
        }

        let group = self.selection.clone();
        self.evaluate(&group)
    }

    /// Locks the cards at `group` indices and adds their score to the player score.
    ///
    /// Nothing changes if the group is invalid.
    pub fn evaluate(&mut self, group: &[usize]) -> Result<u32> {
        if self.state != SessionState::Playing {
            return Err(Error::NotPlaying(self.state));
        }

        let mut seen = AHashSet::with_capacity(group.len());
        for &index in group {
            let card = self.cards.get(index).ok_or(Error::CardIndex(index))?;
            if card.visibility() == Visibility::Locked {
                return Err(Error::CardLocked(index));
            }

            if !seen.insert(index) {
                return Err(Error::DuplicateCard(index));
            }
        }

        for &index in group {
            self.cards[index].lock_reveal()?;
        }
        self.selection.retain(|i| !seen.contains(i));

        let cards = group.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();
        let score = scoring::score(&cards);
        self.scores.player += score;

        debug!(
            "Evaluated {} cards for {score} points, {}",
            cards.len(),
            self.scores
        );

        Ok(score)
    }

    /// The session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current hand id.
    pub fn hand_id(&self) -> HandId {
        self.hand_id
    }

    /// The dealt cards in deal order.
    pub fn cards(&self) -> &[TableCard] {
        &self.cards
    }

    /// The selected card indices in selection order.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// The benchmark groups for the current hand.
    pub fn plan(&self) -> &GoalPlan {
        &self.plan
    }

    /// The current scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Checks if every card of the hand has been evaluated.
    pub fn is_finished(&self) -> bool {
        !self.cards.is_empty()
            && self
                .cards
                .iter()
                .all(|c| c.visibility() == Visibility::Locked)
    }
}
