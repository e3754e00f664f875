// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Deferred actions scheduling.
//!
//! The engine does not run timers, it asks a [Scheduler] to deliver a
//! [HandId] back after a delay and the front end then calls
//! [GameSession::conceal](crate::GameSession::conceal) with it.
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

/// Identifies a dealt hand within a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandId(u32);

impl HandId {
    /// Returns the id of the hand dealt after this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for HandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A handle to cancel a scheduled action.
pub trait Cancel {
    /// Cancels the action, it does nothing if the action has already fired.
    fn cancel(&mut self);
}

/// A one shot timer collaborator.
pub trait Scheduler {
    /// Schedules delivery of `hand` after at least `delay`.
    fn schedule_once(&mut self, delay: Duration, hand: HandId) -> Box<dyn Cancel>;
}
