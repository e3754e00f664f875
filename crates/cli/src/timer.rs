// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Concealment timer backed by tokio tasks.
use std::time::Duration;
use tokio::{sync::mpsc, task::JoinHandle, time};

use memory_core::{Cancel, HandId, Scheduler};

/// A scheduler that spawns a sleeping task for each request.
///
/// When the task wakes up it sends the hand id on the channel given to
/// [TokioScheduler::new].
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    fired_tx: mpsc::Sender<HandId>,
}

impl TokioScheduler {
    /// Creates a new scheduler.
    pub fn new(fired_tx: mpsc::Sender<HandId>) -> Self {
        Self { fired_tx }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&mut self, delay: Duration, hand: HandId) -> Box<dyn Cancel> {
        let fired_tx = self.fired_tx.clone();
        let task = tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = fired_tx.send(hand).await;
        });

        Box::new(TimerTask(task))
    }
}

struct TimerTask(JoinHandle<()>);

impl Cancel for TimerTask {
    fn cancel(&mut self) {
        self.0.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut scheduler = TokioScheduler::new(tx);

        let hand = HandId::default().next();
        let _timer = scheduler.schedule_once(Duration::from_secs(5), hand);

        time::sleep(Duration::from_secs(4)).await;
        assert!(rx.try_recv().is_err());

        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(rx.recv().await, Some(hand));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_does_not_fire() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut scheduler = TokioScheduler::new(tx);

        let first = HandId::default().next();
        let mut timer = scheduler.schedule_once(Duration::from_secs(5), first);
        timer.cancel();

        let second = first.next();
        let _timer = scheduler.schedule_once(Duration::from_secs(10), second);

        // Only the second hand is delivered.
        assert_eq!(rx.recv().await, Some(second));
        assert!(rx.try_recv().is_err());
    }
}
