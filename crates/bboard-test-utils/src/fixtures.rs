//! Reusable agent fixtures.
//!
//! - [`ScriptedAgent`]: plays a fixed list of moves, then idles.
//! - [`SlowAgent`]: sleeps before answering, to trip decision deadlines.
//! - [`CountingAgent`]: idles and counts how often it was asked.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bboard_core::{Move, State};
use bboard_engine::Agent;

/// Plays `moves` in order, then [`Move::Idle`] forever.
pub struct ScriptedAgent {
    moves: VecDeque<Move>,
}

impl ScriptedAgent {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not played yet.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Agent for ScriptedAgent {
    fn act(&mut self, _state: &State) -> Move {
        self.moves.pop_front().unwrap_or(Move::Idle)
    }
}

/// Sleeps for `delay` on every call, then answers `answer`.
pub struct SlowAgent {
    pub delay: Duration,
    pub answer: Move,
}

impl SlowAgent {
    pub fn new(delay: Duration, answer: Move) -> Self {
        Self { delay, answer }
    }
}

impl Agent for SlowAgent {
    fn act(&mut self, _state: &State) -> Move {
        thread::sleep(self.delay);
        self.answer
    }
}

/// Idles and counts calls through a shared counter.
pub struct CountingAgent {
    calls: Arc<AtomicUsize>,
}

impl CountingAgent {
    /// Create the agent and a handle to read its call count.
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl Agent for CountingAgent {
    fn act(&mut self, _state: &State) -> Move {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Move::Idle
    }
}
