//! Agent policies.
//!
//! An [`Agent`] maps an observed (possibly fogged) [`State`] to a [`Move`].
//! Agents are `Send` so the driver can evaluate them on their own thread
//! under a decision deadline.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use bboard_core::{Move, State};

/// A policy controlling one agent slot.
pub trait Agent: Send {
    /// Choose a move for the current tick.
    fn act(&mut self, state: &State) -> Move;
}

/// Never does anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleAgent;

impl Agent for IdleAgent {
    fn act(&mut self, _state: &State) -> Move {
        Move::Idle
    }
}

/// Picks uniformly among all six moves.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    /// Create an agent whose move sequence is fixed by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, _state: &State) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn act(&mut self, state: &State) -> Move {
        (**self).act(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_agent_idles() {
        let s = State::new();
        assert_eq!(IdleAgent.act(&s), Move::Idle);
    }

    #[test]
    fn random_agent_is_seeded() {
        let s = State::new();
        let mut a = RandomAgent::new(42);
        let mut b = RandomAgent::new(42);
        let xs: Vec<_> = (0..64).map(|_| a.act(&s)).collect();
        let ys: Vec<_> = (0..64).map(|_| b.act(&s)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn random_agent_uses_every_move() {
        let s = State::new();
        let mut a = RandomAgent::new(1);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[u8::from(a.act(&s)) as usize] = true;
        }
        assert!(seen.iter().all(|&x| x));
    }

    #[test]
    fn boxed_agents_delegate() {
        let s = State::new();
        let mut boxed: Box<dyn Agent> = Box::new(IdleAgent);
        assert_eq!(boxed.act(&s), Move::Idle);
    }
}
