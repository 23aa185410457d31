//! Move collection, inline or under a wall-clock deadline.
//!
//! In competitive mode every living agent decides on its own thread
//! against its own copy of the state. The agent travels to the thread and
//! comes back with its move over a `bounded(1)` channel. An agent that
//! misses the deadline plays [`Move::Idle`] and its slot stays
//! [`AgentSlot::Pending`] until the thread hands it back; a slow policy
//! never holds up the other agents or the simulation.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use smallvec::SmallVec;

use bboard_core::{Move, State, AGENT_COUNT};

use crate::agent::Agent;
use crate::error::EnvError;

type Reply = (Move, Box<dyn Agent>);

/// Where an agent slot's policy currently lives.
pub enum AgentSlot {
    /// The policy is available for the next decision.
    Ready(Box<dyn Agent>),
    /// The policy is still deciding on a thread from an earlier tick.
    Pending(Receiver<Reply>),
    /// The policy panicked or was never set; the slot plays Idle.
    Lost,
}

impl AgentSlot {
    /// Wrap a policy.
    pub fn new(agent: Box<dyn Agent>) -> Self {
        Self::Ready(agent)
    }

    /// Pull a pending policy back if its thread has finished.
    ///
    /// Returns whether the slot is ready. Never blocks. The late move is
    /// discarded.
    pub fn recover(&mut self) -> bool {
        let outcome = match self {
            Self::Ready(_) => return true,
            Self::Lost => return false,
            Self::Pending(rx) => rx.try_recv(),
        };
        match outcome {
            Ok((_, agent)) => {
                *self = Self::Ready(agent);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                *self = Self::Lost;
                false
            }
        }
    }

    /// Take the policy out of a ready slot, leaving [`AgentSlot::Lost`].
    fn take(&mut self) -> Option<Box<dyn Agent>> {
        match std::mem::replace(self, Self::Lost) {
            Self::Ready(agent) => Some(agent),
            other => {
                *self = other;
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Ready(_) => "Ready",
            Self::Pending(_) => "Pending",
            Self::Lost => "Lost",
        }
    }
}

impl std::fmt::Debug for AgentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One move per agent plus the agents that could not deliver one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveBatch {
    /// Moves indexed by agent id. Dead and timed-out agents are Idle.
    pub moves: [Move; AGENT_COUNT],
    /// Living agents that played Idle because their policy was
    /// unavailable, in ascending id order.
    pub timed_out: SmallVec<[usize; AGENT_COUNT]>,
}

/// Ask every living agent for a move on the calling thread.
///
/// Slots still pending from an earlier timed round count as timed out.
pub fn collect_moves(state: &State, slots: &mut [AgentSlot; AGENT_COUNT]) -> MoveBatch {
    let mut batch = MoveBatch::default();
    for (id, slot) in slots.iter_mut().enumerate() {
        if state.agents[id].dead {
            continue;
        }
        if !slot.recover() {
            batch.timed_out.push(id);
        } else if let AgentSlot::Ready(agent) = slot {
            batch.moves[id] = agent.act(state);
        }
    }
    batch
}

/// Ask every living agent for a move, each on its own thread, and wait
/// at most `deadline` for all of them together.
pub fn collect_moves_timed(
    state: &State,
    slots: &mut [AgentSlot; AGENT_COUNT],
    deadline: Duration,
) -> Result<MoveBatch, EnvError> {
    let until = Instant::now() + deadline;
    let mut batch = MoveBatch::default();
    let mut asked = [false; AGENT_COUNT];

    for (id, slot) in slots.iter_mut().enumerate() {
        if state.agents[id].dead {
            continue;
        }
        if !slot.recover() {
            batch.timed_out.push(id);
            continue;
        }
        let Some(mut agent) = slot.take() else {
            continue;
        };
        let (reply_tx, reply_rx) = crossbeam_channel::bounded::<Reply>(1);
        let snapshot = *state;
        thread::Builder::new()
            .name(format!("bboard-agent-{id}"))
            .spawn(move || {
                let mv = agent.act(&snapshot);
                // The driver may have stopped listening.
                let _ = reply_tx.send((mv, agent));
            })
            .map_err(|source| EnvError::ThreadSpawnFailed { agent: id, source })?;
        *slot = AgentSlot::Pending(reply_rx);
        asked[id] = true;
    }

    for (id, slot) in slots.iter_mut().enumerate() {
        if !asked[id] {
            continue;
        }
        let AgentSlot::Pending(rx) = slot else {
            continue;
        };
        match rx.recv_deadline(until) {
            Ok((mv, agent)) => {
                batch.moves[id] = mv;
                *slot = AgentSlot::Ready(agent);
            }
            Err(RecvTimeoutError::Timeout) => batch.timed_out.push(id),
            Err(RecvTimeoutError::Disconnected) => {
                *slot = AgentSlot::Lost;
                batch.timed_out.push(id);
            }
        }
    }

    batch.timed_out.sort_unstable();
    Ok(batch)
}
