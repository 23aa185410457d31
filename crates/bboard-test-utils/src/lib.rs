//! Test utilities for bboard development.
//!
//! Provides scripted and misbehaving [`Agent`](bboard_engine::Agent)
//! implementations in [`fixtures`] and a [`BoardBuilder`] for laying out
//! hand-made scenarios without going through map generation.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingAgent, ScriptedAgent, SlowAgent};

use bboard_core::item;
use bboard_core::{Move, Position, State, AGENT_COUNT, BOARD_SIZE};

/// Builder for hand-made board states.
///
/// Starts from an empty board. Agents not placed explicitly go to the
/// corners (agent `i` in corner `i`, clockwise from the top left).
pub struct BoardBuilder {
    state: State,
    placed: [bool; AGENT_COUNT],
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            state: State::new(),
            placed: [false; AGENT_COUNT],
        }
    }

    /// Put agent `id` at `(x, y)`.
    pub fn agent(mut self, id: usize, x: i32, y: i32) -> Self {
        self.state.put_agent(x, y, id);
        self.placed[id] = true;
        self
    }

    /// Put a raw cell value at `(x, y)`.
    pub fn item(mut self, x: i32, y: i32, cell: i32) -> Self {
        self.state.put_item(x, y, cell);
        self
    }

    pub fn rigid(self, x: i32, y: i32) -> Self {
        self.item(x, y, item::RIGID)
    }

    /// Wood hiding the powerup for `powflag` (0 for none).
    pub fn wood(self, x: i32, y: i32, powflag: i32) -> Self {
        self.item(x, y, item::wood(powflag))
    }

    /// Plant a bomb for `owner` at `(x, y)`, raising the owner's capacity
    /// if needed, then set its strength and fuse.
    pub fn bomb(mut self, x: i32, y: i32, owner: usize, strength: u32, fuse: u32) -> Self {
        let agent = &mut self.state.agents[owner];
        if !agent.can_plant() {
            agent.max_bomb_count = agent.bomb_count + 1;
        }
        if self.state.plant_bomb(x, y, owner, true) {
            let last = self.state.bombs.len() - 1;
            self.state.bombs[last].set_strength(strength);
            self.state.bombs[last].set_fuse(fuse);
        }
        self
    }

    /// Give agent `id` the kick ability.
    pub fn kicker(mut self, id: usize) -> Self {
        self.state.agents[id].can_kick = true;
        self
    }

    pub fn strength(mut self, id: usize, strength: u32) -> Self {
        self.state.agents[id].bomb_strength = strength;
        self
    }

    pub fn dead(mut self, id: usize) -> Self {
        self.state.kill(id);
        self
    }

    pub fn build(mut self) -> State {
        let far = BOARD_SIZE as i32 - 1;
        let corners = [(0, 0), (far, 0), (far, far), (0, far)];
        for (id, &(x, y)) in corners.iter().enumerate() {
            if !self.placed[id] {
                self.state.put_agent(x, y, id);
            }
        }
        self.state
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty board with agent `i` in corner `i`.
pub fn cornered_state() -> State {
    BoardBuilder::new().build()
}

/// Moves with `mv` for agent `id` and Idle for everyone else.
pub fn only(id: usize, mv: Move) -> [Move; AGENT_COUNT] {
    let mut moves = [Move::Idle; AGENT_COUNT];
    moves[id] = mv;
    moves
}

/// Positions of all flamed cells in row-major order.
pub fn flamed_cells(state: &State) -> Vec<Position> {
    let mut out = Vec::new();
    for y in 0..BOARD_SIZE as i32 {
        for x in 0..BOARD_SIZE as i32 {
            if item::is_flame(state.item(x, y)) {
                out.push(Position::new(x, y));
            }
        }
    }
    out
}

/// Check the invariants every reachable state satisfies.
///
/// Panics with a description of the first violation.
pub fn assert_consistent(state: &State) {
    let living = state.living_agents().count();
    assert_eq!(state.alive_agents as usize, living, "alive count out of sync");

    for (i, a) in state.agents.iter().enumerate() {
        if a.dead {
            continue;
        }
        assert!(a.position().is_on_board(), "agent {i} off the board");
        let cell = state.get(a.position());
        assert!(
            cell == item::agent_item(i) || cell == item::BOMB,
            "agent {i} cell holds {cell:#x}"
        );
        for (j, b) in state.agents.iter().enumerate().skip(i + 1) {
            if !b.dead {
                assert_ne!(a.position(), b.position(), "agents {i} and {j} share a cell");
            }
        }
        let owned = state.bombs.iter().filter(|b| b.owner() as usize == i).count();
        assert_eq!(a.bomb_count as usize, owned, "agent {i} bomb count");
        assert!(a.bomb_count <= a.max_bomb_count, "agent {i} over capacity");
    }

    for bomb in state.bombs.iter() {
        let p = bomb.position();
        assert_eq!(state.get(p), item::BOMB, "bomb at {p} without marker");
    }
    for (i, bomb) in state.bombs.iter().enumerate() {
        for other in state.bombs.iter().skip(i + 1) {
            assert_ne!(bomb.position(), other.position(), "two bombs on one cell");
        }
    }
}
