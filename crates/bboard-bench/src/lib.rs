//! Benchmark profiles and utilities for the bboard simulator.
//!
//! - [`reference_state`]: a generated board with agents in the corners
//! - [`busy_state`]: a mid-game board with bombs and flames in flight
//! - [`move_script`]: deterministic pseudo-random move sequences

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bboard_core::{Move, State, AGENT_COUNT};
use bboard_engine::{init_state, step};

/// Generated board for `seed` with agents `0..4` clockwise from the top left.
pub fn reference_state(seed: u64) -> State {
    init_state(seed, [0, 1, 2, 3])
}

/// A reference board advanced by `warmup` ticks of scripted play.
///
/// Every agent gets extra bomb capacity and strength first so that the
/// bomb and flame queues are populated.
pub fn busy_state(seed: u64, warmup: usize) -> State {
    let mut state = reference_state(seed);
    for agent in state.agents.iter_mut() {
        agent.max_bomb_count = 5;
        agent.bomb_strength = 3;
    }
    for moves in move_script(seed, warmup) {
        step(&mut state, &moves);
    }
    state
}

/// `ticks` rows of pseudo-random moves, one per agent, fixed by `seed`.
///
/// Bombs are planted at roughly one in six decisions.
pub fn move_script(seed: u64, ticks: usize) -> Vec<[Move; AGENT_COUNT]> {
    let mut x = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut script = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        let mut row = [Move::Idle; AGENT_COUNT];
        for mv in row.iter_mut() {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            *mv = Move::ALL[((x >> 33) % Move::ALL.len() as u64) as usize];
        }
        script.push(row);
    }
    script
}

/// Play `script` from `state` and return the final state.
pub fn play(mut state: State, script: &[[Move; AGENT_COUNT]]) -> State {
    for moves in script {
        step(&mut state, moves);
    }
    state
}
