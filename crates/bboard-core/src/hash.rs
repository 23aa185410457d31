//! Hashing of board states.
//!
//! Uses FNV-1a over the canonical encoding of a [`State`]: grid cells,
//! agent infos, the packed bomb words in logical queue order, flames and
//! counters. Two states that compare equal always hash equal, independent
//! of where their ring buffers currently start. Not cryptographically
//! secure; meant for determinism checks and transposition tables.

use crate::state::State;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Compute a 64-bit hash of a state.
pub fn state_hash(state: &State) -> u64 {
    let mut hash = FNV_OFFSET;

    for row in &state.board {
        for &cell in row {
            hash = fnv1a_u32(hash, cell as u32);
        }
    }

    for agent in &state.agents {
        hash = fnv1a_u32(hash, agent.x as u32);
        hash = fnv1a_u32(hash, agent.y as u32);
        hash = fnv1a_u32(hash, agent.bomb_count);
        hash = fnv1a_u32(hash, agent.max_bomb_count);
        hash = fnv1a_u32(hash, agent.bomb_strength);
        hash = fnv1a_byte(hash, agent.can_kick as u8);
        hash = fnv1a_byte(hash, agent.dead as u8);
    }

    // Queue lengths are folded in so that moving an element across the
    // bomb/flame boundary changes the hash.
    hash = fnv1a_u32(hash, state.bombs.len() as u32);
    for bomb in state.bombs.iter() {
        hash = fnv1a_u32(hash, bomb.bits());
    }
    hash = fnv1a_u32(hash, state.flames.len() as u32);
    for flame in state.flames.iter() {
        hash = fnv1a_u32(hash, flame.position.x as u32);
        hash = fnv1a_u32(hash, flame.position.y as u32);
        hash = fnv1a_u32(hash, flame.time_left);
        hash = fnv1a_u32(hash, flame.strength);
        hash = fnv1a_u32(hash, flame.id as u32);
    }

    hash = fnv1a_u32(hash, state.time_step);
    hash = fnv1a_u32(hash, state.alive_agents);
    fnv1a_u32(hash, state.next_flame_id as u32)
}
