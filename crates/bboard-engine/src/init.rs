//! Seeded initial-map generation.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use bboard_core::item;
use bboard_core::{Position, State, AGENT_COUNT, BOARD_SIZE};

/// Rigid cells placed on a fresh board.
pub const RIGID_COUNT: usize = 20;
/// Wood cells placed on a fresh board.
pub const WOOD_COUNT: usize = 36;
/// Chance that a wood cell hides a powerup.
pub const POWERUP_CHANCE: f64 = 0.5;

// Both terrain kinds must fit outside the twelve reserved corner cells.
const _: () = assert!(RIGID_COUNT + WOOD_COUNT <= BOARD_SIZE * BOARD_SIZE - 12);

/// Whether `pos` is a corner or orthogonally adjacent to one.
///
/// These cells stay passage so every agent can move on the first tick.
fn is_corner_region(pos: Position) -> bool {
    let far = BOARD_SIZE as i32 - 1;
    let near_x = pos.x == 0 || pos.x == far;
    let near_y = pos.y == 0 || pos.y == far;
    let edge_x = pos.x <= 1 || pos.x >= far - 1;
    let edge_y = pos.y <= 1 || pos.y >= far - 1;
    (near_x && near_y) || (near_x && edge_y) || (near_y && edge_x)
}

/// Put rigid cells, wood and hidden powerups on the board.
///
/// Agents are not placed. Cells in the corner regions are left as they
/// are. The layout depends only on `seed`.
pub fn init_board_items(state: &mut State, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut free: Vec<Position> = (0..BOARD_SIZE as i32)
        .flat_map(|y| (0..BOARD_SIZE as i32).map(move |x| Position::new(x, y)))
        .filter(|&p| !is_corner_region(p))
        .collect();
    free.shuffle(&mut rng);

    let (rigid, rest) = free.split_at(RIGID_COUNT);
    for &pos in rigid {
        state.set(pos, item::RIGID);
    }
    for &pos in &rest[..WOOD_COUNT] {
        let powflag = if rng.random_bool(POWERUP_CHANCE) {
            rng.random_range(1..=3)
        } else {
            0
        };
        state.set(pos, item::wood(powflag));
    }
}

/// A fresh state with generated items and agents in the corners.
///
/// `order[k]` is the agent placed in corner `k`, clockwise from the top
/// left. `order` must be a permutation of `0..AGENT_COUNT`.
pub fn init_state(seed: u64, order: [usize; AGENT_COUNT]) -> State {
    let mut state = State::new();
    init_board_items(&mut state, seed);
    state.put_agents_in_corners(order[0], order[1], order[2], order[3]);
    state
}
