//! Core types for the bboard simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! compact state representation stepped by `bboard-engine`: the encoded
//! cell grid, the packed bomb record, flame records, per-agent info and
//! the fixed-capacity queue that backs the bomb and flame lifecycles.
//!
//! Nothing in here allocates on the heap. A [`State`] is `Copy` and is
//! meant to be duplicated as a flat block by search code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod bomb;
pub mod error;
pub mod flame;
pub mod hash;
pub mod item;
pub mod position;
pub mod queue;
pub mod render;
pub mod state;

pub use agent::AgentInfo;
pub use bomb::Bomb;
pub use error::MoveError;
pub use flame::Flame;
pub use hash::state_hash;
pub use position::{Direction, Move, Position};
pub use queue::FixedQueue;
pub use render::{print_item, render_state};
pub use state::State;

/// Number of agents taking part in every game.
pub const AGENT_COUNT: usize = 4;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 11;

// Bomb records reserve 4 bits per coordinate.
const _: () = assert!(BOARD_SIZE <= 15, "board positions must fit into 8 bits");

/// Ticks between planting a bomb and its explosion.
pub const BOMB_LIFETIME: u32 = 10;

/// Blast strength every agent starts with.
pub const BOMB_DEFAULT_STRENGTH: u32 = 1;

/// Upper bound on blast strength (width of the strength bit-field).
pub const MAX_BOMB_STRENGTH: u32 = 15;

/// Ticks a flame stays on the board.
pub const FLAME_LIFETIME: u32 = 4;

/// Maximum number of bombs a single agent can have on the board.
pub const MAX_BOMBS_PER_AGENT: u32 = 5;

/// Capacity of the bomb and flame queues.
pub const MAX_BOMBS: usize = AGENT_COUNT * MAX_BOMBS_PER_AGENT as usize;
