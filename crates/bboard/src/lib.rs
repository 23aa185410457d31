//! bboard: a deterministic, high-throughput simulator for a four-agent
//! grid bombing game.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the bboard sub-crates. For most users, adding `bboard` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use bboard::prelude::*;
//!
//! // Step a generated board by hand, as a search tree would.
//! let state = init_state(0x1337, [0, 1, 2, 3]);
//! let mut probe = state;
//! step(&mut probe, &[Move::Bomb, Move::Down, Move::Left, Move::Up]);
//! assert_eq!(probe.time_step, 1);
//! assert_eq!(state.time_step, 0);
//!
//! // Or let the driver play a full game.
//! let mut env = Environment::new(EnvConfig { max_ticks: 50, ..EnvConfig::default() }).unwrap();
//! env.make_game([
//!     Box::new(RandomAgent::new(1)),
//!     Box::new(RandomAgent::new(2)),
//!     Box::new(IdleAgent),
//!     Box::new(IdleAgent),
//! ]);
//! env.run(u32::MAX).unwrap();
//! assert!(env.is_done());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `bboard-core` | Cell encoding, bomb and flame records, fixed queue, `State` |
//! | [`engine`] | `bboard-engine` | Transition function, map generation, agents, driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// State representation (`bboard-core`).
///
/// Cell values live in [`types::item`]; the board, agents and queues in
/// [`types::State`].
pub use bboard_core as types;

/// Transition function and match glue (`bboard-engine`).
///
/// [`engine::step`] advances a state by one tick; [`engine::Environment`]
/// plays whole games.
pub use bboard_engine as engine;

/// Common imports for typical bboard usage.
///
/// ```rust
/// use bboard::prelude::*;
/// ```
pub mod prelude {
    // State
    pub use bboard_core::{
        AgentInfo, Bomb, Direction, FixedQueue, Flame, Move, Position, State, AGENT_COUNT,
        BOARD_SIZE,
    };

    // Helpers
    pub use bboard_core::{render_state, state_hash};

    // Engine
    pub use bboard_engine::{
        fog_state, init_board_items, init_state, step, Agent, EnvConfig, Environment, IdleAgent,
        RandomAgent, StepMetrics,
    };

    // Errors
    pub use bboard_core::MoveError;
    pub use bboard_engine::{ConfigError, EnvError};
}
