//! Transition engine and match glue for the bboard simulator.
//!
//! [`step`] is the hot path: one allocation-free, deterministic tick over
//! a [`State`](bboard_core::State). Around it sit seeded map generation,
//! agent policies, fogged observations and the [`Environment`] driver
//! that plays a game to the end, optionally enforcing a decision
//! deadline per tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod env;
pub mod error;
pub mod fog;
pub mod init;
pub mod metrics;
pub mod step;
pub mod timed;

pub use agent::{Agent, IdleAgent, RandomAgent};
pub use config::{ConfigError, EnvConfig};
pub use env::Environment;
pub use error::EnvError;
pub use fog::fog_state;
pub use init::{init_board_items, init_state};
pub use metrics::StepMetrics;
pub use step::step;
pub use timed::{collect_moves, collect_moves_timed, AgentSlot, MoveBatch};
