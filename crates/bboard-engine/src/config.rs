//! Match configuration and its validation errors.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use bboard_core::AGENT_COUNT;

// ── EnvConfig ──────────────────────────────────────────────────────

/// Configuration for an [`Environment`](crate::env::Environment).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    /// Seed for initial map generation. Default: `0x1337`.
    pub seed: u64,
    /// The game ends in a draw once this many ticks have passed. Default: 800.
    pub max_ticks: u32,
    /// Agent ids placed top-left, top-right, bottom-right and bottom-left.
    /// Must be a permutation of `0..AGENT_COUNT`. Default: `[0, 1, 2, 3]`.
    pub agent_order: [usize; AGENT_COUNT],
    /// Per-tick decision deadline. `None` calls agents inline without a
    /// time limit. Default: `None`.
    pub competitive: Option<Duration>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            seed: 0x1337,
            max_ticks: 800,
            agent_order: [0, 1, 2, 3],
            competitive: None,
        }
    }
}

impl EnvConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }
        let mut seen = [false; AGENT_COUNT];
        for &id in &self.agent_order {
            if id >= AGENT_COUNT || seen[id] {
                return Err(ConfigError::InvalidAgentOrder {
                    order: self.agent_order,
                });
            }
            seen[id] = true;
        }
        if self.competitive == Some(Duration::ZERO) {
            return Err(ConfigError::ZeroDeadline);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`EnvConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_ticks` is zero.
    ZeroTicks,
    /// `agent_order` is not a permutation of the agent ids.
    InvalidAgentOrder {
        /// The rejected order.
        order: [usize; AGENT_COUNT],
    },
    /// The competitive deadline is zero.
    ZeroDeadline,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTicks => write!(f, "max_ticks must be at least 1"),
            Self::InvalidAgentOrder { order } => {
                write!(f, "agent_order {order:?} is not a permutation of 0..{AGENT_COUNT}")
            }
            Self::ZeroDeadline => write!(f, "competitive deadline must be non-zero"),
        }
    }
}

impl Error for ConfigError {}
