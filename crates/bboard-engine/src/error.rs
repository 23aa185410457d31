//! Errors returned by the match driver.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Errors from [`Environment`](crate::env::Environment) operations.
#[derive(Debug)]
pub enum EnvError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// `step` or `run` was called before `make_game`.
    NotStarted,
    /// `step` was called after the game ended.
    GameOver,
    /// A thread for a timed agent decision could not be spawned.
    ThreadSpawnFailed {
        /// Agent whose decision thread failed to start.
        agent: usize,
        /// Underlying OS error.
        source: std::io::Error,
    },
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::NotStarted => write!(f, "no game in progress, call make_game first"),
            Self::GameOver => write!(f, "game is already over"),
            Self::ThreadSpawnFailed { agent, source } => {
                write!(f, "failed to spawn decision thread for agent {agent}: {source}")
            }
        }
    }
}

impl Error for EnvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::ThreadSpawnFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for EnvError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
