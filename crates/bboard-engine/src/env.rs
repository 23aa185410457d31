//! Match driver.
//!
//! [`Environment`] owns the state of one game and a policy per agent
//! slot. Each [`step`](Environment::step) collects one move per living
//! agent (inline or under the competitive deadline), applies the
//! transition function once and checks whether the game is over:
//!
//! - one agent left alive: that agent wins;
//! - no agent left alive: draw;
//! - `max_ticks` reached: draw.

use std::time::Instant;

use log::{debug, info, warn};

use bboard_core::item::FLAME_ID_MASK;
use bboard_core::{State, AGENT_COUNT};

use crate::agent::Agent;
use crate::config::EnvConfig;
use crate::error::EnvError;
use crate::init::init_state;
use crate::metrics::StepMetrics;
use crate::step::step;
use crate::timed::{collect_moves, collect_moves_timed, AgentSlot};

/// Callback invoked after every completed tick.
pub type StepListener = Box<dyn Fn(&Environment)>;

/// Runs one game between four agents.
pub struct Environment {
    config: EnvConfig,
    state: State,
    slots: [AgentSlot; AGENT_COUNT],
    listener: Option<StepListener>,
    started: bool,
    finished: bool,
    draw: bool,
    winner: Option<usize>,
    metrics: StepMetrics,
}

impl Environment {
    /// Create a driver. Fails if `config` does not validate.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        config.validate()?;
        Ok(Self {
            config,
            state: State::new(),
            slots: [
                AgentSlot::Lost,
                AgentSlot::Lost,
                AgentSlot::Lost,
                AgentSlot::Lost,
            ],
            listener: None,
            started: false,
            finished: false,
            draw: false,
            winner: None,
            metrics: StepMetrics::default(),
        })
    }

    /// Start a new game with the given policies, indexed by agent id.
    ///
    /// The board is generated from the configured seed. Any game in
    /// progress is discarded.
    pub fn make_game(&mut self, agents: [Box<dyn Agent>; AGENT_COUNT]) {
        self.state = init_state(self.config.seed, self.config.agent_order);
        self.slots = agents.map(AgentSlot::new);
        self.started = true;
        self.finished = false;
        self.draw = false;
        self.winner = None;
        self.metrics = StepMetrics::default();
        info!(
            "game started: seed={:#x} max_ticks={} order={:?} competitive={:?}",
            self.config.seed, self.config.max_ticks, self.config.agent_order, self.config.competitive
        );
    }

    /// Play one tick.
    pub fn step(&mut self) -> Result<&StepMetrics, EnvError> {
        if !self.started {
            return Err(EnvError::NotStarted);
        }
        if self.finished {
            return Err(EnvError::GameOver);
        }

        let start = Instant::now();
        let batch = match self.config.competitive {
            Some(deadline) => collect_moves_timed(&self.state, &mut self.slots, deadline)?,
            None => collect_moves(&self.state, &mut self.slots),
        };
        for &id in &batch.timed_out {
            warn!("agent {id} missed its decision at tick {}, playing idle", self.state.time_step);
        }

        let alive_before = self.state.alive_agents;
        let flame_id_before = self.state.next_flame_id;
        let transition_start = Instant::now();
        step(&mut self.state, &batch.moves);
        let transition_us = transition_start.elapsed().as_micros() as u64;

        // Each explosion spawns exactly one flame.
        let explosions =
            (self.state.next_flame_id.wrapping_sub(flame_id_before) & FLAME_ID_MASK) as u32;
        self.metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            transition_us,
            timeouts: batch.timed_out.len() as u32,
            explosions,
            deaths: alive_before - self.state.alive_agents,
        };
        debug!(
            "tick {} moves={:?} alive={} bombs={} flames={}",
            self.state.time_step,
            batch.moves,
            self.state.alive_agents,
            self.state.bombs.len(),
            self.state.flames.len()
        );

        self.check_game_over();
        if let Some(listener) = &self.listener {
            listener(self);
        }
        Ok(&self.metrics)
    }

    /// Play up to `max_ticks` ticks, stopping early when the game ends.
    ///
    /// Returns the number of ticks played.
    pub fn run(&mut self, max_ticks: u32) -> Result<u32, EnvError> {
        let mut played = 0;
        while played < max_ticks && !self.is_done() {
            self.step()?;
            played += 1;
        }
        Ok(played)
    }

    fn check_game_over(&mut self) {
        match self.state.alive_agents {
            0 => {
                self.finished = true;
                self.draw = true;
            }
            1 => {
                self.finished = true;
                self.winner = self.state.living_agents().next();
            }
            _ if self.state.time_step >= self.config.max_ticks => {
                self.finished = true;
                self.draw = true;
            }
            _ => return,
        }
        match self.winner {
            Some(id) => info!("game over at tick {}: agent {id} wins", self.state.time_step),
            None => info!("game over at tick {}: draw", self.state.time_step),
        }
    }

    /// Current state of the game.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The configuration this driver was built with.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Metrics of the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    /// Whether the last tick ended the game.
    pub fn is_done(&self) -> bool {
        self.finished
    }

    /// Whether the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        self.draw
    }

    /// The winning agent, if the game was won.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Invoke `listener` after every tick.
    pub fn set_step_listener(&mut self, listener: impl Fn(&Environment) + 'static) {
        self.listener = Some(Box::new(listener));
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("config", &self.config)
            .field("tick", &self.state.time_step)
            .field("slots", &self.slots)
            .field("finished", &self.finished)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{IdleAgent, RandomAgent};
    use std::cell::Cell;
    use std::rc::Rc;

    fn idle_agents() -> [Box<dyn Agent>; AGENT_COUNT] {
        [
            Box::new(IdleAgent),
            Box::new(IdleAgent),
            Box::new(IdleAgent),
            Box::new(IdleAgent),
        ]
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = EnvConfig {
            max_ticks: 0,
            ..EnvConfig::default()
        };
        assert!(matches!(Environment::new(cfg), Err(EnvError::Config(_))));
    }

    #[test]
    fn step_before_make_game_fails() {
        let mut env = Environment::new(EnvConfig::default()).unwrap();
        assert!(matches!(env.step(), Err(EnvError::NotStarted)));
    }

    #[test]
    fn idle_game_ends_in_draw_at_tick_limit() {
        let cfg = EnvConfig {
            max_ticks: 25,
            ..EnvConfig::default()
        };
        let mut env = Environment::new(cfg).unwrap();
        env.make_game(idle_agents());
        let played = env.run(1000).unwrap();
        assert_eq!(played, 25);
        assert!(env.is_done());
        assert!(env.is_draw());
        assert_eq!(env.winner(), None);
        assert!(matches!(env.step(), Err(EnvError::GameOver)));
    }

    #[test]
    fn run_stops_after_requested_ticks() {
        let mut env = Environment::new(EnvConfig::default()).unwrap();
        env.make_game(idle_agents());
        assert_eq!(env.run(5).unwrap(), 5);
        assert_eq!(env.state().time_step, 5);
        assert!(!env.is_done());
    }

    #[test]
    fn last_survivor_wins() {
        let mut env = Environment::new(EnvConfig::default()).unwrap();
        env.make_game(idle_agents());
        env.state.kill_all(&[0, 1, 3]);
        env.step().unwrap();
        assert!(env.is_done());
        assert!(!env.is_draw());
        assert_eq!(env.winner(), Some(2));
    }

    #[test]
    fn listener_sees_every_tick() {
        let ticks = Rc::new(Cell::new(0));
        let seen = Rc::clone(&ticks);
        let mut env = Environment::new(EnvConfig::default()).unwrap();
        env.set_step_listener(move |e| seen.set(e.state().time_step));
        env.make_game(idle_agents());
        env.run(7).unwrap();
        assert_eq!(ticks.get(), 7);
    }

    #[test]
    fn random_games_terminate() {
        let cfg = EnvConfig {
            max_ticks: 300,
            ..EnvConfig::default()
        };
        let mut env = Environment::new(cfg).unwrap();
        env.make_game([
            Box::new(RandomAgent::new(1)),
            Box::new(RandomAgent::new(2)),
            Box::new(RandomAgent::new(3)),
            Box::new(RandomAgent::new(4)),
        ]);
        env.run(u32::MAX).unwrap();
        assert!(env.is_done());
        assert!(env.is_draw() || env.winner().is_some());
        assert_eq!(
            env.state().alive_agents as usize,
            env.state().living_agents().count()
        );
    }
}
