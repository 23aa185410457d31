//! Full match between four random agents.
//!
//! Demonstrates: config → Environment → make_game → step until done,
//! rendering the board every 50 ticks.

use bboard_engine::{EnvConfig, Environment, RandomAgent};

fn main() {
    println!("=== bboard random match ===\n");

    let config = EnvConfig {
        seed: 42,
        max_ticks: 400,
        ..EnvConfig::default()
    };
    let mut env = Environment::new(config).unwrap();
    env.set_step_listener(|e| {
        let tick = e.state().time_step;
        if tick % 50 == 0 {
            println!("{}", e.state());
            println!("  step time {}μs\n", e.last_metrics().total_us);
        }
    });
    env.make_game([
        Box::new(RandomAgent::new(1)),
        Box::new(RandomAgent::new(2)),
        Box::new(RandomAgent::new(3)),
        Box::new(RandomAgent::new(4)),
    ]);

    let ticks = env.run(u32::MAX).unwrap();
    println!("{}", env.state());
    match env.winner() {
        Some(id) => println!("agent {id} wins after {ticks} ticks"),
        None => println!("draw after {ticks} ticks"),
    }
}
