//! The per-tick transition function.
//!
//! [`step`] advances a [`State`] by exactly one tick given one [`Move`] per
//! agent. It is total, allocation-free and deterministic: the same state
//! and the same moves always produce the same next state.
//!
//! # Phase order
//!
//! 1. Flame decay: flames burn down; expired ones clear their cells.
//! 2. Bomb decay: fuses burn down; zero-fuse bombs explode, chaining
//!    through every bomb a blast reaches within the same tick.
//! 3. Movement: desired destinations are resolved to a consistent
//!    assignment and committed; entered powerups are collected.
//! 4. Planting: agents that chose [`Move::Bomb`] plant if they can.
//! 5. Kills: living agents standing on a flame die.
//! 6. The tick counter advances.
//!
//! The order is part of the game rules. An agent that steps out of a blast
//! in the tick it goes off survives; one that steps into fire dies.

use bboard_core::item;
use bboard_core::{Move, Position, State, AGENT_COUNT};

/// Advance `state` by one tick.
///
/// Dead agents' moves are ignored. Agents placed off the board (hidden by
/// fog) take no part in the tick.
pub fn step(state: &mut State, moves: &[Move; AGENT_COUNT]) {
    tick_flames(state);
    tick_bombs(state);
    resolve_movement(state, moves);
    plant_bombs(state, moves);
    kill_burning_agents(state);
    state.time_step += 1;
}

/// Phase 1. Every flame loses one tick; flames reaching zero go out.
pub fn tick_flames(state: &mut State) {
    let mut i = 0;
    while i < state.flames.len() {
        let flame = &mut state.flames[i];
        flame.time_left = flame.time_left.saturating_sub(1);
        if flame.time_left == 0 {
            state.extinguish_flame_at(i);
        } else {
            i += 1;
        }
    }
}

/// Phase 2. Every bomb loses one tick of fuse, then zero-fuse bombs
/// explode until none are left.
///
/// A blast zeroes the fuse of every bomb it reaches, so chains resolve in
/// this same loop. Exploded bombs leave the queue immediately and cannot
/// go off twice.
pub fn tick_bombs(state: &mut State) {
    for i in 0..state.bombs.len() {
        state.bombs[i].decrement_fuse();
    }
    loop {
        let Some(i) = state.bombs.iter().position(|b| b.fuse() == 0) else {
            break;
        };
        state.explode_bomb_at(i);
    }
}

/// Per-agent movement intent for one tick.
#[derive(Clone, Copy, Default)]
struct Intent {
    origin: Position,
    dest: Position,
    /// Wants to leave `origin` and was not statically blocked.
    moving: bool,
    /// Set by conflict resolution; a blocked agent stays at `origin`.
    blocked: bool,
    /// Where the bomb on `dest` goes if this agent kicks it.
    kick_to: Option<Position>,
}

impl Intent {
    #[inline]
    fn active(&self) -> bool {
        self.moving && !self.blocked
    }

    #[inline]
    fn final_pos(&self) -> Position {
        if self.active() {
            self.dest
        } else {
            self.origin
        }
    }
}

/// Phase 3. Resolve simultaneous movement and commit the result.
pub fn resolve_movement(state: &mut State, moves: &[Move; AGENT_COUNT]) {
    let mut intents = [Intent::default(); AGENT_COUNT];
    for (id, intent) in intents.iter_mut().enumerate() {
        *intent = desired_move(state, id, moves[id]);
    }

    resolve_conflicts(state, &mut intents);

    // Vacate first so that agents can follow each other into freed cells.
    for (id, intent) in intents.iter().enumerate() {
        if intent.active() && state.get(intent.origin) == item::agent_item(id) {
            state.set(intent.origin, item::PASSAGE);
        }
    }

    for intent in intents.iter().filter(|i| i.active()) {
        if let Some(to) = intent.kick_to {
            if let Some(k) = state.bomb_index_at(intent.dest) {
                state.bombs[k].set_position(to.x as u32, to.y as u32);
            }
            state.set(to, item::BOMB);
            state.set(intent.dest, item::PASSAGE);
        }
    }

    for (id, intent) in intents.iter().enumerate() {
        if !intent.active() {
            continue;
        }
        let dest = intent.dest;
        let cell = state.get(dest);
        let agent = &mut state.agents[id];
        if item::is_powerup(cell) {
            agent.collect(cell);
        }
        agent.x = dest.x;
        agent.y = dest.y;
        // Fire keeps its marker; the agent dies in the kill phase.
        if !item::is_flame(cell) {
            state.set(dest, item::agent_item(id));
        }
    }
}

/// Destination an agent asks for, with static blocking applied.
fn desired_move(state: &State, id: usize, mv: Move) -> Intent {
    let agent = &state.agents[id];
    let origin = agent.position();
    let stay = Intent {
        origin,
        dest: origin,
        ..Intent::default()
    };
    if agent.dead || !origin.is_on_board() {
        return stay;
    }

    let dir = mv.direction();
    let dest = origin.step(dir);
    if dest == origin || !dest.is_on_board() {
        return stay;
    }

    let cell = state.get(dest);
    if cell == item::BOMB {
        if !agent.can_kick {
            return stay;
        }
        let to = dest.step(dir);
        if !to.is_on_board() {
            return stay;
        }
        // An agent on the landing cell must leave this tick; checked
        // during conflict resolution.
        let landing = state.get(to);
        if landing != item::PASSAGE && !item::is_agent(landing) {
            return stay;
        }
        return Intent {
            origin,
            dest,
            moving: true,
            blocked: false,
            kick_to: Some(to),
        };
    }

    if item::is_walkable(cell) || item::is_flame(cell) || item::is_agent(cell) {
        Intent {
            origin,
            dest,
            moving: true,
            ..Intent::default()
        }
    } else {
        stay
    }
}

/// Why an active agent cannot make its move this pass.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Obstruction {
    /// Caused by an agent whose final cell is already settled.
    Firm,
    /// Caused by an agent whose own move may still change.
    Tentative,
}

/// Roll agents back until the remaining moves are mutually consistent.
///
/// Each pass starts from the agents rolled back so far, awards every
/// contested cell (and every contested kick landing) to the lowest active
/// id, then looks for active agents that still cannot move:
/// - another agent ends the tick on its destination;
/// - another agent is swapping cells with it head-on;
/// - its kicked bomb would land where an agent ends the tick.
///
/// Obstructions caused by settled agents are rolled back first. Only when
/// none remain are agents rolled back for conflicts with unsettled ones.
/// Contest losers are not rolled back, so losing to an agent that is
/// rolled back later frees the cell for the next contender. Every pass
/// rolls back at least one agent, so the loop settles within
/// `AGENT_COUNT + 1` passes.
fn resolve_conflicts(state: &State, intents: &mut [Intent; AGENT_COUNT]) {
    let mut held = [false; AGENT_COUNT];
    for _ in 0..=AGENT_COUNT {
        for (intent, &h) in intents.iter_mut().zip(held.iter()) {
            intent.blocked = h;
        }
        award_contested_cells(intents);

        let mut firm = [false; AGENT_COUNT];
        let mut tentative = [false; AGENT_COUNT];
        for i in 0..AGENT_COUNT {
            if !intents[i].active() {
                continue;
            }
            match obstruction(state, intents, &held, i) {
                Some(Obstruction::Firm) => firm[i] = true,
                Some(Obstruction::Tentative) => tentative[i] = true,
                None => {}
            }
        }

        let rollback = if firm.contains(&true) { firm } else { tentative };
        if !rollback.contains(&true) {
            return;
        }
        for (h, r) in held.iter_mut().zip(rollback) {
            *h |= r;
        }
    }
}

/// Block every active agent that loses a contested destination or kick
/// landing to a lower id.
fn award_contested_cells(intents: &mut [Intent; AGENT_COUNT]) {
    for i in 0..AGENT_COUNT {
        if !intents[i].active() {
            continue;
        }
        let dest = intents[i].dest;
        if (0..i).any(|j| intents[j].active() && intents[j].dest == dest) {
            intents[i].blocked = true;
        }
    }
    for i in 0..AGENT_COUNT {
        let Some(to) = intents[i].kick_to else {
            continue;
        };
        let taken = (0..i).any(|j| intents[j].active() && intents[j].kick_to == Some(to));
        if intents[i].active() && taken {
            intents[i].blocked = true;
        }
    }
}

fn obstruction(
    state: &State,
    intents: &[Intent; AGENT_COUNT],
    held: &[bool; AGENT_COUNT],
    i: usize,
) -> Option<Obstruction> {
    let me = intents[i];
    let mut found = None;
    for (j, other) in intents.iter().enumerate() {
        if j == i || state.agents[j].dead {
            continue;
        }
        if other.moving && other.origin == me.dest && other.dest == me.origin {
            return Some(Obstruction::Firm);
        }
        let other_final = other.final_pos();
        if other_final != me.dest && me.kick_to != Some(other_final) {
            continue;
        }
        if !other.moving || held[j] {
            return Some(Obstruction::Firm);
        }
        found = Some(Obstruction::Tentative);
    }
    found
}

/// Phase 4. Plant bombs for agents that asked for one.
///
/// Planting is a no-op for agents at their bomb limit, on a cell already
/// holding a bomb, or standing in fire.
pub fn plant_bombs(state: &mut State, moves: &[Move; AGENT_COUNT]) {
    for (id, &mv) in moves.iter().enumerate() {
        let agent = state.agents[id];
        if agent.dead || mv != Move::Bomb || !agent.position().is_on_board() {
            continue;
        }
        if item::is_flame(state.item(agent.x, agent.y)) {
            continue;
        }
        state.plant_bomb(agent.x, agent.y, id, true);
    }
}

/// Phase 5. Kill every living agent standing on a flame.
pub fn kill_burning_agents(state: &mut State) {
    for id in 0..AGENT_COUNT {
        let agent = state.agents[id];
        if agent.dead || !agent.position().is_on_board() {
            continue;
        }
        // The flame has already overwritten the agent's marker.
        if item::is_flame(state.get(agent.position())) {
            state.kill(id);
        }
    }
}
