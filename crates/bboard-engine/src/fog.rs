//! Partial observability.
//!
//! [`fog_state`] produces what one agent may see of a state: every cell
//! outside a square window around the viewer becomes [`FOG`](item::FOG),
//! bombs and other agents outside the window disappear. The result is an
//! ordinary [`State`] and can be stepped for look-ahead search.

use bboard_core::item;
use bboard_core::{AgentInfo, Position, State, AGENT_COUNT, BOARD_SIZE};

/// Position given to agents hidden by fog. Off the board, so the
/// transition function leaves them alone.
pub const HIDDEN: Position = Position::new(-1, -1);

#[inline]
fn in_view(center: Position, radius: i32, pos: Position) -> bool {
    (pos.x - center.x).abs() <= radius && (pos.y - center.y).abs() <= radius
}

/// The part of `state` visible to agent `viewer` with view `radius`.
///
/// A dead viewer keeps its last window. Hidden agents keep their `dead`
/// flag; everything else about them resets to defaults at
/// [`HIDDEN`]. Flames stay in the queue so lifetimes remain consistent.
pub fn fog_state(state: &State, viewer: usize, radius: i32) -> State {
    let mut fogged = *state;
    let center = state.agents[viewer].position();

    for y in 0..BOARD_SIZE as i32 {
        for x in 0..BOARD_SIZE as i32 {
            if !in_view(center, radius, Position::new(x, y)) {
                fogged.put_item(x, y, item::FOG);
            }
        }
    }

    for id in 0..AGENT_COUNT {
        if id == viewer {
            continue;
        }
        let info = state.agents[id];
        if !in_view(center, radius, info.position()) {
            fogged.agents[id] = AgentInfo {
                x: HIDDEN.x,
                y: HIDDEN.y,
                dead: info.dead,
                ..AgentInfo::default()
            };
        }
    }

    let mut i = 0;
    while i < fogged.bombs.len() {
        if in_view(center, radius, fogged.bombs[i].position()) {
            i += 1;
        } else {
            fogged.bombs.remove_at(i);
        }
    }

    fogged
}
