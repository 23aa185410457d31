//! Cell encoding for the board grid.
//!
//! Every cell is a single `i32`. Plain items use small values; wood and
//! flames use tagged ranges so that extra payload (the hidden powerup
//! flag, the owning flame id) fits into the same word:
//!
//! | Item      | Encoding                                   |
//! |-----------|--------------------------------------------|
//! | wood      | `WOOD + powflag`                           |
//! | flame     | `FLAMES + (flame_id << 3) + powflag`       |
//! | agent `i` | `AGENT0 + i`                               |

/// Empty, walkable cell.
pub const PASSAGE: i32 = 0;
/// Indestructible obstacle. Blocks movement and blasts.
pub const RIGID: i32 = 1;
/// Destructible wood. The low two bits carry the hidden powerup flag.
pub const WOOD: i32 = 2 << 8;
/// Marker for a cell holding a bomb. Bomb data lives in the bomb queue.
pub const BOMB: i32 = 3;
/// Marker for a burning cell. Carries a flame id and a powerup flag.
pub const FLAMES: i32 = 4 << 16;
/// Unknown cell in a fogged snapshot.
pub const FOG: i32 = 5;
/// Powerup: one more bomb slot.
pub const EXTRABOMB: i32 = 6;
/// Powerup: +1 blast strength.
pub const INCRRANGE: i32 = 7;
/// Powerup: kick ability.
pub const KICK: i32 = 8;
/// Placeholder agent, used by renderers for out-of-sight agents.
pub const AGENTDUMMY: i32 = 9;
/// Marker for agent 0. Agent `i` is `AGENT0 + i`.
pub const AGENT0: i32 = 1 << 24;
/// Marker for agent 1.
pub const AGENT1: i32 = AGENT0 + 1;
/// Marker for agent 2.
pub const AGENT2: i32 = AGENT0 + 2;
/// Marker for agent 3.
pub const AGENT3: i32 = AGENT0 + 3;

const FLAME_ID_BITS: u32 = 13;

/// Mask applied to flame ids before they are written into a cell.
pub const FLAME_ID_MASK: u16 = (1 << FLAME_ID_BITS) - 1;

/// True for wood cells, with or without a hidden powerup.
#[inline]
pub fn is_wood(x: i32) -> bool {
    (x >> 8) == 2
}

/// True for the three powerup items.
#[inline]
pub fn is_powerup(x: i32) -> bool {
    x > FOG && x < AGENTDUMMY
}

/// True for cells an agent can step onto without further checks.
#[inline]
pub fn is_walkable(x: i32) -> bool {
    is_powerup(x) || x == PASSAGE
}

/// True for burning cells.
#[inline]
pub fn is_flame(x: i32) -> bool {
    (x >> 16) == 4
}

/// True for agent occupancy markers.
#[inline]
pub fn is_agent(x: i32) -> bool {
    (x >> 24) == 1
}

/// Agent id stored in an agent marker.
#[inline]
pub fn agent_id(x: i32) -> usize {
    (x - AGENT0) as usize
}

/// Marker for the agent with the given id.
#[inline]
pub fn agent_item(id: usize) -> i32 {
    AGENT0 + id as i32
}

/// Flame id stored in a flame cell.
#[inline]
pub fn flame_id(x: i32) -> u16 {
    ((x & 0xFFFF) >> 3) as u16
}

/// Powerup flag carried by a flame cell.
#[inline]
pub fn flame_powflag(x: i32) -> i32 {
    x & 0b11
}

/// Powerup flag hidden under a wood cell.
#[inline]
pub fn wood_powflag(x: i32) -> i32 {
    x & 0b11
}

/// Encode a wood cell hiding the given powerup flag.
#[inline]
pub fn wood(powflag: i32) -> i32 {
    WOOD + (powflag & 0b11)
}

/// Encode a flame cell.
#[inline]
pub fn flame(id: u16, powflag: i32) -> i32 {
    FLAMES + (((id & FLAME_ID_MASK) as i32) << 3) + (powflag & 0b11)
}

/// The item revealed once a burnt wood cell stops burning.
///
/// Flag 0 means no powerup and yields [`PASSAGE`].
#[inline]
pub fn flag_item(powflag: i32) -> i32 {
    match powflag & 0b11 {
        1 => EXTRABOMB,
        2 => INCRRANGE,
        3 => KICK,
        _ => PASSAGE,
    }
}
