//! Flame records.

use crate::position::Position;
use crate::FLAME_LIFETIME;

/// The fire spawned by one blast.
///
/// Every cell the blast reached carries a flame marker with this record's
/// `id`. When `time_left` hits zero the engine walks the blast cross again
/// from `position` with `strength` and clears the cells that still carry
/// the id; cells taken over by a newer overlapping blast are left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Flame {
    /// Origin of the blast.
    pub position: Position,
    /// Ticks until the flame goes out.
    pub time_left: u32,
    /// Reach of the blast, inherited from the bomb.
    pub strength: u32,
    /// Id written into the owned cell markers (13 bits).
    pub id: u16,
}

impl Flame {
    /// A fresh flame with the default lifetime.
    pub fn new(position: Position, strength: u32, id: u16) -> Self {
        Self {
            position,
            time_left: FLAME_LIFETIME,
            strength,
            id,
        }
    }
}

impl Default for Flame {
    fn default() -> Self {
        Self::new(Position::default(), 0, 0)
    }
}
