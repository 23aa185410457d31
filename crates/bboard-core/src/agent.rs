//! Observable per-agent attributes.
//!
//! Kept apart from agent behaviour so a state can be copied or fogged
//! without carrying any decision logic along. Hiding an agent from an
//! observer is a matter of not exposing its `AgentInfo`.

use crate::position::Position;
use crate::{BOMB_DEFAULT_STRENGTH, MAX_BOMBS_PER_AGENT, MAX_BOMB_STRENGTH};

/// Public attributes of one agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AgentInfo {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Bombs of this agent currently on the board.
    pub bomb_count: u32,
    /// How many bombs the agent may have on the board at once.
    pub max_bomb_count: u32,
    /// Blast strength of newly planted bombs.
    pub bomb_strength: u32,
    /// Whether the agent can kick bombs.
    pub can_kick: bool,
    /// Whether the agent is out of the game.
    pub dead: bool,
}

impl AgentInfo {
    /// Current position.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Whether the agent may plant another bomb.
    #[inline]
    pub fn can_plant(&self) -> bool {
        self.bomb_count < self.max_bomb_count
    }

    /// Apply the effect of picking up a powerup item.
    ///
    /// Capacity and strength saturate at the widths the bomb record can
    /// encode. Non-powerup items are ignored.
    pub fn collect(&mut self, item: i32) {
        match item {
            crate::item::EXTRABOMB => {
                self.max_bomb_count = (self.max_bomb_count + 1).min(MAX_BOMBS_PER_AGENT);
            }
            crate::item::INCRRANGE => {
                self.bomb_strength = (self.bomb_strength + 1).min(MAX_BOMB_STRENGTH);
            }
            crate::item::KICK => self.can_kick = true,
            _ => {}
        }
    }
}

impl Default for AgentInfo {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            bomb_count: 0,
            max_bomb_count: 1,
            bomb_strength: BOMB_DEFAULT_STRENGTH,
            can_kick: false,
            dead: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item;

    #[test]
    fn defaults() {
        let a = AgentInfo::default();
        assert_eq!(a.max_bomb_count, 1);
        assert_eq!(a.bomb_strength, BOMB_DEFAULT_STRENGTH);
        assert!(!a.can_kick);
        assert!(!a.dead);
        assert!(a.can_plant());
    }

    #[test]
    fn powerups_saturate() {
        let mut a = AgentInfo::default();
        for _ in 0..10 {
            a.collect(item::EXTRABOMB);
            a.collect(item::INCRRANGE);
        }
        assert_eq!(a.max_bomb_count, MAX_BOMBS_PER_AGENT);
        assert_eq!(a.bomb_strength, BOMB_DEFAULT_STRENGTH + 10);
        a.collect(item::KICK);
        assert!(a.can_kick);
    }

    #[test]
    fn non_powerup_is_ignored() {
        let mut a = AgentInfo::default();
        a.collect(item::RIGID);
        assert_eq!(a, AgentInfo::default());
    }
}
