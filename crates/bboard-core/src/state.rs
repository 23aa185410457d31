//! The board state: unit of simulation, copying and fogging.
//!
//! [`State`] owns the encoded grid, the four [`AgentInfo`]s, the bomb and
//! flame queues and the tick counter. It is `Copy`; search code duplicates
//! it per node without touching the heap.
//!
//! Grid cells holding `BOMB` or a flame marker are markers only. The bomb
//! queue is authoritative for bombs and the flame queue for flame
//! lifetimes. A bomb planted under an agent shows the `BOMB` marker; the
//! agent's position is read from its `AgentInfo`.

use crate::agent::AgentInfo;
use crate::bomb::Bomb;
use crate::flame::Flame;
use crate::item::{self, FLAME_ID_MASK};
use crate::position::{Direction, Position};
use crate::queue::FixedQueue;
use crate::{AGENT_COUNT, BOARD_SIZE, BOMB_LIFETIME, MAX_BOMBS};

/// Complete state of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    /// Encoded cells, indexed `board[y][x]`.
    pub board: [[i32; BOARD_SIZE]; BOARD_SIZE],
    /// Number of completed ticks.
    pub time_step: u32,
    /// Number of agents with `dead == false`.
    pub alive_agents: u32,
    /// All agents and their attributes, indexed by agent id.
    pub agents: [AgentInfo; AGENT_COUNT],
    /// Live bombs, oldest first.
    pub bombs: FixedQueue<Bomb, MAX_BOMBS>,
    /// Live flames, oldest first.
    pub flames: FixedQueue<Flame, MAX_BOMBS>,
    /// Id handed to the next spawned flame.
    pub next_flame_id: u16,
}

impl State {
    /// An empty board with all agents alive and unplaced.
    pub fn new() -> Self {
        Self {
            board: [[item::PASSAGE; BOARD_SIZE]; BOARD_SIZE],
            time_step: 0,
            alive_agents: AGENT_COUNT as u32,
            agents: [AgentInfo::default(); AGENT_COUNT],
            bombs: FixedQueue::new(),
            flames: FixedQueue::new(),
            next_flame_id: 0,
        }
    }

    /// The cell at `pos`. Precondition: `pos` is on the board.
    #[inline]
    pub fn get(&self, pos: Position) -> i32 {
        self.board[pos.y as usize][pos.x as usize]
    }

    /// Overwrite the cell at `pos`. Precondition: `pos` is on the board.
    #[inline]
    pub fn set(&mut self, pos: Position, item: i32) {
        self.board[pos.y as usize][pos.x as usize] = item;
    }

    /// The cell at `(x, y)`.
    #[inline]
    pub fn item(&self, x: i32, y: i32) -> i32 {
        self.board[y as usize][x as usize]
    }

    /// Place an item at `(x, y)`.
    #[inline]
    pub fn put_item(&mut self, x: i32, y: i32, item: i32) {
        self.board[y as usize][x as usize] = item;
    }

    /// Logical index of the bomb at `pos` in the bomb queue.
    pub fn bomb_index_at(&self, pos: Position) -> Option<usize> {
        self.bombs.iter().position(|b| b.position() == pos)
    }

    /// Whether a bomb lies at `(x, y)`.
    pub fn has_bomb(&self, x: i32, y: i32) -> bool {
        self.bomb_index_at(Position::new(x, y)).is_some()
    }

    /// Id of the living agent standing at `pos`, if any.
    pub fn agent_at(&self, pos: Position) -> Option<usize> {
        self.agents
            .iter()
            .position(|a| !a.dead && a.position() == pos)
    }

    /// Plant a bomb for agent `id` at `(x, y)` with the agent's strength
    /// and the default fuse.
    ///
    /// No-op returning `false` if the agent has no bomb left, the queue is
    /// full or the cell already holds a bomb. With `set_item` the cell is
    /// marked `BOMB`.
    pub fn plant_bomb(&mut self, x: i32, y: i32, id: usize, set_item: bool) -> bool {
        let agent = self.agents[id];
        if !agent.can_plant() || self.bombs.is_full() || self.has_bomb(x, y) {
            return false;
        }
        self.bombs.push(Bomb::new(
            x as u32,
            y as u32,
            id as u32,
            agent.bomb_strength,
            BOMB_LIFETIME,
        ));
        self.agents[id].bomb_count += 1;
        if set_item {
            self.put_item(x, y, item::BOMB);
        }
        true
    }

    /// Explode the bomb at logical index `i` of the bomb queue.
    ///
    /// Removes it from the queue, returns the slot to its owner and spawns
    /// the blast. Bombs caught by the blast get a zero fuse; the caller is
    /// expected to keep exploding zero-fuse bombs until none remain.
    pub fn explode_bomb_at(&mut self, i: usize) {
        let bomb = self.bombs[i];
        self.bombs.remove_at(i);
        if let Some(owner) = self.agents.get_mut(bomb.owner() as usize) {
            owner.bomb_count = owner.bomb_count.saturating_sub(1);
        }
        self.spawn_flame(bomb.x() as i32, bomb.y() as i32, bomb.strength());
    }

    /// Spawn a blast at `(x, y)` reaching `strength` cells in each
    /// cardinal direction.
    ///
    /// Rigid cells stop the ray unburnt. Wood burns (keeping its powerup
    /// flag) and stops the ray. Everything else burns and the ray goes on;
    /// bombs on burnt cells get a zero fuse.
    pub fn spawn_flame(&mut self, x: i32, y: i32, strength: u32) {
        if self.flames.is_full() {
            self.extinguish_earliest_flame();
        }
        let id = self.next_flame_id;
        self.next_flame_id = (id + 1) & FLAME_ID_MASK;

        let origin = Position::new(x, y);
        self.flames.push(Flame::new(origin, strength, id));
        self.burn(origin, id);

        for dir in Direction::CARDINAL {
            let mut pos = origin;
            for _ in 0..strength {
                pos = pos.step(dir);
                if !pos.is_on_board() {
                    break;
                }
                let cell = self.get(pos);
                if cell == item::RIGID {
                    break;
                }
                if item::is_wood(cell) {
                    self.set(pos, item::flame(id, item::wood_powflag(cell)));
                    break;
                }
                self.burn(pos, id);
            }
        }
    }

    fn burn(&mut self, pos: Position, id: u16) {
        let cell = self.get(pos);
        let powflag = if item::is_flame(cell) {
            item::flame_powflag(cell)
        } else {
            0
        };
        if cell == item::BOMB {
            if let Some(i) = self.bomb_index_at(pos) {
                self.bombs[i].set_fuse(0);
            }
        }
        self.set(pos, item::flame(id, powflag));
    }

    /// Put out the flame at logical index `i` of the flame queue.
    ///
    /// Every cell still owned by the flame reverts to passage or to the
    /// powerup a burnt wood cell was hiding.
    pub fn extinguish_flame_at(&mut self, i: usize) {
        let flame = self.flames[i];
        self.flames.remove_at(i);

        self.clear_flame_cell(flame.position, flame.id);
        for dir in Direction::CARDINAL {
            let mut pos = flame.position;
            for _ in 0..flame.strength {
                pos = pos.step(dir);
                if !pos.is_on_board() {
                    break;
                }
                let cell = self.get(pos);
                if cell == item::RIGID || item::is_wood(cell) {
                    break;
                }
                self.clear_flame_cell(pos, flame.id);
            }
        }
    }

    /// Put out the flame closest to expiry. No-op without flames.
    pub fn extinguish_earliest_flame(&mut self) {
        let earliest = self
            .flames
            .iter()
            .enumerate()
            .min_by_key(|(_, f)| f.time_left)
            .map(|(i, _)| i);
        if let Some(i) = earliest {
            self.extinguish_flame_at(i);
        }
    }

    fn clear_flame_cell(&mut self, pos: Position, id: u16) {
        let cell = self.get(pos);
        if item::is_flame(cell) && item::flame_id(cell) == id {
            self.set(pos, item::flag_item(item::flame_powflag(cell)));
        }
    }

    /// Mark agent `id` dead. Idempotent: the alive count drops only once.
    pub fn kill(&mut self, id: usize) {
        let agent = &mut self.agents[id];
        if !agent.dead {
            agent.dead = true;
            self.alive_agents -= 1;
        }
    }

    /// Kill every listed agent.
    pub fn kill_all(&mut self, ids: &[usize]) {
        for &id in ids {
            self.kill(id);
        }
    }

    /// Place agent `id` at `(x, y)` and mark the cell.
    pub fn put_agent(&mut self, x: i32, y: i32, id: usize) {
        let agent = &mut self.agents[id];
        agent.x = x;
        agent.y = y;
        self.put_item(x, y, item::agent_item(id));
    }

    /// Place the given agent ids clockwise in the corners, starting top
    /// left: top-left, top-right, bottom-right, bottom-left.
    pub fn put_agents_in_corners(&mut self, a0: usize, a1: usize, a2: usize, a3: usize) {
        let far = BOARD_SIZE as i32 - 1;
        self.put_agent(0, 0, a0);
        self.put_agent(far, 0, a1);
        self.put_agent(far, far, a2);
        self.put_agent(0, far, a3);
    }

    /// Ids of the living agents.
    pub fn living_agents(&self) -> impl Iterator<Item = usize> + '_ {
        (0..AGENT_COUNT).filter(|&i| !self.agents[i].dead)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
