//! Packed bomb record.
//!
//! A bomb is a single `u32` so the bomb queue stays tiny and trivially
//! copyable. The layout is canonical: state hashes and equality depend on
//! it, so every mutator rewrites only its own bit-field.
//!
//! | Bits      | Field     |
//! |-----------|-----------|
//! | `[0, 4)`  | x         |
//! | `[4, 8)`  | y         |
//! | `[8, 12)` | owner id  |
//! | `[12,16)` | strength  |
//! | `[16,32)` | fuse      |

use std::fmt;

use crate::position::Position;

const X_MASK: u32 = 0xF;
const Y_MASK: u32 = 0xF0;
const OWNER_MASK: u32 = 0xF00;
const STRENGTH_MASK: u32 = 0xF000;
const FUSE_MASK: u32 = 0xFFFF_0000;

const Y_SHIFT: u32 = 4;
const OWNER_SHIFT: u32 = 8;
const STRENGTH_SHIFT: u32 = 12;
const FUSE_SHIFT: u32 = 16;

/// Largest fuse value the record can hold.
pub const MAX_FUSE: u32 = FUSE_MASK >> FUSE_SHIFT;

/// A bomb on the board, bit-packed into one word.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Bomb(u32);

impl Bomb {
    /// Pack a bomb. Every field is truncated to its bit width.
    pub fn new(x: u32, y: u32, owner: u32, strength: u32, fuse: u32) -> Self {
        let mut bomb = Bomb(0);
        bomb.set_position(x, y);
        bomb.set_owner(owner);
        bomb.set_strength(strength);
        bomb.set_fuse(fuse);
        bomb
    }

    /// Rebuild a bomb from its raw word.
    pub const fn from_bits(bits: u32) -> Self {
        Bomb(bits)
    }

    /// The raw packed word.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Column of the bomb.
    #[inline]
    pub fn x(self) -> u32 {
        self.0 & X_MASK
    }

    /// Row of the bomb.
    #[inline]
    pub fn y(self) -> u32 {
        (self.0 & Y_MASK) >> Y_SHIFT
    }

    /// Position of the bomb.
    #[inline]
    pub fn position(self) -> Position {
        Position::new(self.x() as i32, self.y() as i32)
    }

    /// Id of the agent that planted the bomb.
    #[inline]
    pub fn owner(self) -> u32 {
        (self.0 & OWNER_MASK) >> OWNER_SHIFT
    }

    /// Blast strength.
    #[inline]
    pub fn strength(self) -> u32 {
        (self.0 & STRENGTH_MASK) >> STRENGTH_SHIFT
    }

    /// Remaining ticks until the explosion.
    #[inline]
    pub fn fuse(self) -> u32 {
        (self.0 & FUSE_MASK) >> FUSE_SHIFT
    }

    /// Rewrite the position bits.
    #[inline]
    pub fn set_position(&mut self, x: u32, y: u32) {
        self.0 = (self.0 & !(X_MASK | Y_MASK)) | (x & 0xF) | ((y & 0xF) << Y_SHIFT);
    }

    /// Rewrite the owner bits.
    #[inline]
    pub fn set_owner(&mut self, owner: u32) {
        self.0 = (self.0 & !OWNER_MASK) | ((owner & 0xF) << OWNER_SHIFT);
    }

    /// Rewrite the strength bits.
    #[inline]
    pub fn set_strength(&mut self, strength: u32) {
        self.0 = (self.0 & !STRENGTH_MASK) | ((strength & 0xF) << STRENGTH_SHIFT);
    }

    /// Rewrite the fuse bits.
    #[inline]
    pub fn set_fuse(&mut self, fuse: u32) {
        self.0 = (self.0 & !FUSE_MASK) | ((fuse & MAX_FUSE) << FUSE_SHIFT);
    }

    /// Burn one tick of fuse. A zero fuse stays at zero.
    #[inline]
    pub fn decrement_fuse(&mut self) {
        if self.fuse() > 0 {
            self.0 -= 1 << FUSE_SHIFT;
        }
    }
}

impl fmt::Debug for Bomb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bomb")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("owner", &self.owner())
            .field("strength", &self.strength())
            .field("fuse", &self.fuse())
            .finish()
    }
}
