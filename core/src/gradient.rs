use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

// Odd multipliers used by the lattice hash
const MUL_A: u32 = 3_284_157_443;
const MUL_B: u32 = 1_911_520_717;
const MUL_C: u32 = 2_048_419_325;

// The legacy hash was written against a 256-bit word with a half-width rotation,
// but executed with 32-bit shift operators. Shift amounts wrap modulo 32, so
// both halves of the "rotation" shift by zero.
const LEGACY_WORD_BITS: u32 = 8 * 32;
const LEGACY_ROTATION: u32 = LEGACY_WORD_BITS / 2;

// Maps the full u32 hash range onto [0, 2π]
const HASH_TO_ANGLE: f64 = PI / 2_147_483_647.0;

// Which rotation the lattice hash performs between multiply rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashVariant {
    // Bit-for-bit compatible with the original terrain: the rotation collapses to identity
    #[default]
    Legacy,
    // Proper 32-bit half-width rotation (rotate by 16)
    WidthMatched,
}

impl HashVariant {
    #[inline]
    fn rotate(self, v: u32) -> u32 {
        match self {
            HashVariant::Legacy => {
                v.wrapping_shl(LEGACY_ROTATION)
                    | v.wrapping_shr(LEGACY_WORD_BITS - LEGACY_ROTATION)
            }
            HashVariant::WidthMatched => v.rotate_left(u32::BITS / 2),
        }
    }
}

// Unit gradient vector attached to one lattice corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub gx: f64,
    pub gy: f64,
}

impl Gradient {
    #[inline]
    pub fn dot(self, dx: f64, dy: f64) -> f64 {
        dx * self.gx + dy * self.gy
    }

    pub fn length(self) -> f64 {
        self.gx.hypot(self.gy)
    }
}

// Stateless source of gradients: every call recomputes from (ix, iy)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradientField {
    variant: HashVariant,
}

impl GradientField {
    pub const fn new(variant: HashVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> HashVariant {
        self.variant
    }

    // Mix the two lattice integers into one 32-bit hash (all arithmetic wraps)
    #[inline]
    pub fn hash(&self, ix: i32, iy: i32) -> u32 {
        let mut a = ix as u32;
        let mut b = iy as u32;
        a = a.wrapping_mul(MUL_A);
        b ^= self.variant.rotate(a);
        b = b.wrapping_mul(MUL_B);
        a ^= self.variant.rotate(b);
        a.wrapping_mul(MUL_C)
    }

    #[inline]
    pub fn gradient_at(&self, ix: i32, iy: i32) -> Gradient {
        let angle = self.hash(ix, iy) as f64 * HASH_TO_ANGLE;
        let (gy, gx) = angle.sin_cos();
        Gradient { gx, gy }
    }
}
