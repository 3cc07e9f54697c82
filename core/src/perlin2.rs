use crate::NoiseGenerator;
use crate::gradient::{GradientField, HashVariant};

// Single-octave 2D gradient noise over the hashed lattice.
// Carries no table and no seed: the lattice hash is the only source of randomness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Perlin2D {
    field: GradientField,
}

impl Perlin2D {
    pub const fn new(variant: HashVariant) -> Self {
        Self {
            field: GradientField::new(variant),
        }
    }

    pub fn field(&self) -> &GradientField {
        &self.field
    }

    // Dot product of the corner gradient with the offset from that corner to (x, y)
    #[inline]
    pub fn dot_grid_gradient(&self, ix: i32, iy: i32, x: f64, y: f64) -> f64 {
        self.corner_dot(ix, iy, x - ix as f64, y - iy as f64)
    }

    #[inline]
    fn corner_dot(&self, ix: i32, iy: i32, dx: f64, dy: f64) -> f64 {
        self.field.gradient_at(ix, iy).dot(dx, dy)
    }

    // Plain linear interpolation. The weight is used as-is, with no fade curve,
    // which leaves visible creases along cell edges.
    #[inline]
    pub fn interpolate(a0: f64, a1: f64, w: f64) -> f64 {
        a0 + (a1 - a0) * w
    }

    // Raw noise at (x, y), nominally in [-1, 1]
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        // Cell corners; floor (not truncation) so cells tile across zero
        let fx = x.floor();
        let fy = y.floor();

        // Lattice indices wrap modulo 2^32 like the hash, so far-out cells
        // reuse gradients instead of pinning to i32::MAX / i32::MIN
        let x0 = lattice_index(fx);
        let y0 = lattice_index(fy);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        // Position inside the cell, measured from the float corners
        let sx = x - fx;
        let sy = y - fy;

        let n0 = self.corner_dot(x0, y0, sx, sy);
        let n1 = self.corner_dot(x1, y0, sx - 1.0, sy);
        let ix0 = Self::interpolate(n0, n1, sx);

        let n0 = self.corner_dot(x0, y1, sx, sy - 1.0);
        let n1 = self.corner_dot(x1, y1, sx - 1.0, sy - 1.0);
        let ix1 = Self::interpolate(n0, n1, sx);

        Self::interpolate(ix0, ix1, sy)
    }
}

#[inline]
fn lattice_index(floor: f64) -> i32 {
    floor as i64 as i32
}

impl NoiseGenerator for Perlin2D {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.noise(x, y)
    }
}
