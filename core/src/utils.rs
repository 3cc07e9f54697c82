use crate::NoiseGenerator;
use crate::classify::Multipliers;

// 2D height map: row-major Vec<Vec<f32>>, access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// Sample raw noise for every pixel of a width×height grid,
// scaling pixel coordinates the same way the classifier does
pub fn sample_grid<N: NoiseGenerator>(
    noise: &N,
    width: usize,
    height: usize,
    multipliers: Multipliers,
) -> HeightMap2D {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| noise.get2(x as f64 * multipliers.mx, y as f64 * multipliers.my) as f32)
                .collect()
        })
        .collect()
}

// flatten a 2D height map (row-major) into a single Vec<f32>
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Stretch a flat height buffer to 0..=255 grey levels.
// A constant field maps to mid-grey.
pub fn to_grayscale(flat: &[f32]) -> Vec<u8> {
    let (min, max) = flat
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    flat.iter()
        .map(|&v| {
            let norm = if range.abs() < f32::EPSILON {
                0.5
            } else {
                (v - min) / range
            };
            (norm * 255.0).round() as u8
        })
        .collect()
}
