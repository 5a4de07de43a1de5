//! Mountain wall formations
//!
//! Stamps irregular rock blobs onto the terrain map: rejection-sampled
//! centers kept off the map core, rotated and elongated ellipses with a
//! perturbed edge, and a density falloff that leaves dense interiors and
//! eroded rims. Runs after base terrain and never overwrites water.

use crate::edge_noise::EdgeNoise;
use crate::rng::RandomSource;
use crate::tilemap::Tilemap;
use crate::tiles::TileKind;

/// Tunables for mountain placement. Defaults match the shipped map balance.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MountainParams {
    /// Ranges stamped per map, inclusive bounds
    pub count_min: i32,
    pub count_max: i32,
    /// Inset of the center sampling band from the map edge
    pub center_margin: i32,
    /// Half-width of the square core exclusion zone around the map center
    pub core_exclusion: i32,
    /// Center sampling attempts before a range is skipped
    pub placement_attempts: u32,
    /// No wall is ever written within this many tiles of the map edge
    pub edge_margin: i32,
    /// Base blob radius in tiles, inclusive bounds
    pub radius_min: i32,
    pub radius_max: i32,
    /// Stretch factor along the rotated axis, `[min, max)`
    pub elongation_min: f64,
    pub elongation_max: f64,
    /// Stamped bounding box half-width as a multiple of the base radius
    pub footprint_scale: i32,
    /// Scale applied to the density before the per-cell fill draw
    pub fill_probability: f64,
}

impl Default for MountainParams {
    fn default() -> Self {
        Self {
            count_min: 5,
            count_max: 9,
            center_margin: 15,
            core_exclusion: 20,
            placement_attempts: 30,
            edge_margin: 5,
            radius_min: 8,
            radius_max: 16,
            elongation_min: 0.5,
            elongation_max: 2.0,
            footprint_scale: 2,
            fill_probability: 0.85,
        }
    }
}

/// Stamp mountain ranges onto the map in place.
///
/// Draws a range count, rejection-samples a center per range outside the
/// core exclusion zone, then stamps a noise-perturbed elliptical blob of
/// [`TileKind::Wall`] around each accepted center. Water is never
/// overwritten and nothing lands within `edge_margin` of the map edge.
///
/// A range whose center cannot be placed within the attempt budget is
/// silently skipped; that is the expected outcome on maps too small for the
/// sampling band, not an error. With a seeded source the result is fully
/// reproducible. Maps are expected to be at least 40x40; below
/// `2 * center_margin` per axis the call is a no-op.
pub fn generate_mountains(
    map: &mut Tilemap<TileKind>,
    params: &MountainParams,
    edge_noise: &impl EdgeNoise,
    rng: &mut impl RandomSource,
) {
    let width = map.width as i32;
    let height = map.height as i32;

    // The sampling band [center_margin, dim - center_margin) must be non-empty.
    if width <= params.center_margin * 2 || height <= params.center_margin * 2 {
        return;
    }

    let count = rng.uniform_range(params.count_min, params.count_max + 1);
    let core_x = width / 2;
    let core_y = height / 2;

    for _ in 0..count {
        let Some((center_x, center_y)) = sample_center(width, height, core_x, core_y, params, rng)
        else {
            continue;
        };

        let radius = rng.uniform_range(params.radius_min, params.radius_max + 1);
        let elongation = rng.uniform_between(params.elongation_min, params.elongation_max);
        let rotation = rng.uniform() * std::f64::consts::PI;

        stamp_range(
            map, params, edge_noise, rng, center_x, center_y, radius, elongation, rotation,
        );
    }
}

/// Rejection-sample a range center inside the sampling band but outside the
/// core exclusion zone. `None` after the attempt budget is exhausted.
fn sample_center(
    width: i32,
    height: i32,
    core_x: i32,
    core_y: i32,
    params: &MountainParams,
    rng: &mut impl RandomSource,
) -> Option<(i32, i32)> {
    for _ in 0..params.placement_attempts {
        let x = rng.uniform_range(params.center_margin, width - params.center_margin);
        let y = rng.uniform_range(params.center_margin, height - params.center_margin);

        // Reject only when BOTH axes are close; a candidate beside the core
        // along a single axis is fine.
        if (x - core_x).abs() < params.core_exclusion
            && (y - core_y).abs() < params.core_exclusion
        {
            continue;
        }
        return Some((x, y));
    }
    None
}

/// Stamp one blob of wall tiles around an accepted center.
#[allow(clippy::too_many_arguments)]
fn stamp_range(
    map: &mut Tilemap<TileKind>,
    params: &MountainParams,
    edge_noise: &impl EdgeNoise,
    rng: &mut impl RandomSource,
    center_x: i32,
    center_y: i32,
    radius: i32,
    elongation: f64,
    rotation: f64,
) {
    let width = map.width as i32;
    let height = map.height as i32;
    let reach = radius * params.footprint_scale;
    let (sin_r, cos_r) = rotation.sin_cos();

    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let wx = center_x + dx;
            let wy = center_y + dy;

            if wx < params.edge_margin
                || wx >= width - params.edge_margin
                || wy < params.edge_margin
                || wy >= height - params.edge_margin
            {
                continue;
            }
            if *map.get(wx as usize, wy as usize) == TileKind::Water {
                continue;
            }

            // Rotate the offset, then scale each axis independently so the
            // circle becomes a rotated ellipse in normalized space.
            let fdx = dx as f64;
            let fdy = dy as f64;
            let rot_x = fdx * cos_r - fdy * sin_r;
            let rot_y = fdx * sin_r + fdy * cos_r;
            let norm_x = rot_x / radius as f64;
            let norm_y = rot_y / (radius as f64 * elongation);
            let dist = (norm_x * norm_x + norm_y * norm_y).sqrt();

            // The perturbation is a function of the WORLD coordinate, so
            // overlapping ranges see the same field and blend continuously.
            let threshold = 1.0 + edge_noise.sample(wx as f64, wy as f64);
            if dist < threshold {
                let density = 1.0 - dist / threshold;
                if rng.uniform() < density * params.fill_probability {
                    map.set(wx as usize, wy as usize, TileKind::Wall);
                }
            }
        }
    }
}
