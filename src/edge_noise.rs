//! Edge perturbation for mountain blobs
//!
//! A mountain's acceptance threshold is `1 + noise(wx, wy)` sampled at world
//! coordinates, which roughens the blob outline and lets overlapping ranges
//! blend continuously. The perturbation is pluggable so the sinusoid formula
//! can be swapped for coherent noise without touching placement logic.

use noise::{NoiseFn, Perlin, Seedable};

/// Positional perturbation applied to a blob's acceptance threshold.
///
/// Implementations must be pure functions of the world coordinate: the same
/// `(wx, wy)` always yields the same value, so overlapping mountains see a
/// consistent field.
pub trait EdgeNoise {
    /// Perturbation value at a world coordinate. Expected range is roughly
    /// `[-0.5, 0.5]`; the threshold `1 + value` must stay positive.
    fn sample(&self, wx: f64, wy: f64) -> f64;
}

/// The classic two-sinusoid perturbation.
///
/// Cheap, seed-independent, and smooth at the tile scale. This is the default
/// used by map generation.
#[derive(Clone, Copy, Debug)]
pub struct SinusoidNoise {
    pub freq_a: (f64, f64),
    pub amp_a: f64,
    pub freq_b: (f64, f64),
    pub amp_b: f64,
}

impl Default for SinusoidNoise {
    fn default() -> Self {
        Self {
            freq_a: (0.3, 0.2),
            amp_a: 0.3,
            freq_b: (0.2, -0.3),
            amp_b: 0.2,
        }
    }
}

impl EdgeNoise for SinusoidNoise {
    fn sample(&self, wx: f64, wy: f64) -> f64 {
        (wx * self.freq_a.0 + wy * self.freq_a.1).sin() * self.amp_a
            + (wx * self.freq_b.0 + wy * self.freq_b.1).cos() * self.amp_b
    }
}

/// Coherent Perlin perturbation, for maps that want less periodic outlines.
pub struct PerlinEdgeNoise {
    perlin: Perlin,
    /// Sampling frequency (higher = busier outlines)
    pub frequency: f64,
    /// Output amplitude
    pub amplitude: f64,
}

impl PerlinEdgeNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            perlin: Perlin::new(1).set_seed(seed as u32),
            frequency: 0.15,
            amplitude: 0.4,
        }
    }
}

impl EdgeNoise for PerlinEdgeNoise {
    fn sample(&self, wx: f64, wy: f64) -> f64 {
        // Perlin output is in [-1, 1]; scale into threshold-safe range.
        self.perlin.get([wx * self.frequency, wy * self.frequency]) * self.amplitude
    }
}

/// Constant perturbation. `Flat(0.0)` gives exact elliptical blobs, which the
/// tests lean on.
#[derive(Clone, Copy, Debug, Default)]
pub struct Flat(pub f64);

impl EdgeNoise for Flat {
    fn sample(&self, _wx: f64, _wy: f64) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinusoid_matches_reference_formula() {
        let noise = SinusoidNoise::default();
        for &(wx, wy) in &[(0.0f64, 0.0), (30.0, 70.0), (12.5, 99.0)] {
            let expected = (wx * 0.3 + wy * 0.2).sin() * 0.3 + (wx * 0.2 - wy * 0.3).cos() * 0.2;
            assert!((noise.sample(wx, wy) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sinusoid_keeps_threshold_positive() {
        let noise = SinusoidNoise::default();
        for y in 0..200 {
            for x in 0..200 {
                let v = noise.sample(x as f64, y as f64);
                assert!(v.abs() <= 0.5 + 1e-12);
                assert!(1.0 + v > 0.0);
            }
        }
    }

    #[test]
    fn test_perlin_is_deterministic_per_seed() {
        let a = PerlinEdgeNoise::new(42);
        let b = PerlinEdgeNoise::new(42);
        assert_eq!(a.sample(10.0, 20.0).to_bits(), b.sample(10.0, 20.0).to_bits());
    }
}
