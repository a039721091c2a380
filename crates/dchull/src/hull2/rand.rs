//! Random 2D point clouds (replay tokens, a few shapes).
//!
//! Purpose
//! - Deterministic inputs for benches, property tests, and the CLI `sample`
//!   command. A draw is fully determined by `(CloudCfg, ReplayToken)`.
//!
//! Shapes
//! - `Disk`/`Square`: uniform fill; the hull is a small fraction of the input.
//! - `Circle`: every point on the hull (worst case for output size).
//! - `Grid`: integer lattice points, so x-ties, duplicates and collinear runs
//!   are common.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of the sampled cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Disk,
    Square,
    Circle,
    /// Lattice points in `[-half, half]²`.
    Grid { half: i32 },
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Radius (disk, circle) or half side (square). Grid points are scaled by it too.
    pub scale: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            shape: CloudShape::Disk,
            scale: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over (seed, index).
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let s = cfg.scale;
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Disk => {
                let r = s * rng.gen::<f64>().sqrt();
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Vector2::new(r * th.cos(), r * th.sin())
            }
            CloudShape::Square => Vector2::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s)),
            CloudShape::Circle => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Vector2::new(s * th.cos(), s * th.sin())
            }
            CloudShape::Grid { half } => {
                let h = half.max(0);
                Vector2::new(
                    s * f64::from(rng.gen_range(-h..=h)),
                    s * f64::from(rng.gen_range(-h..=h)),
                )
            }
        })
        .collect()
}
