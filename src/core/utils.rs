use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Reproducible random source for a battle. Every roll in the engine goes
/// through a `FnMut() -> f64` yielding values in `[0, 1)`.
pub fn seeded_rng(seed: u64) -> impl FnMut() -> f64 {
    let mut inner = ChaCha8Rng::seed_from_u64(seed);
    move || inner.gen::<f64>()
}

pub fn chance(rng: &mut dyn FnMut() -> f64, probability: f64) -> bool {
    rng() < probability
}

/// Uniform integer in `lo..=hi`.
pub fn roll_range(rng: &mut dyn FnMut() -> f64, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo + 1) as f64;
    let offset = (rng() * span).floor() as i32;
    lo + offset.clamp(0, hi - lo)
}

/// Uniform float in `[lo, hi]`.
pub fn roll_uniform(rng: &mut dyn FnMut() -> f64, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng().clamp(0.0, 1.0)
}
