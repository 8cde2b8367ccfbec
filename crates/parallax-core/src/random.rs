use rand::Rng;
use std::f64::consts::TAU;

/// Uniform sample in `[min, max)`. An inverted range samples `(max, min]`.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

/// Uniform phase in `[0, 2π)`.
#[inline]
pub fn random_phase<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * TAU
}
