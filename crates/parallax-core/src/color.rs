use crate::config::ColorSamplerConfig;
use rand::Rng;
use std::fmt;

/// RGBA color with channels in 0..255 and alpha in 0..1. Channels are kept
/// unclamped while interpolating and clamped only when formatted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    #[inline]
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// The color as it reads back after being written out as CSS: integer
    /// channels and an alpha inside 0..1.
    pub fn quantized(self) -> Rgba {
        Rgba {
            r: clamp_channel(self.r),
            g: clamp_channel(self.g),
            b: clamp_channel(self.b),
            a: clamp_alpha(self.a),
        }
    }
}

#[inline]
fn clamp_channel(v: f64) -> f64 {
    let v = v.round();
    // Also folds -0.0 into 0.0 so it never prints as "-0".
    if v.is_nan() || v <= 0.0 {
        return 0.0;
    }
    v.min(255.0)
}

#[inline]
fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() {
        return 1.0;
    }
    a.clamp(0.0, 1.0)
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.quantized();
        if q.a == 1.0 {
            write!(f, "rgb({}, {}, {})", q.r, q.g, q.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", q.r, q.g, q.b, q.a)
        }
    }
}

/// Which branch of the sampler produced a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Gray,
    Red,
    Mixed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorSample {
    pub color: String,
    pub mode: ColorMode,
}

/// Draws dot colors from two gradients plus a cross-mix of both.
#[derive(Clone, Debug)]
pub struct ColorSampler {
    gray: (Rgba, Rgba),
    red: (Rgba, Rgba),
    gray_chance: f64,
    red_chance: f64,
}

impl ColorSampler {
    pub fn new(config: &ColorSamplerConfig) -> Self {
        Self {
            gray: (config.gray_start, config.gray_end),
            red: (config.red_start, config.red_end),
            gray_chance: config.gray_chance,
            red_chance: config.red_chance,
        }
    }

    #[inline]
    fn gray_at(&self, t: f64) -> Rgba {
        self.gray.0.lerp(self.gray.1, t)
    }

    #[inline]
    fn red_at(&self, t: f64) -> Rgba {
        self.red.0.lerp(self.red.1, t)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorSample {
        let roll: f64 = rng.gen();
        if roll < self.gray_chance {
            return ColorSample {
                color: self.gray_at(rng.gen()).to_string(),
                mode: ColorMode::Gray,
            };
        }
        if roll < self.red_chance {
            return ColorSample {
                color: self.red_at(rng.gen()).to_string(),
                mode: ColorMode::Red,
            };
        }
        let from = self.gray_at(rng.gen()).quantized();
        let to = self.red_at(rng.gen()).quantized();
        ColorSample {
            color: from.lerp(to, rng.gen()).to_string(),
            mode: ColorMode::Mixed,
        }
    }
}
