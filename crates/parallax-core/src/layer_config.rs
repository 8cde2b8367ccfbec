//! Per-layer configuration read from optional `data-*` attributes.
//!
//! Parsing is tolerant: a missing, empty, or unparseable attribute falls back
//! to the global default for that field and never produces an error.

use crate::config::ParallaxConfig;
use crate::constants::{
    ATTR_COUNT, ATTR_JITTER, ATTR_SHRINK, ATTR_SIZE_MAX, ATTR_SIZE_MIN, ATTR_SPEED,
    MAX_DOT_COUNT, MIN_DOT_RADIUS_PX,
};

#[derive(Clone, Debug, PartialEq)]
pub struct LayerConfig {
    pub count: usize,
    pub size_min: f64,
    pub size_max: f64,
    pub jitter: f64,
    /// Scroll translation multiplier; may be negative.
    pub speed: f64,
    /// Scale-on-scroll multiplier.
    pub shrink: f64,
}

impl LayerConfig {
    /// Build a layer config from an attribute reader, e.g. a closure over
    /// `Element::get_attribute`.
    pub fn from_attributes<F>(read: F, config: &ParallaxConfig) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = &config.layer;
        let m = &config.motion;
        let number = |name: &str, fallback: f64| parse_number(read(name).as_deref(), fallback);
        let count = parse_count(read(ATTR_COUNT).as_deref(), d.count as i64);
        Self {
            count: clamp_count(count),
            size_min: number(ATTR_SIZE_MIN, d.size_min),
            size_max: number(ATTR_SIZE_MAX, d.size_max),
            jitter: number(ATTR_JITTER, d.jitter),
            speed: number(ATTR_SPEED, m.default_speed),
            shrink: number(ATTR_SHRINK, m.default_shrink),
        }
        .sanitized(config)
    }

    /// Negative sizes fall back to the defaults, an inverted size range is
    /// swapped and negative jitter becomes zero.
    pub fn sanitized(mut self, config: &ParallaxConfig) -> Self {
        if self.size_min < 0.0 {
            self.size_min = config.layer.size_min;
        }
        if self.size_max < 0.0 {
            self.size_max = config.layer.size_max;
        }
        if self.size_min > self.size_max {
            std::mem::swap(&mut self.size_min, &mut self.size_max);
        }
        self.jitter = self.jitter.max(0.0);
        self
    }

    /// Clamp a sampled radius so every dot stays drawable.
    #[inline]
    pub fn radius(&self, sampled: f64) -> f64 {
        sampled.max(MIN_DOT_RADIUS_PX)
    }
}

// Negative counts become 0; anything above MAX_DOT_COUNT is capped before
// narrowing, so a 32-bit usize never truncates.
fn clamp_count(count: i64) -> usize {
    count.clamp(0, MAX_DOT_COUNT as i64) as usize
}

// Length of the longest numeric prefix, following `parseFloat`: optional
// sign, digits with an optional fraction, optional exponent.
fn float_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if mantissa_digits > 0 || j > frac_start {
            mantissa_digits += j - frac_start;
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

/// Parse the leading number of `value` (`"12px"` reads as 12), or return
/// `fallback` when absent, empty, unparseable, or not finite.
pub fn parse_number(value: Option<&str>, fallback: f64) -> f64 {
    let Some(raw) = value.map(str::trim_start).filter(|v| !v.is_empty()) else {
        return fallback;
    };
    let len = float_prefix_len(raw);
    raw[..len]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

/// Integer variant of [`parse_number`]: leading sign and decimal digits only.
/// Out-of-range values saturate.
pub fn parse_count(value: Option<&str>, fallback: i64) -> i64 {
    let Some(raw) = value.map(str::trim_start).filter(|v| !v.is_empty()) else {
        return fallback;
    };
    let b = raw.as_bytes();
    let sign_len = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let digits = b[sign_len..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return fallback;
    }
    // Digits are validated above, so a parse failure can only be overflow.
    raw[..sign_len + digits].parse().unwrap_or(if b[0] == b'-' {
        i64::MIN
    } else {
        i64::MAX
    })
}
