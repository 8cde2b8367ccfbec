//! CSS-like size strings (`"12px"`, `"100dvw"`, `"50%"`) resolved to pixels.
//!
//! Viewport units resolve against the [`Viewport`] passed in, so callers must
//! resolve again after the window is resized.

use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeUnit {
    Px,
    Dvh,
    /// Accepted as a synonym of `dvh`.
    Dwh,
    Dvw,
    Vh,
    Vw,
    /// Percentage of the smaller viewport side.
    Percent,
}

impl SizeUnit {
    // Longest suffixes first so "dvh" is not read as "vh".
    const SUFFIXES: [(&'static str, SizeUnit); 7] = [
        ("dvh", SizeUnit::Dvh),
        ("dwh", SizeUnit::Dwh),
        ("dvw", SizeUnit::Dvw),
        ("px", SizeUnit::Px),
        ("vh", SizeUnit::Vh),
        ("vw", SizeUnit::Vw),
        ("%", SizeUnit::Percent),
    ];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeValue {
    pub value: f64,
    pub unit: SizeUnit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SizeParseError {
    #[error("size value is empty")]
    Empty,
    #[error("malformed size number {0:?}")]
    Malformed(String),
    #[error("size number {0:?} is not finite")]
    NotFinite(String),
}

/// Window inner dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// Accepts `-?\d*\.?\d+`: optional sign, optional integer part, optional
// fraction, at least one trailing digit.
fn is_plain_number(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    match frac_part {
        Some(f) => all_digits(int_part) && !f.is_empty() && all_digits(f),
        None => !int_part.is_empty() && all_digits(int_part),
    }
}

impl FromStr for SizeValue {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SizeParseError::Empty);
        }
        let (number, unit) = SizeUnit::SUFFIXES
            .iter()
            .find_map(|(suffix, unit)| trimmed.strip_suffix(suffix).map(|n| (n, *unit)))
            .unwrap_or((trimmed, SizeUnit::Px));
        if !is_plain_number(number) {
            return Err(SizeParseError::Malformed(number.to_string()));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| SizeParseError::Malformed(number.to_string()))?;
        if !value.is_finite() {
            return Err(SizeParseError::NotFinite(number.to_string()));
        }
        Ok(SizeValue { value, unit })
    }
}

impl SizeValue {
    pub fn to_px(self, viewport: Viewport) -> f64 {
        match self.unit {
            SizeUnit::Px => self.value,
            SizeUnit::Dvh | SizeUnit::Dwh | SizeUnit::Vh => viewport.height * self.value / 100.0,
            SizeUnit::Dvw | SizeUnit::Vw => viewport.width * self.value / 100.0,
            SizeUnit::Percent => viewport.width.min(viewport.height) * self.value / 100.0,
        }
    }
}

/// Resolve a size string to pixels, or `None` when it does not parse.
pub fn resolve_size_px(value: &str, viewport: Viewport) -> Option<f64> {
    match value.parse::<SizeValue>() {
        Ok(size) => Some(size.to_px(viewport)),
        Err(e) => {
            log::debug!("[parallax] ignoring size {:?}: {}", value, e);
            None
        }
    }
}
