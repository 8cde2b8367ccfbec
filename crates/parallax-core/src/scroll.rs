use crate::config::ContainerSizeConfig;
use crate::size::{resolve_size_px, Viewport};

/// Normalized scroll progress through the page's scrollable height.
#[inline]
pub fn scroll_ratio(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scroll_max = (scroll_height - viewport_height).max(1.0);
    (scroll_y / scroll_max).clamp(0.0, 1.0)
}

/// Translate + scale applied to one layer element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTransform {
    pub translate_y: f64,
    pub scale: f64,
}

impl LayerTransform {
    /// `is_front` marks the last (closest) layer, which never shrinks.
    pub fn compute(
        scroll_y: f64,
        ratio: f64,
        speed: f64,
        shrink: f64,
        max_shrink: f64,
        is_front: bool,
    ) -> Self {
        let effective_shrink = if is_front { 0.0 } else { shrink };
        Self {
            translate_y: scroll_y * speed,
            scale: 1.0 - ratio * max_shrink * effective_shrink,
        }
    }

    pub fn to_css(self) -> String {
        format!(
            "translate3d(0, {}px, 0) scale({})",
            self.translate_y, self.scale
        )
    }
}

/// Container size endpoints, resolved against the viewport of the last
/// refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerSizeBounds {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl ContainerSizeBounds {
    pub fn resolve(config: &ContainerSizeConfig, viewport: Viewport) -> Self {
        Self {
            start: resolve_size_px(&config.start, viewport),
            end: resolve_size_px(&config.end, viewport),
        }
    }

    /// Interpolated size in px, never negative; `None` when either end did
    /// not resolve.
    pub fn size_at(&self, ratio: f64) -> Option<f64> {
        let (start, end) = (self.start?, self.end?);
        Some((start + (end - start) * ratio).max(0.0))
    }
}
