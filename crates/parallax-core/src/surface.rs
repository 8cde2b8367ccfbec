//! Attribute values for the SVG markup of one dot: a `<g>` positioned with a
//! translate transform, holding an outer circle and a brighter inner core.

use crate::constants::{DOT_INNER_OPACITY_BOOST, DOT_INNER_RADIUS_RATIO};
use crate::node::DotNode;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle {
    pub r: f64,
    pub opacity: f64,
}

/// Static look of a dot; fixed once the dot is spawned.
#[derive(Clone, Debug, PartialEq)]
pub struct DotStyle {
    pub fill: String,
    pub outer: CircleStyle,
    pub inner: CircleStyle,
}

impl DotStyle {
    pub fn of(node: &DotNode) -> Self {
        Self {
            fill: node.color.clone(),
            outer: CircleStyle {
                r: node.r,
                opacity: node.opacity,
            },
            inner: CircleStyle {
                r: node.r * DOT_INNER_RADIUS_RATIO,
                opacity: (node.opacity * DOT_INNER_OPACITY_BOOST).min(1.0),
            },
        }
    }
}

/// `transform` attribute placing a dot group at `p`.
#[inline]
pub fn translate_attr(p: DVec2) -> String {
    format!("translate({}, {})", p.x, p.y)
}
