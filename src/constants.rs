// Browser-facing constants for the parallax front end.

// Accessibility
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Visibility observation: pre-activate layers slightly before they scroll in
pub const OBSERVER_ROOT_MARGIN: &str = "200px";
pub const OBSERVER_THRESHOLD: f64 = 0.01; // fire on almost any visible fraction

// Generated markup
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const DOT_CLASS: &str = "parallax-dot";
pub const DOT_OUTER_CLASS: &str = "parallax-dot__outer";
pub const DOT_INNER_CLASS: &str = "parallax-dot__inner";

// CSS custom property written on the container as the page scrolls
pub const CONTAINER_SIZE_VAR: &str = "--parallax-size";

// Bootstrap
pub const PAGE_HIDE_EVENT: &str = "pagehide";
