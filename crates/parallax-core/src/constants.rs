// Tunables for the parallax background, as shipped on the landing page.

// Selectors and generated markup
pub const CONTAINER_SELECTOR: &str = ".parallax";
pub const LAYER_SELECTOR: &str = ".parallax-layer";
pub const SVG_CLASS_NAME: &str = "parallax-svg";

// Container size interpolated across scroll (written to a CSS variable)
pub const CONTAINER_SIZE_START: &str = "100dvw";
pub const CONTAINER_SIZE_END: &str = "100dvw";

// Margin beyond the layer bounds before a dot wraps to the other side (px)
pub const WRAP_PADDING_PX: f64 = 12.0;

// Layer defaults when no data-* attribute overrides them
pub const DEFAULT_DOT_COUNT: usize = 10;
pub const MAX_DOT_COUNT: usize = 2000; // data-count above this is capped
pub const DEFAULT_SIZE_MIN_PX: f64 = 0.1;
pub const DEFAULT_SIZE_MAX_PX: f64 = 4.0;
pub const DEFAULT_JITTER: f64 = 0.35;

// Smallest radius a dot may be drawn with
pub const MIN_DOT_RADIUS_PX: f64 = 0.05;

// Inner core circle relative to the outer dot
pub const DOT_INNER_RADIUS_RATIO: f64 = 0.75;
pub const DOT_INNER_OPACITY_BOOST: f64 = 1.6;

// Scroll-driven transform
pub const MAX_SHRINK: f64 = -0.9;
pub const DEFAULT_SPEED: f64 = -0.01;
pub const DEFAULT_SHRINK: f64 = 1.0;

// Force simulation
pub const FORCE_STRENGTH: f64 = 1e-4; // pull toward the layer centre
pub const VELOCITY_DECAY: f64 = 0.1; // fraction of velocity lost per tick
pub const SIM_ALPHA: f64 = 0.9; // initial and restart alpha
pub const SIM_ALPHA_DECAY: f64 = 0.004;
pub const SIM_ALPHA_MIN: f64 = 0.001; // timer stops below this

// Orbit micro-motion drawn on top of the simulated position
pub const ORBIT_RADIUS_PX_MIN: f64 = 1.5;
pub const ORBIT_RADIUS_PX_MAX: f64 = 10.0;
pub const ORBIT_SPEED_RAD_MIN: f64 = -2.2; // negative spins the other way
pub const ORBIT_SPEED_RAD_MAX: f64 = 2.2;
pub const ORBIT_WOBBLE_SPEED_RAD_MIN: f64 = 0.6;
pub const ORBIT_WOBBLE_SPEED_RAD_MAX: f64 = 1.6;

// Color distribution: [r, g, b, a] with channels in 0..255 and alpha in 0..1
pub const GRAY_START: [f64; 4] = [204.0, 61.0, 61.0, 0.5];
pub const GRAY_END: [f64; 4] = [179.0, 110.0, 110.0, 0.5];
pub const RED_START: [f64; 4] = [0.0, 0.0, 0.0, 0.1];
pub const RED_END: [f64; 4] = [210.0, 50.0, 50.0, 0.9];
pub const GRAY_CHANCE: f64 = 0.55; // roll below => gray gradient
pub const RED_CHANCE: f64 = 0.85; // roll below => red gradient, else mixed

// Dot opacity
pub const OPACITY_MIN: f64 = 0.35;
pub const OPACITY_MAX: f64 = 0.9;

// data-* attribute names read off each layer element
pub const ATTR_COUNT: &str = "data-count";
pub const ATTR_SIZE_MIN: &str = "data-size-min";
pub const ATTR_SIZE_MAX: &str = "data-size-max";
pub const ATTR_JITTER: &str = "data-jitter";
pub const ATTR_SPEED: &str = "data-speed";
pub const ATTR_SHRINK: &str = "data-shrink";

// Page events a controller listens to
pub const EVENT_SCROLL: &str = "scroll";
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_CHANGE: &str = "change"; // on the reduced-motion media query
