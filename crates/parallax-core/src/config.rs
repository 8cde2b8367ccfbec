//! Immutable configuration for the parallax background.
//!
//! A [`ParallaxConfig`] is assembled once at startup (usually through
//! `Default`) and shared by reference with every component. Nothing mutates
//! it afterwards; a page that wants different tunables builds a different
//! value before mounting.

use crate::color::Rgba;
use crate::constants::*;

/// Per-layer defaults used when a layer element carries no override.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerDefaults {
    pub count: usize,
    pub size_min: f64,
    pub size_max: f64,
    pub jitter: f64,
}

/// Scroll-driven transform settings.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub max_shrink: f64,
    pub default_speed: f64,
    pub default_shrink: f64,
}

/// Force simulation constants.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub force_strength: f64,
    pub velocity_decay: f64,
    pub alpha: f64,
    pub alpha_decay: f64,
    pub alpha_min: f64,
}

/// Ranges the per-dot orbit parameters are drawn from.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub radius_px: (f64, f64),
    pub speed_rad: (f64, f64),
    pub wobble_speed_rad: (f64, f64),
}

/// Gradient endpoints and mode probabilities for dot colors.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSamplerConfig {
    pub gray_start: Rgba,
    pub gray_end: Rgba,
    pub red_start: Rgba,
    pub red_end: Rgba,
    pub gray_chance: f64,
    pub red_chance: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpacityRange {
    pub min: f64,
    pub max: f64,
}

/// CSS size strings (see [`crate::size`]) for the container at the top and
/// bottom of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerSizeConfig {
    pub start: String,
    pub end: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub container_selector: String,
    pub layer_selector: String,
    pub svg_class_name: String,
    pub container_size: ContainerSizeConfig,
    pub padding: f64,
    pub layer: LayerDefaults,
    pub motion: MotionConfig,
    pub simulation: SimulationConfig,
    pub orbit: OrbitConfig,
    pub colors: ColorSamplerConfig,
    pub opacity: OpacityRange,
    /// Raise the console log level to `debug`.
    pub debug: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            container_selector: CONTAINER_SELECTOR.to_string(),
            layer_selector: LAYER_SELECTOR.to_string(),
            svg_class_name: SVG_CLASS_NAME.to_string(),
            container_size: ContainerSizeConfig {
                start: CONTAINER_SIZE_START.to_string(),
                end: CONTAINER_SIZE_END.to_string(),
            },
            padding: WRAP_PADDING_PX,
            layer: LayerDefaults {
                count: DEFAULT_DOT_COUNT,
                size_min: DEFAULT_SIZE_MIN_PX,
                size_max: DEFAULT_SIZE_MAX_PX,
                jitter: DEFAULT_JITTER,
            },
            motion: MotionConfig {
                max_shrink: MAX_SHRINK,
                default_speed: DEFAULT_SPEED,
                default_shrink: DEFAULT_SHRINK,
            },
            simulation: SimulationConfig {
                force_strength: FORCE_STRENGTH,
                velocity_decay: VELOCITY_DECAY,
                alpha: SIM_ALPHA,
                alpha_decay: SIM_ALPHA_DECAY,
                alpha_min: SIM_ALPHA_MIN,
            },
            orbit: OrbitConfig {
                radius_px: (ORBIT_RADIUS_PX_MIN, ORBIT_RADIUS_PX_MAX),
                speed_rad: (ORBIT_SPEED_RAD_MIN, ORBIT_SPEED_RAD_MAX),
                wobble_speed_rad: (ORBIT_WOBBLE_SPEED_RAD_MIN, ORBIT_WOBBLE_SPEED_RAD_MAX),
            },
            colors: ColorSamplerConfig {
                gray_start: Rgba::from_array(GRAY_START),
                gray_end: Rgba::from_array(GRAY_END),
                red_start: Rgba::from_array(RED_START),
                red_end: Rgba::from_array(RED_END),
                gray_chance: GRAY_CHANCE,
                red_chance: RED_CHANCE,
            },
            opacity: OpacityRange {
                min: OPACITY_MIN,
                max: OPACITY_MAX,
            },
            debug: false,
        }
    }
}
