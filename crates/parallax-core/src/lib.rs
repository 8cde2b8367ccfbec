//! Platform-free core of the parallax background: configuration, sampling,
//! the particle simulation and the lifecycle policy the web layer drives.

pub mod color;
pub mod config;
pub mod constants;
pub mod dispose;
pub mod layer;
pub mod layer_config;
pub mod lifecycle;
pub mod listeners;
pub mod node;
pub mod random;
pub mod scroll;
pub mod simulation;
pub mod size;
pub mod surface;
pub mod trigger;

pub use color::*;
pub use config::*;
pub use dispose::Disposer;
pub use layer::LayerModel;
pub use layer_config::{parse_count, parse_number, LayerConfig};
pub use lifecycle::*;
pub use listeners::{listen, wire_page_events, EventSource, PageHandlers};
pub use node::*;
pub use random::*;
pub use scroll::*;
pub use simulation::*;
pub use size::*;
pub use surface::{translate_attr, CircleStyle, DotStyle};
pub use trigger::FrameTrigger;
