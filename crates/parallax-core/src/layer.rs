use crate::color::ColorSampler;
use crate::config::ParallaxConfig;
use crate::layer_config::LayerConfig;
use crate::node::{wrap_position, DotNode};
use crate::simulation::{Axis, ForceSimulation, JitterForce, PositionForce, StepEvent};
use crate::surface::DotStyle;
use glam::DVec2;
use rand::RngCore;

/// Particles of one parallax layer plus the simulation moving them.
///
/// Positions live in layer-local pixels. Every step wraps nodes that drifted
/// past `padding` beyond the layer bounds, so a drawn frame never sees an
/// unwrapped position.
pub struct LayerModel<R: RngCore> {
    size: DVec2,
    padding: f64,
    simulation: ForceSimulation<R>,
}

impl<R: RngCore> LayerModel<R> {
    /// Spawn `layer.count` dots inside `size` (each side floored at 1 px) and
    /// wire the centering and jitter forces.
    pub fn build(layer: &LayerConfig, size: DVec2, config: &ParallaxConfig, mut rng: R) -> Self {
        let size = size.max(DVec2::ONE);
        let colors = ColorSampler::new(&config.colors);
        let nodes: Vec<DotNode> = (0..layer.count)
            .map(|_| DotNode::spawn(&mut rng, size, layer, config, &colors))
            .collect();
        let strength = config.simulation.force_strength;
        let simulation = ForceSimulation::new(nodes, &config.simulation, rng)
            .with_force("x", PositionForce::new(Axis::X, size.x / 2.0, strength))
            .with_force("y", PositionForce::new(Axis::Y, size.y / 2.0, strength))
            .with_force("jitter", JitterForce::new(layer.jitter));
        Self {
            size,
            padding: config.padding,
            simulation,
        }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        self.size
    }

    #[inline]
    pub fn nodes(&self) -> &[DotNode] {
        self.simulation.nodes()
    }

    #[inline]
    pub fn simulation(&self) -> &ForceSimulation<R> {
        &self.simulation
    }

    #[inline]
    pub fn simulation_mut(&mut self) -> &mut ForceSimulation<R> {
        &mut self.simulation
    }

    /// Advance the timer by one step and wrap whatever moved.
    pub fn step(&mut self) -> StepEvent {
        let event = self.simulation.step();
        if event != StepEvent::Idle {
            self.wrap_nodes();
        }
        event
    }

    pub fn wrap_nodes(&mut self) {
        let (size, padding) = (self.size, self.padding);
        for node in self.simulation.nodes_mut() {
            wrap_position(&mut node.pos, size, padding);
        }
    }

    /// Markup styles, one per dot, in node order.
    pub fn dot_styles(&self) -> impl Iterator<Item = DotStyle> + '_ {
        self.nodes().iter().map(DotStyle::of)
    }

    /// Drawn positions at `t` seconds, in node order.
    pub fn positions_at(&self, t: f64) -> impl Iterator<Item = DVec2> + '_ {
        self.nodes().iter().map(move |n| n.screen_position(t))
    }
}
