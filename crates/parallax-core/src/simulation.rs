//! A small force simulation over [`DotNode`]s.
//!
//! The simulation follows the usual "cooling" model: a global `alpha` decays
//! toward zero on every tick and scales every force, so motion settles over
//! time. Scheduling is not handled here; a driver calls
//! [`ForceSimulation::step`] once per animation frame while
//! [`ForceSimulation::is_active`] is true.

use crate::config::SimulationConfig;
use crate::node::DotNode;
use rand::{Rng, RngCore};
use smallvec::SmallVec;

/// A force mutates node velocities once per tick.
pub trait Force {
    /// Called once when the force is registered.
    fn initialize(&mut self, _nodes: &[DotNode]) {}
    fn apply(&mut self, nodes: &mut [DotNode], alpha: f64, rng: &mut dyn RngCore);
}

/// Contract shared by anything the lifecycle can start and stop.
pub trait Simulation {
    /// Advance the physics by one step without touching the timer.
    fn tick(&mut self);
    /// Register (or replace) a named force.
    fn force(&mut self, name: &'static str, force: Box<dyn Force>);
    fn alpha(&self) -> f64;
    fn set_alpha(&mut self, alpha: f64);
    /// Resume the timer. Alpha is left untouched; reset it first to re-heat.
    fn restart(&mut self);
    fn stop(&mut self);
}

/// Outcome of one timer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// The timer is stopped; nothing moved.
    Idle,
    Tick,
    /// Ticked, then cooled below `alpha_min` and stopped the timer.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Pulls nodes toward `target` on one axis: `v += (target - p) * strength * alpha`.
pub struct PositionForce {
    axis: Axis,
    target: f64,
    strength: f64,
}

impl PositionForce {
    pub fn new(axis: Axis, target: f64, strength: f64) -> Self {
        Self {
            axis,
            target,
            strength,
        }
    }
}

impl Force for PositionForce {
    fn apply(&mut self, nodes: &mut [DotNode], alpha: f64, _rng: &mut dyn RngCore) {
        let k = self.strength * alpha;
        for node in nodes {
            match self.axis {
                Axis::X => node.vel.x += (self.target - node.pos.x) * k,
                Axis::Y => node.vel.y += (self.target - node.pos.y) * k,
            }
        }
    }
}

/// Zero-mean random walk: each axis gets `(u - 0.5) * strength * alpha`.
pub struct JitterForce {
    strength: f64,
}

impl JitterForce {
    pub fn new(strength: f64) -> Self {
        Self { strength }
    }
}

impl Force for JitterForce {
    fn apply(&mut self, nodes: &mut [DotNode], alpha: f64, rng: &mut dyn RngCore) {
        let scaled = self.strength * alpha;
        for node in nodes {
            node.vel.x += (rng.gen::<f64>() - 0.5) * scaled;
            node.vel.y += (rng.gen::<f64>() - 0.5) * scaled;
        }
    }
}

pub struct ForceSimulation<R: RngCore> {
    nodes: Vec<DotNode>,
    forces: SmallVec<[(&'static str, Box<dyn Force>); 4]>,
    alpha: f64,
    alpha_min: f64,
    alpha_decay: f64,
    alpha_target: f64,
    // Stored as the retained fraction, `1 - velocity_decay`.
    velocity_retain: f64,
    active: bool,
    rng: R,
}

impl<R: RngCore> ForceSimulation<R> {
    /// A new simulation starts active, like a freshly created timer.
    pub fn new(nodes: Vec<DotNode>, params: &SimulationConfig, rng: R) -> Self {
        Self {
            nodes,
            forces: SmallVec::new(),
            alpha: params.alpha,
            alpha_min: params.alpha_min,
            alpha_decay: params.alpha_decay,
            alpha_target: 0.0,
            velocity_retain: 1.0 - params.velocity_decay,
            active: true,
            rng,
        }
    }

    pub fn with_force(mut self, name: &'static str, force: impl Force + 'static) -> Self {
        self.force(name, Box::new(force));
        self
    }

    #[inline]
    pub fn nodes(&self) -> &[DotNode] {
        &self.nodes
    }

    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [DotNode] {
        &mut self.nodes
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// One timer step: tick, then stop once cooled below `alpha_min`.
    pub fn step(&mut self) -> StepEvent {
        if !self.active {
            return StepEvent::Idle;
        }
        self.tick();
        if self.alpha < self.alpha_min {
            self.active = false;
            return StepEvent::End;
        }
        StepEvent::Tick
    }
}

impl<R: RngCore> Simulation for ForceSimulation<R> {
    fn tick(&mut self) {
        self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;
        for (_, force) in self.forces.iter_mut() {
            force.apply(&mut self.nodes, self.alpha, &mut self.rng);
        }
        for node in &mut self.nodes {
            node.vel *= self.velocity_retain;
            node.pos += node.vel;
        }
    }

    fn force(&mut self, name: &'static str, mut force: Box<dyn Force>) {
        force.initialize(&self.nodes);
        match self.forces.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = force,
            None => self.forces.push((name, force)),
        }
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    fn restart(&mut self) {
        self.active = true;
    }

    fn stop(&mut self) {
        self.active = false;
    }
}
