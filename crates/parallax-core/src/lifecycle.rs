//! Start/stop policy for layer simulations.
//!
//! Each layer cycles between stopped and running. A layer runs only while
//! motion is allowed; leaving the viewport, a reduced-motion preference or a
//! rebuild stops it. Rebuilds always stop and destroy every old layer before
//! the first new one is built.

use crate::simulation::Simulation;
use fnv::FnvHashMap;
use std::hash::Hash;

/// The user's motion preference, read from `prefers-reduced-motion`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Full,
    Reduced,
}

impl Motion {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            Motion::Reduced
        } else {
            Motion::Full
        }
    }

    #[inline]
    pub fn should_animate(self) -> bool {
        self == Motion::Full
    }
}

/// Runtime wrapper around one layer's simulation.
pub struct LayerState<S> {
    pub simulation: S,
    pub is_visible: bool,
    pub running: bool,
    destroy: Option<Box<dyn FnOnce()>>,
}

impl<S> LayerState<S> {
    /// `destroy` releases rendering resources (pending frames); it must not
    /// stop the simulation.
    pub fn new(simulation: S, destroy: impl FnOnce() + 'static) -> Self {
        Self {
            simulation,
            is_visible: true,
            running: false,
            destroy: Some(Box::new(destroy)),
        }
    }

    /// Run the destroy callback once; later calls do nothing.
    pub fn destroy(&mut self) {
        if let Some(destroy) = self.destroy.take() {
            destroy();
        }
    }
}

/// Sole owner of every [`LayerState`], keyed by layer.
pub struct LayerLifecycle<K, S> {
    states: FnvHashMap<K, LayerState<S>>,
    restart_alpha: f64,
}

impl<K, S> LayerLifecycle<K, S>
where
    K: Copy + Eq + Hash,
    S: Simulation,
{
    pub fn new(restart_alpha: f64) -> Self {
        Self {
            states: FnvHashMap::default(),
            restart_alpha,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, key: K) -> Option<&LayerState<S>> {
        self.states.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &LayerState<S>)> {
        self.states.iter()
    }

    /// Re-heat and resume a layer. No-op when motion is reduced, the layer is
    /// unknown, or it is already running.
    pub fn start_simulation(&mut self, key: K, motion: Motion) {
        if !motion.should_animate() {
            return;
        }
        let Some(state) = self.states.get_mut(&key) else {
            return;
        };
        if state.running {
            return;
        }
        state.simulation.set_alpha(self.restart_alpha);
        state.simulation.restart();
        state.running = true;
    }

    pub fn stop_simulation(&mut self, key: K) {
        if let Some(state) = self.states.get_mut(&key) {
            stop(state);
        }
    }

    /// Record a visibility report. Returns false for unknown layers.
    pub fn mark_visible(&mut self, key: K, visible: bool) -> bool {
        match self.states.get_mut(&key) {
            Some(state) => {
                state.is_visible = visible;
                true
            }
            None => false,
        }
    }

    /// Start visible layers, stop hidden ones.
    pub fn apply_visibility(&mut self, key: K, visible: bool, motion: Motion) {
        if visible {
            self.start_simulation(key, motion);
        } else {
            self.stop_simulation(key);
        }
    }

    /// Tear down every layer, then build `keys` afresh. `build` returning
    /// `None` leaves that layer out. New layers count as visible and run
    /// only when motion is allowed.
    pub fn rebuild<I, F>(&mut self, keys: I, motion: Motion, mut build: F)
    where
        I: IntoIterator<Item = K>,
        F: FnMut(K) -> Option<LayerState<S>>,
    {
        self.clear();
        for key in keys {
            let Some(mut state) = build(key) else {
                continue;
            };
            state.is_visible = true;
            state.running = motion.should_animate();
            if !state.running {
                state.simulation.stop();
            }
            self.states.insert(key, state);
        }
    }

    /// Stop and destroy every layer and forget them.
    pub fn clear(&mut self) {
        for state in self.states.values_mut() {
            stop(state);
            state.destroy();
        }
        self.states.clear();
    }
}

fn stop<S: Simulation>(state: &mut LayerState<S>) {
    if !state.running {
        return;
    }
    state.simulation.stop();
    state.running = false;
}
