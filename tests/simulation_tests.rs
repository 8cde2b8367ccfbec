// Host-side tests for the force simulation, wrapping and layer models.

use glam::DVec2;
use parallax_core::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cell::Cell;
use std::rc::Rc;

fn node_at(x: f64, y: f64) -> DotNode {
    DotNode {
        pos: DVec2::new(x, y),
        vel: DVec2::ZERO,
        r: 1.0,
        color: String::new(),
        opacity: 1.0,
        orbit: Orbit::default(),
    }
}

fn sim(nodes: Vec<DotNode>) -> ForceSimulation<StdRng> {
    ForceSimulation::new(
        nodes,
        &ParallaxConfig::default().simulation,
        StdRng::seed_from_u64(1),
    )
}

#[test]
fn wrap_moves_past_edge_to_opposite_side() {
    let size = DVec2::new(100.0, 50.0);
    let padding = 12.0;
    let cases = [
        (DVec2::new(113.0, 10.0), DVec2::new(-12.0, 10.0)),
        (DVec2::new(-13.0, 10.0), DVec2::new(112.0, 10.0)),
        (DVec2::new(10.0, 63.0), DVec2::new(10.0, -12.0)),
        (DVec2::new(10.0, -13.0), DVec2::new(10.0, 62.0)),
        (DVec2::new(112.0, -12.0), DVec2::new(112.0, -12.0)),
        (DVec2::new(50.0, 25.0), DVec2::new(50.0, 25.0)),
    ];
    for (before, after) in cases {
        let mut p = before;
        wrap_position(&mut p, size, padding);
        assert_eq!(p, after, "from {:?}", before);
    }
}

#[test]
fn tick_decays_alpha_and_applies_velocity_decay() {
    let mut s = sim(vec![node_at(0.0, 0.0)]);
    s.nodes_mut()[0].vel = DVec2::new(10.0, -10.0);
    s.tick();
    assert!((s.alpha() - 0.9 * (1.0 - 0.004)).abs() < 1e-12);
    let n = &s.nodes()[0];
    assert!((n.vel.x - 9.0).abs() < 1e-12);
    assert!((n.pos.x - 9.0).abs() < 1e-12 && (n.pos.y + 9.0).abs() < 1e-12);
}

#[test]
fn position_force_pulls_toward_target() {
    let mut nodes = vec![node_at(0.0, 40.0), node_at(200.0, 40.0)];
    let mut rng = StdRng::seed_from_u64(0);
    PositionForce::new(Axis::X, 100.0, 0.5).apply(&mut nodes, 1.0, &mut rng);
    assert_eq!(nodes[0].vel, DVec2::new(50.0, 0.0));
    assert_eq!(nodes[1].vel, DVec2::new(-50.0, 0.0));
    PositionForce::new(Axis::Y, 40.0, 0.5).apply(&mut nodes, 1.0, &mut rng);
    assert_eq!(nodes[0].vel.y, 0.0);
}

#[test]
fn jitter_is_bounded_and_zero_mean() {
    let mut nodes: Vec<DotNode> = (0..10_000).map(|_| node_at(0.0, 0.0)).collect();
    let mut rng = StdRng::seed_from_u64(9);
    JitterForce::new(1.0).apply(&mut nodes, 0.5, &mut rng);
    let mut mean = DVec2::ZERO;
    for n in &nodes {
        assert!(n.vel.x.abs() <= 0.25 && n.vel.y.abs() <= 0.25);
        mean += n.vel;
    }
    mean /= nodes.len() as f64;
    assert!(mean.x.abs() < 0.01 && mean.y.abs() < 0.01, "{:?}", mean);

    let mut still = vec![node_at(0.0, 0.0)];
    JitterForce::new(0.0).apply(&mut still, 0.9, &mut rng);
    assert_eq!(still[0].vel, DVec2::ZERO);
}

struct CountingForce {
    applied: Rc<Cell<u32>>,
    initialized: Rc<Cell<u32>>,
}

impl Force for CountingForce {
    fn initialize(&mut self, _nodes: &[DotNode]) {
        self.initialized.set(self.initialized.get() + 1);
    }

    fn apply(&mut self, _nodes: &mut [DotNode], _alpha: f64, _rng: &mut dyn RngCore) {
        self.applied.set(self.applied.get() + 1);
    }
}

#[test]
fn registering_a_name_twice_replaces_the_force() {
    let first = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
    let second = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
    let mut s = sim(vec![node_at(0.0, 0.0)]);
    s.force(
        "count",
        Box::new(CountingForce {
            applied: first.0.clone(),
            initialized: first.1.clone(),
        }),
    );
    s.force(
        "count",
        Box::new(CountingForce {
            applied: second.0.clone(),
            initialized: second.1.clone(),
        }),
    );
    s.tick();
    s.tick();
    assert_eq!((first.0.get(), first.1.get()), (0, 1));
    assert_eq!((second.0.get(), second.1.get()), (2, 1));
}

#[test]
fn simulation_cools_to_an_end_and_restarts() {
    let mut s = sim(vec![node_at(5.0, 5.0)]);
    assert!(s.is_active());
    let mut steps = 0;
    loop {
        steps += 1;
        match s.step() {
            StepEvent::Tick => assert!(steps < 5000, "never cooled down"),
            StepEvent::End => break,
            StepEvent::Idle => panic!("idle while active"),
        }
    }
    assert!(s.alpha() < 0.001);
    assert!(!s.is_active());
    assert_eq!(s.step(), StepEvent::Idle);

    s.set_alpha(0.9);
    s.restart();
    assert!(s.is_active());
    assert_eq!(s.step(), StepEvent::Tick);
    s.stop();
    assert_eq!(s.step(), StepEvent::Idle);
}

#[test]
fn layer_spawns_configured_dots_inside_bounds() {
    let config = ParallaxConfig::default();
    let layer = LayerConfig::from_attributes(
        |name| (name == "data-count").then(|| "5".to_string()),
        &config,
    );
    let size = DVec2::new(320.0, 240.0);
    let model = LayerModel::build(&layer, size, &config, StdRng::seed_from_u64(5));
    assert_eq!(model.nodes().len(), 5);
    for n in model.nodes() {
        assert!(n.pos.x >= 0.0 && n.pos.x < size.x);
        assert!(n.pos.y >= 0.0 && n.pos.y < size.y);
        assert!(n.r >= MIN_RADIUS && n.r <= layer.size_max);
        assert!(n.opacity >= config.opacity.min && n.opacity <= config.opacity.max);
        assert_eq!(n.vel, DVec2::ZERO);
    }
}

const MIN_RADIUS: f64 = parallax_core::constants::MIN_DOT_RADIUS_PX;

#[test]
fn layer_positions_stay_within_padding_while_stepping() {
    let config = ParallaxConfig::default();
    let mut layer = LayerConfig::from_attributes(|_| None, &config);
    layer.count = 40;
    layer.jitter = 400.0;
    let size = DVec2::new(120.0, 80.0);
    let mut model = LayerModel::build(&layer, size, &config, StdRng::seed_from_u64(21));
    let pad = config.padding;
    for _ in 0..300 {
        model.step();
        for n in model.nodes() {
            assert!(n.pos.x >= -pad && n.pos.x <= size.x + pad, "{:?}", n.pos);
            assert!(n.pos.y >= -pad && n.pos.y <= size.y + pad, "{:?}", n.pos);
        }
    }
}

#[test]
fn empty_layer_still_ticks() {
    let config = ParallaxConfig::default();
    let layer = LayerConfig::from_attributes(|_| Some("0".to_string()), &config);
    assert_eq!(layer.count, 0);
    let mut model = LayerModel::build(&layer, DVec2::ZERO, &config, StdRng::seed_from_u64(2));
    assert_eq!(model.size(), DVec2::ONE);
    assert_eq!(model.step(), StepEvent::Tick);
    assert_eq!(model.positions_at(1.0).count(), 0);
}

#[test]
fn drawn_positions_add_orbit_to_simulated_position() {
    let config = ParallaxConfig::default();
    let layer = LayerConfig::from_attributes(|_| Some("3".to_string()), &config);
    let model = LayerModel::build(&layer, DVec2::new(50.0, 50.0), &config, StdRng::seed_from_u64(8));
    let t = 2.5;
    for (n, p) in model.nodes().iter().zip(model.positions_at(t)) {
        assert_eq!(p, n.pos + n.orbit.offset(t));
    }
}

#[test]
fn dot_styles_describe_outer_and_inner_circles() {
    let config = ParallaxConfig::default();
    let layer = LayerConfig::from_attributes(|_| Some("5".to_string()), &config);
    let model = LayerModel::build(&layer, DVec2::new(90.0, 60.0), &config, StdRng::seed_from_u64(4));
    let styles: Vec<DotStyle> = model.dot_styles().collect();
    assert_eq!(styles.len(), 5);
    for (style, node) in styles.iter().zip(model.nodes()) {
        assert_eq!(style.fill, node.color);
        assert_eq!(style.outer, CircleStyle { r: node.r, opacity: node.opacity });
        assert!((style.inner.r - 0.75 * node.r).abs() < 1e-12);
        assert!(style.inner.opacity >= style.outer.opacity && style.inner.opacity <= 1.0);
    }
}

#[test]
fn inner_opacity_saturates_at_one() {
    let mut node = node_at(0.0, 0.0);
    node.opacity = 0.9;
    assert_eq!(DotStyle::of(&node).inner.opacity, 1.0);
    node.opacity = 0.5;
    assert!((DotStyle::of(&node).inner.opacity - 0.8).abs() < 1e-12);
}

#[test]
fn translate_attribute_format() {
    assert_eq!(translate_attr(DVec2::new(12.5, -3.0)), "translate(12.5, -3)");
}
