// Host-side tests for orbit offsets, color sampling and random helpers.

use glam::DVec2;
use parallax_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::FRAC_PI_2;

fn still_orbit(radius_px: f64, wobble_phase: f64) -> Orbit {
    Orbit {
        radius_px,
        speed_rad: 0.0,
        phase: 0.0,
        wobble_speed_rad: 0.0,
        wobble_phase,
    }
}

#[test]
fn degenerate_orbit_is_constant() {
    let orbit = still_orbit(5.0, 0.0);
    for t in [0.0, 1.0, 17.25, 1e4] {
        assert_eq!(orbit.offset(t), DVec2::new(3.75, 0.0));
    }
    let orbit = still_orbit(5.0, FRAC_PI_2);
    for t in [0.0, 3.0, 900.0] {
        let o = orbit.offset(t);
        assert!((o.x - 5.0).abs() < 1e-12 && o.y.abs() < 1e-12, "{:?}", o);
    }
}

#[test]
fn orbit_offset_is_deterministic() {
    let orbit = Orbit {
        radius_px: 7.3,
        speed_rad: -1.7,
        phase: 2.1,
        wobble_speed_rad: 0.9,
        wobble_phase: 4.4,
    };
    for t in [0.0, 0.016, 12.5] {
        assert_eq!(orbit.offset(t).to_array(), orbit.offset(t).to_array());
    }
}

#[test]
fn orbit_radius_breathes_between_half_and_full() {
    let config = ParallaxConfig::default();
    let layer = LayerConfig::from_attributes(|_| None, &config);
    let colors = ColorSampler::new(&config.colors);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let node = DotNode::spawn(&mut rng, DVec2::new(300.0, 200.0), &layer, &config, &colors);
        let r = node.orbit.radius_px;
        assert!((config.orbit.radius_px.0..config.orbit.radius_px.1).contains(&r));
        for i in 0..20 {
            let len = node.orbit.offset(i as f64 * 0.37).length();
            assert!(len >= 0.5 * r - 1e-9 && len <= r + 1e-9);
        }
    }
}

#[test]
fn color_modes_follow_configured_chances() {
    let config = ParallaxConfig::default();
    let sampler = ColorSampler::new(&config.colors);
    let mut rng = StdRng::seed_from_u64(42);
    let n = 20_000;
    let (mut gray, mut red, mut mixed) = (0usize, 0usize, 0usize);
    for _ in 0..n {
        match sampler.sample(&mut rng).mode {
            ColorMode::Gray => gray += 1,
            ColorMode::Red => red += 1,
            ColorMode::Mixed => mixed += 1,
        }
    }
    let frac = |c: usize| c as f64 / n as f64;
    let c = &config.colors;
    assert!((frac(gray) - c.gray_chance).abs() < 0.02);
    assert!((frac(red) - (c.red_chance - c.gray_chance)).abs() < 0.02);
    assert!((frac(mixed) - (1.0 - c.red_chance)).abs() < 0.02);
}

#[test]
fn gray_samples_stay_on_gray_gradient() {
    let config = ParallaxConfig::default();
    let sampler = ColorSampler::new(&config.colors);
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = 0;
    while seen < 100 {
        let sample = sampler.sample(&mut rng);
        if sample.mode != ColorMode::Gray {
            continue;
        }
        seen += 1;
        assert!(sample.color.starts_with("rgba("), "{}", sample.color);
        assert!(sample.color.ends_with(", 0.5)"), "{}", sample.color);
    }
}

#[test]
fn colors_format_like_css() {
    assert_eq!(Rgba::new(10.0, 20.0, 30.0, 1.0).to_string(), "rgb(10, 20, 30)");
    assert_eq!(
        Rgba::new(10.4, 20.6, 300.0, 0.25).to_string(),
        "rgba(10, 21, 255, 0.25)"
    );
    assert_eq!(Rgba::new(-4.0, 0.0, 0.0, 2.0).to_string(), "rgb(0, 0, 0)");
    let mid = Rgba::new(0.0, 0.0, 0.0, 0.0).lerp(Rgba::new(100.0, 50.0, 10.0, 1.0), 0.5);
    assert_eq!(mid, Rgba::new(50.0, 25.0, 5.0, 0.5));
}

#[test]
fn random_between_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1000 {
        let v = random_between(&mut rng, -2.0, 3.0);
        assert!((-2.0..3.0).contains(&v));
        let p = random_phase(&mut rng);
        assert!((0.0..std::f64::consts::TAU).contains(&p));
    }
    assert_eq!(random_between(&mut rng, 4.0, 4.0), 4.0);
}
