// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use parallax_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_constants_are_well_formed() {
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
    assert!(OBSERVER_THRESHOLD > 0.0 && OBSERVER_THRESHOLD < 1.0);
    assert!(OBSERVER_ROOT_MARGIN.ends_with("px"));
    assert!(CONTAINER_SIZE_VAR.starts_with("--"));
    assert!(SVG_NS.starts_with("http://www.w3.org/"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn inner_dot_is_smaller_and_brighter() {
    assert!(DOT_INNER_RADIUS_RATIO > 0.0 && DOT_INNER_RADIUS_RATIO < 1.0);
    assert!(DOT_INNER_OPACITY_BOOST > 1.0);
    assert_ne!(DOT_OUTER_CLASS, DOT_INNER_CLASS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(DEFAULT_SIZE_MIN_PX <= DEFAULT_SIZE_MAX_PX);
    assert!(MIN_DOT_RADIUS_PX > 0.0 && MIN_DOT_RADIUS_PX <= DEFAULT_SIZE_MIN_PX);
    assert!(ORBIT_RADIUS_PX_MIN < ORBIT_RADIUS_PX_MAX);
    assert!(ORBIT_SPEED_RAD_MIN < ORBIT_SPEED_RAD_MAX);
    assert!(ORBIT_WOBBLE_SPEED_RAD_MIN < ORBIT_WOBBLE_SPEED_RAD_MAX);
    assert!(OPACITY_MIN < OPACITY_MAX && OPACITY_MAX <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn simulation_cools_down() {
    assert!(SIM_ALPHA > SIM_ALPHA_MIN);
    assert!(SIM_ALPHA_DECAY > 0.0 && SIM_ALPHA_DECAY < 1.0);
    assert!(VELOCITY_DECAY > 0.0 && VELOCITY_DECAY < 1.0);
    assert!(FORCE_STRENGTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn color_chances_partition_the_roll() {
    assert!(GRAY_CHANCE > 0.0);
    assert!(GRAY_CHANCE < RED_CHANCE);
    assert!(RED_CHANCE <= 1.0);
    for c in [GRAY_START, GRAY_END, RED_START, RED_END] {
        assert!(c[..3].iter().all(|v| (0.0..=255.0).contains(v)));
        assert!((0.0..=1.0).contains(&c[3]));
    }
}
