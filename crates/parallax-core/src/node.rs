use crate::color::ColorSampler;
use crate::config::ParallaxConfig;
use crate::layer_config::LayerConfig;
use crate::random::{random_between, random_phase};
use glam::DVec2;
use rand::Rng;

/// Circular micro-motion drawn on top of a dot's simulated position. All
/// parameters are fixed at spawn time, so [`Orbit::offset`] is a pure
/// function of elapsed time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orbit {
    pub radius_px: f64,
    /// Angular speed in rad/s; a negative value reverses the direction.
    pub speed_rad: f64,
    pub phase: f64,
    pub wobble_speed_rad: f64,
    pub wobble_phase: f64,
}

impl Orbit {
    /// Displacement at `t` seconds. The radius breathes between 50% and 100%
    /// of `radius_px`.
    #[inline]
    pub fn offset(&self, t: f64) -> DVec2 {
        let angle = self.phase + self.speed_rad * t;
        let wobble = 0.75 + 0.25 * (self.wobble_phase + self.wobble_speed_rad * t).sin();
        let r = self.radius_px * wobble;
        DVec2::new(angle.cos() * r, angle.sin() * r)
    }
}

/// One simulated particle.
#[derive(Clone, Debug, PartialEq)]
pub struct DotNode {
    pub pos: DVec2,
    pub vel: DVec2,
    pub r: f64,
    pub color: String,
    pub opacity: f64,
    pub orbit: Orbit,
}

impl DotNode {
    /// Spawn a dot uniformly inside `size` with attributes drawn from the
    /// layer and global configuration.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        size: DVec2,
        layer: &LayerConfig,
        config: &ParallaxConfig,
        colors: &ColorSampler,
    ) -> Self {
        let pos = DVec2::new(rng.gen::<f64>() * size.x, rng.gen::<f64>() * size.y);
        let r = layer.radius(random_between(rng, layer.size_min, layer.size_max));
        let color = colors.sample(rng).color;
        let opacity = random_between(rng, config.opacity.min, config.opacity.max).clamp(0.0, 1.0);
        let o = &config.orbit;
        let orbit = Orbit {
            radius_px: random_between(rng, o.radius_px.0, o.radius_px.1),
            speed_rad: random_between(rng, o.speed_rad.0, o.speed_rad.1),
            phase: random_phase(rng),
            wobble_speed_rad: random_between(rng, o.wobble_speed_rad.0, o.wobble_speed_rad.1),
            wobble_phase: random_phase(rng),
        };
        Self {
            pos,
            vel: DVec2::ZERO,
            r,
            color,
            opacity,
            orbit,
        }
    }

    /// Where the dot is drawn at `t` seconds: simulated position plus orbit.
    #[inline]
    pub fn screen_position(&self, t: f64) -> DVec2 {
        self.pos + self.orbit.offset(t)
    }
}

/// Wrap `pos` toroidally inside `[-padding, size + padding]` on both axes. A
/// coordinate past one edge reappears at the opposite edge.
#[inline]
pub fn wrap_position(pos: &mut DVec2, size: DVec2, padding: f64) {
    if pos.x < -padding {
        pos.x = size.x + padding;
    }
    if pos.x > size.x + padding {
        pos.x = -padding;
    }
    if pos.y < -padding {
        pos.y = size.y + padding;
    }
    if pos.y > size.y + padding {
        pos.y = -padding;
    }
}
