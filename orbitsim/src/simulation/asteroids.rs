//! Asteroid belt generator
//!
//! Every asteroid lands in the XZ plane on a roughly circular orbit around the
//! origin. The radial distance follows a logit-shaped spread combined with
//! disk point picking (`r ~ sqrt(|l|)`), the orbital speed is the circular
//! speed around `center_mass` scaled by a random factor, and a small vertical
//! velocity puffs the belt up out of the plane.

use std::f64::consts::TAU;

use crate::error::{Error, Result};
use crate::simulation::sampling::Sampler;
use crate::simulation::states::{Body, Color, NVec3};

/// Shape of the generated belt
///
/// The gravitational constant is not part of the shape: it comes from the
/// run's `Parameters` so the asteroids start on orbits the force pass agrees with.
#[derive(Debug, Clone)]
pub struct AsteroidBelt {
    pub mean_radius: f64, // m
    pub mass: f64, // kg, per asteroid
    pub radius: f64, // m, per asteroid
    pub color: Color,
    pub speed_jitter: (f64, f64), // multiplier range on the circular speed
    pub vertical_speed: f64, // |vy| bound (m/s)
}

impl Default for AsteroidBelt {
    fn default() -> Self {
        Self {
            mean_radius: 4e11,
            mass: 1e12, // about a billion tons
            radius: 2e3,
            color: Color::GRAY,
            speed_jitter: (0.6, 1.2),
            vertical_speed: 1e2,
        }
    }
}

impl AsteroidBelt {
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.mean_radius) || !positive(self.mass) || !positive(self.radius) {
            return Err(Error::InvalidParam(
                "asteroid mean_radius, mass and radius must be finite and > 0".into(),
            ));
        }
        let (lo, hi) = self.speed_jitter;
        if !(lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo <= hi) {
            return Err(Error::InvalidParam(format!("bad asteroid speed_jitter [{lo}, {hi}]")));
        }
        if !self.vertical_speed.is_finite() || self.vertical_speed < 0.0 {
            return Err(Error::InvalidParam("asteroid vertical_speed must be finite and >= 0".into()));
        }
        Ok(())
    }

    /// Generate one asteroid orbiting `center_mass` under gravitational constant `G`.
    ///
    /// Draw order is fixed (x, phi, jitter, vy) so a seeded sampler always
    /// yields the same belt.
    #[allow(non_snake_case)]
    pub fn configure_asteroid(&self, sampler: &mut Sampler, G: f64, center_mass: f64) -> Body {
        // x is kept off 0 and 1 so both logs stay finite
        let x = sampler.uniform(0.001, 0.999);
        let phi = sampler.uniform(0.0, TAU);
        let jitter = sampler.uniform(self.speed_jitter.0, self.speed_jitter.1);
        let vy = sampler.uniform(-self.vertical_speed, self.vertical_speed);

        self.place_asteroid(x, phi, jitter, vy, G * center_mass)
    }

    /// Turn one set of draws into a body; `gm` is G times the central mass
    fn place_asteroid(&self, x: f64, phi: f64, jitter: f64, vy: f64, gm: f64) -> Body {
        // Logit distribution
        let l = x.ln() - (1.0 - x).ln() + 1.0;
        let r = self.mean_radius * l.abs().sqrt();

        // r == 0 only when l == 0; such a body sits at the origin with no orbital speed
        let v = if r > 0.0 { (gm / r).sqrt() * jitter } else { 0.0 };

        let (sin_phi, cos_phi) = phi.sin_cos();
        Body {
            x: NVec3::new(r * cos_phi, 0.0, r * sin_phi),
            v: NVec3::new(-v * sin_phi, vy, v * cos_phi),
            a: NVec3::zeros(),
            m: self.mass,
            radius: self.radius,
            color: self.color,
        }
    }
}
