//! Core state types for the orbital simulation.
//!
//! - `Body`   : one point mass, always in `f64`
//! - `System` : the ordered body sequence plus the current time `t`
//! - `Snapshot` / `BodyView` : owned `f32` copies handed to a renderer
//!
//! Ordering inside `System::bodies` matters: index 0 is the dominant central
//! mass and `bodies[massive_count..]` are asteroids.

use nalgebra::Vector3;
use serde::Deserialize;

pub type NVec3 = Vector3<f64>;

/// Display color. Carried through the physics untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const GRAY: Color = Color::rgb(130, 130, 130);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
    pub a: NVec3, // acceleration from the last force pass (m/s^2)
    pub m: f64, // mass (kg)
    pub radius: f64, // radius (m), display only
    pub color: Color,
}

impl Body {
    /// New gray body with zero acceleration.
    pub fn new(x: NVec3, v: NVec3, m: f64, radius: f64) -> Self {
        Self {
            x,
            v,
            a: NVec3::zeros(),
            m,
            radius,
            color: Color::GRAY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // massive bodies first, then asteroids
    pub massive_count: usize, // number of leading massive bodies
    pub t: f64, // elapsed time (s)
}

impl System {
    pub fn asteroid_count(&self) -> usize {
        self.bodies.len().saturating_sub(self.massive_count)
    }

    /// Massive bodies only (catalog entries).
    pub fn massive(&self) -> &[Body] {
        &self.bodies[..self.massive_count.min(self.bodies.len())]
    }

    /// Generated asteroids only.
    pub fn asteroids(&self) -> &[Body] {
        &self.bodies[self.massive_count.min(self.bodies.len())..]
    }
}

/// Single-precision view of one body for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub position: [f32; 3],
    pub velocity: [f32; 3],
    pub mass: f32,
    pub radius: f32,
    pub color: Color,
}

impl From<&Body> for BodyView {
    /// Narrowing `f64 -> f32` conversion. Lossy: positions of a few 1e12 m
    /// keep roughly 7 significant digits, which is plenty for drawing.
    fn from(b: &Body) -> Self {
        Self {
            position: narrow(&b.x),
            velocity: narrow(&b.v),
            mass: b.m as f32,
            radius: b.radius as f32,
            color: b.color,
        }
    }
}

fn narrow(v: &NVec3) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}

/// Owned copy of the whole system taken between two steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub elapsed_time: f64,
    pub time_step: f64,
    pub massive_count: usize,
    pub bodies: Vec<BodyView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_view_narrows_every_field() {
        let mut b = Body::new(NVec3::new(1.5e11, -2.0, 3.25), NVec3::new(0.0, 29_780.0, 0.0), 5.97e24, 6.371e6);
        b.color = Color::rgb(10, 20, 30);
        let view = BodyView::from(&b);

        assert_eq!(view.position, [1.5e11_f32, -2.0, 3.25]);
        assert_eq!(view.velocity[1], 29_780.0);
        assert_eq!(view.mass, 5.97e24_f32);
        assert_eq!(view.color, Color::rgb(10, 20, 30));
    }

    #[test]
    fn system_splits_massive_and_asteroids() {
        let body = Body::new(NVec3::zeros(), NVec3::zeros(), 1.0, 1.0);
        let sys = System {
            bodies: vec![body.clone(), body.clone(), body],
            massive_count: 1,
            t: 0.0,
        };
        assert_eq!(sys.massive().len(), 1);
        assert_eq!(sys.asteroids().len(), 2);
        assert_eq!(sys.asteroid_count(), 2);
    }
}
