//! Reference star-system catalogs used to seed the massive bodies
//!
//! A catalog is an ordered table of `CatalogEntry` values. Entry 0 must be the
//! dominant mass; the asteroid belt is generated around it. Anything that can
//! hand out such a slice is a `BodyCatalog`, so a custom list of bodies read
//! from a scenario file plugs in the same way as the built-in tables.
//!
//! Built-in tables are barycentric states in SI units. The orbital plane is
//! XZ with +Y up, matching the asteroid generator.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::simulation::states::{Body, Color, NVec3};

/// One named body of a catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub position: [f64; 3], // m
    pub velocity: [f64; 3], // m/s
    pub mass: f64, // kg
    pub radius: f64, // m
    pub color: Color,
}

impl CatalogEntry {
    pub fn to_body(&self) -> Body {
        Body {
            x: NVec3::from(self.position),
            v: NVec3::from(self.velocity),
            a: NVec3::zeros(),
            m: self.mass,
            radius: self.radius,
            color: self.color,
        }
    }
}

/// Source of massive bodies for a simulation
pub trait BodyCatalog {
    /// Bodies converted to runtime state, dominant mass first
    fn bodies(&self) -> Vec<Body>;

    fn count(&self) -> usize {
        self.bodies().len()
    }
}

impl BodyCatalog for [CatalogEntry] {
    fn bodies(&self) -> Vec<Body> {
        self.iter().map(CatalogEntry::to_body).collect()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// Already-built bodies (e.g. from a scenario file)
impl BodyCatalog for [Body] {
    fn bodies(&self) -> Vec<Body> {
        self.iter()
            .map(|b| Body {
                a: NVec3::zeros(),
                ..b.clone()
            })
            .collect()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// Built-in star systems selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum StarSystem {
    #[default]
    #[serde(rename = "solar")]
    Solar,
    #[serde(rename = "alpha_centauri")]
    AlphaCentauri,
}

impl StarSystem {
    pub const ALL: [StarSystem; 2] = [StarSystem::Solar, StarSystem::AlphaCentauri];

    pub fn id(self) -> &'static str {
        match self {
            StarSystem::Solar => "solar",
            StarSystem::AlphaCentauri => "alpha_centauri",
        }
    }

    pub fn catalog(self) -> &'static [CatalogEntry] {
        match self {
            StarSystem::Solar => SOLAR_SYSTEM,
            StarSystem::AlphaCentauri => ALPHA_CENTAURI,
        }
    }
}

impl fmt::Display for StarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StarSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StarSystem::ALL
            .into_iter()
            .find(|sys| sys.id() == s)
            .ok_or_else(|| Error::UnknownSystem(s.to_string()))
    }
}

// Sun through Neptune plus the Moon. Circular orbits placed at the
// approximate heliocentric longitudes of 2022-01-01.
pub static SOLAR_SYSTEM: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Sun",
        position: [-1.264665254e9, 2.041648875e7, 5.706465587e8],
        velocity: [-7.029571895e0, -3.447749016e-1, -1.35535343e1],
        mass: 1.98847e30,
        radius: 6.957e8,
        color: Color::rgb(255, 253, 153),
    },
    CatalogEntry {
        name: "Mercury",
        position: [1.005579867e10, -6.950119466e9, -5.660418065e10],
        velocity: [4.714555023e4, 1.013103816e3, 8.251068442e3],
        mass: 3.3011e23,
        radius: 2.4397e6,
        color: Color::rgb(185, 180, 180),
    },
    CatalogEntry {
        name: "Venus",
        position: [-3.343839739e10, 6.085455118e9, 1.027327246e11],
        velocity: [-3.330716705e4, -6.399372362e2, -1.08032176e4],
        mass: 4.8675e24,
        radius: 6.0518e6,
        color: Color::rgb(230, 200, 140),
    },
    CatalogEntry {
        name: "Earth",
        position: [-2.597739763e10, 0.0, 1.473251429e11],
        velocity: [-2.933268298e4, 0.0, -5.172143426e3],
        mass: 5.97217e24,
        radius: 6.371e6,
        color: Color::rgb(80, 130, 220),
    },
    CatalogEntry {
        name: "Moon",
        position: [-2.568293015e10, 0.0, 1.475722305e11],
        velocity: [-2.998723588e4, 0.0, -4.392077659e3],
        mass: 7.342e22,
        radius: 1.7374e6,
        color: Color::rgb(200, 200, 200),
    },
    CatalogEntry {
        name: "Mars",
        position: [-1.274619462e11, -6.100518358e9, -1.888716092e11],
        velocity: [2.000447785e4, -4.356004188e2, -1.348615761e4],
        mass: 6.4171e23,
        radius: 3.3895e6,
        color: Color::rgb(210, 100, 60),
    },
    CatalogEntry {
        name: "Jupiter",
        position: [7.055401292e11, -7.464104736e9, -3.289140842e11],
        velocity: [5.520708562e3, 2.685998279e2, 1.183615042e4],
        mass: 1.89813e27,
        radius: 6.9911e7,
        color: Color::rgb(210, 170, 120),
    },
    CatalogEntry {
        name: "Saturn",
        position: [9.404846008e11, -4.700333091e10, -1.08088226e12],
        velocity: [7.262730282e3, 2.742855763e2, 6.307434129e3],
        mass: 5.6834e26,
        radius: 5.8232e7,
        color: Color::rgb(225, 200, 150),
    },
    CatalogEntry {
        name: "Uranus",
        position: [2.133547712e12, 2.581634857e10, 1.920881513e12],
        velocity: [-4.549548589e3, 6.790251975e1, 5.052329321e3],
        mass: 8.681e25,
        radius: 2.5362e7,
        color: Color::rgb(170, 220, 230),
    },
    CatalogEntry {
        name: "Neptune",
        position: [4.454629775e12, -1.933729394e10, -6.257586761e11],
        velocity: [7.559611045e2, 1.661416338e2, 5.376376299e3],
        mass: 1.02413e26,
        radius: 2.4622e7,
        color: Color::rgb(80, 110, 220),
    },
];

// Alpha Centauri A/B on a 23.5 AU circular binary, Proxima at 13000 AU.
pub static ALPHA_CENTAURI: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Alpha Centauri A",
        position: [1.04354384e14, 0.0, 3.768477724e13],
        velocity: [1.973501391e3, 0.0, -3.410578756e3],
        mass: 2.145161436e30,
        radius: 8.4701475e8,
        color: Color::rgb(255, 240, 200),
    },
    CatalogEntry {
        name: "Alpha Centauri B",
        position: [1.073989396e14, 0.0, 3.944255222e13],
        velocity: [-2.35805468e3, 0.0, 4.091896435e3],
        mass: 1.807916924e30,
        radius: 5.9767587e8,
        color: Color::rgb(255, 200, 120),
    },
    CatalogEntry {
        name: "Proxima Centauri",
        position: [-1.721741404e15, 0.0, -6.266626221e14],
        velocity: [1.222769359e2, 0.0, -3.359531202e2],
        mass: 2.42792187e29,
        radius: 1.0727694e8,
        color: Color::rgb(230, 80, 60),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_body_comes_first() {
        for sys in StarSystem::ALL {
            let cat = sys.catalog();
            assert!(!cat.is_empty());
            let heaviest = cat.iter().map(|e| e.mass).fold(0.0, f64::max);
            assert_eq!(cat[0].mass, heaviest, "{sys}: entry 0 is not the heaviest");
        }
    }

    #[test]
    fn catalogs_are_physical() {
        for sys in StarSystem::ALL {
            for e in sys.catalog() {
                assert!(e.mass > 0.0 && e.radius > 0.0, "{}", e.name);
                assert!(e.position.iter().chain(e.velocity.iter()).all(|c| c.is_finite()), "{}", e.name);
            }
        }
    }

    #[test]
    fn built_in_catalogs_are_barycentric() {
        for sys in StarSystem::ALL {
            let bodies = sys.catalog().bodies();
            let m: f64 = bodies.iter().map(|b| b.m).sum();
            let p = bodies.iter().fold(NVec3::zeros(), |acc, b| acc + b.m * b.v);
            // momentum per unit mass, i.e. barycentre drift speed
            assert!((p / m).norm() < 1e-3, "{sys}: drift {:?}", p / m);
        }
    }

    #[test]
    fn system_ids_round_trip() {
        for sys in StarSystem::ALL {
            assert_eq!(sys.id().parse::<StarSystem>().unwrap(), sys);
        }
        assert!(matches!("vega".parse::<StarSystem>(), Err(Error::UnknownSystem(_))));
    }

    #[test]
    fn solar_system_has_ten_bodies() {
        let cat = StarSystem::Solar.catalog();
        assert_eq!(cat.count(), 10);
        assert_eq!(cat[0].name, "Sun");
        assert!(cat.iter().any(|e| e.name == "Moon"));
    }
}
