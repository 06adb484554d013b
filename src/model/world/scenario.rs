//! Named scenario presets seeding the live collection.
//!
//! Each preset replaces the body collection wholesale and fixes the
//! initial camera zoom. Orbital velocities use the circular-orbit
//! approximation `sqrt(G*M/d)` around the dominant mass.

use crate::model::body::Body;
use crate::model::config::AppConfig;
use crate::model::stage::Stage;
use crate::model::world::evolve_body;
use crate::model::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Playground,
    SolarSystem,
    BinaryStars,
    BlackHoleCenter,
    BinaryBlackHoles,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Playground,
        Scenario::SolarSystem,
        Scenario::BinaryStars,
        Scenario::BlackHoleCenter,
        Scenario::BinaryBlackHoles,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace([' ', '_'], "-").as_str() {
            "playground" => Some(Scenario::Playground),
            "solar-system" => Some(Scenario::SolarSystem),
            "binary-stars" | "binary-star-system" => Some(Scenario::BinaryStars),
            "black-hole-center" => Some(Scenario::BlackHoleCenter),
            "binary-black-holes" => Some(Scenario::BinaryBlackHoles),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Scenario::Playground => "Playground",
            Scenario::SolarSystem => "Solar System",
            Scenario::BinaryStars => "Binary Star System",
            Scenario::BlackHoleCenter => "Black Hole Center",
            Scenario::BinaryBlackHoles => "Binary Black Holes",
        }
    }

    /// Builds the preset's bodies (centered on the world origin) and its
    /// initial camera zoom.
    pub fn build(self, config: &AppConfig, rng: &mut ChaCha8Rng) -> (Vec<Body>, f64) {
        let g = config.physics.gravity;
        let mut bodies = Vec::new();
        let zoom = match self {
            Scenario::Playground => 1.0,
            Scenario::SolarSystem => {
                let sun_mass = 500_000.0;
                bodies.push(settled(Body::new(
                    Vec2::zeros(),
                    Vec2::zeros(),
                    sun_mass,
                    (255, 255, 0),
                ), config));
                // The 500k sun's radius is ~79.4; the innermost orbit sits
                // clear of it.
                let planets: [(f64, f64, (u8, u8, u8)); 8] = [
                    (100.0, 5.0, (169, 169, 169)),
                    (120.0, 10.0, (218, 165, 32)),
                    (160.0, 12.0, (0, 191, 255)),
                    (200.0, 8.0, (255, 69, 0)),
                    (300.0, 500.0, (210, 180, 140)),
                    (400.0, 300.0, (240, 230, 140)),
                    (500.0, 100.0, (173, 216, 230)),
                    (580.0, 90.0, (0, 0, 205)),
                ];
                for (dist, mass, color) in planets {
                    let angle = rng.gen_range(0.0..TAU);
                    bodies.push(orbiting(g, sun_mass, dist, angle, mass, color, config));
                }
                0.8
            }
            Scenario::BinaryStars => {
                let (m1, m2) = (300_000.0, 200_000.0);
                let total = m1 + m2;
                let dist = 400.0;
                let (r1, r2) = (dist * m2 / total, dist * m1 / total);
                // Reference formulation; not the textbook two-body speed.
                let vel_base = (g / (dist * total)).sqrt();
                let (v1, v2) = (m2 * vel_base, m1 * vel_base);
                bodies.push(settled(Body::new(
                    Vec2::new(-r1, 0.0),
                    Vec2::new(0.0, v1),
                    m1,
                    (255, 255, 200),
                ), config));
                bodies.push(settled(Body::new(
                    Vec2::new(r2, 0.0),
                    Vec2::new(0.0, -v2),
                    m2,
                    (255, 165, 100),
                ), config));
                let planets: [(f64, f64, (u8, u8, u8)); 3] = [
                    (700.0, 500.0, (173, 216, 230)),
                    (850.0, 800.0, (144, 238, 144)),
                    (1000.0, 600.0, (218, 112, 214)),
                ];
                for (idx, (dist, mass, color)) in planets.into_iter().enumerate() {
                    let angle = TAU / planets.len() as f64 * idx as f64;
                    bodies.push(orbiting(g, total, dist, angle, mass, color, config));
                }
                0.5
            }
            Scenario::BlackHoleCenter => {
                let bh_mass = 2_000_000.0;
                bodies.push(
                    Body::new(Vec2::zeros(), Vec2::zeros(), bh_mass, (0, 0, 0))
                        .with_stage(Stage::BlackHole),
                );
                let planets: [(f64, f64, (u8, u8, u8)); 5] = [
                    (200.0, 300.0, (255, 69, 0)),
                    (350.0, 500.0, (221, 160, 221)),
                    (500.0, 400.0, (100, 149, 237)),
                    (600.0, 100.0, (240, 230, 140)),
                    (750.0, 800.0, (32, 178, 170)),
                ];
                for (idx, (dist, mass, color)) in planets.into_iter().enumerate() {
                    let angle = TAU / planets.len() as f64 * idx as f64;
                    bodies.push(orbiting(g, bh_mass, dist, angle, mass, color, config));
                }
                0.6
            }
            Scenario::BinaryBlackHoles => {
                let mass = 2_000_000.0;
                let distance = 400.0;
                let orbital_v = (g * mass / (2.0 * distance)).sqrt();
                bodies.push(
                    Body::new(
                        Vec2::new(-distance / 2.0, 0.0),
                        Vec2::new(0.0, orbital_v),
                        mass,
                        (0, 0, 0),
                    )
                    .with_stage(Stage::BlackHole),
                );
                bodies.push(
                    Body::new(
                        Vec2::new(distance / 2.0, 0.0),
                        Vec2::new(0.0, -orbital_v),
                        mass,
                        (0, 0, 0),
                    )
                    .with_stage(Stage::BlackHole),
                );
                1.0
            }
        };
        (bodies, zoom)
    }
}

/// Circular-orbit speed around a central mass.
pub fn circular_velocity(g: f64, central_mass: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }
    (g * central_mass / distance).sqrt()
}

fn orbiting(
    g: f64,
    central_mass: f64,
    dist: f64,
    angle: f64,
    mass: f64,
    color: (u8, u8, u8),
    config: &AppConfig,
) -> Body {
    let vel = circular_velocity(g, central_mass, dist);
    let position = Vec2::new(dist * angle.cos(), dist * angle.sin());
    let velocity = Vec2::new(-vel * angle.sin(), vel * angle.cos());
    settled(Body::new(position, velocity, mass, color), config)
}

/// Preset bodies settle into the stage their mass dictates at creation.
fn settled(mut body: Body, config: &AppConfig) -> Body {
    evolve_body(&mut body, &config.evolution, &mut Vec::new());
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_from_name_accepts_titles_and_slugs() {
        assert_eq!(Scenario::from_name("Solar System"), Some(Scenario::SolarSystem));
        assert_eq!(Scenario::from_name("binary-black-holes"), Some(Scenario::BinaryBlackHoles));
        assert_eq!(Scenario::from_name("nope"), None);
    }

    #[test]
    fn test_black_hole_center_has_a_black_hole() {
        let config = AppConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let (bodies, zoom) = Scenario::BlackHoleCenter.build(&config, &mut rng);
        assert_eq!(bodies.len(), 6);
        assert_eq!(bodies[0].stage, Stage::BlackHole);
        assert_eq!(zoom, 0.6);
    }

    #[test]
    fn test_solar_system_sun_ignites() {
        let config = AppConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let (bodies, _) = Scenario::SolarSystem.build(&config, &mut rng);
        assert_eq!(bodies[0].stage, Stage::Star);
        assert_eq!(bodies.len(), 9);
    }
}
