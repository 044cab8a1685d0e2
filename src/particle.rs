// Simple particle struct to keep track of individual position, velocity,
// size, and opacity. Velocity, size, and opacity are fixed at spawn time;
// only the position ever changes.

use rand::Rng;

use crate::surface::Bounds;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    // Spawn parameter ranges, chosen for a slow dim drift.
    pub const SIZE_MIN: f64 = 1.0;
    pub const SIZE_MAX: f64 = 3.0;
    pub const SPEED_MAX: f64 = 0.25;
    pub const OPACITY_MIN: f64 = 0.2;
    pub const OPACITY_MAX: f64 = 0.7;

    pub fn spawn<R: Rng>(rng: &mut R, bounds: Bounds) -> Particle {
        Particle {
            x: rng.gen::<f64>() * bounds.width,
            y: rng.gen::<f64>() * bounds.height,
            vx: rng.gen::<f64>() * Self::SPEED_MAX * 2.0 - Self::SPEED_MAX,
            vy: rng.gen::<f64>() * Self::SPEED_MAX * 2.0 - Self::SPEED_MAX,
            size: rng.gen::<f64>() * (Self::SIZE_MAX - Self::SIZE_MIN) + Self::SIZE_MIN,
            opacity: rng.gen::<f64>() * (Self::OPACITY_MAX - Self::OPACITY_MIN)
                + Self::OPACITY_MIN,
        }
    }
}

// One constant-velocity step with wrap-around at the surface edges.
// Crossing an edge teleports to the opposite edge exactly (0 or the full
// bound), never a modulo remainder, matching the surface's visual seam.
pub fn advance(p: &Particle, bounds: Bounds) -> (f64, f64) {
    let mut x = p.x + p.vx;
    let mut y = p.y + p.vy;

    if x > bounds.width {
        x = 0.0;
    }
    if x < 0.0 {
        x = bounds.width;
    }
    if y > bounds.height {
        y = 0.0;
    }
    if y < 0.0 {
        y = bounds.height;
    }

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            size: 2.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn drifts_by_velocity() {
        let p = at(100.0, 200.0, 0.1, -0.2);
        assert_eq!(advance(&p, Bounds::new(800.0, 600.0)), (100.1, 199.8));
    }

    #[test]
    fn wraps_right_edge_to_zero() {
        // 799.9 + 0.2 crosses the right edge and lands exactly at 0,
        // not at the 0.1 remainder.
        let p = at(799.9, 300.0, 0.2, 0.0);
        assert_eq!(advance(&p, Bounds::new(800.0, 600.0)), (0.0, 300.0));
    }

    #[test]
    fn wraps_left_edge_to_full_width() {
        let p = at(0.1, 300.0, -0.25, 0.0);
        assert_eq!(advance(&p, Bounds::new(800.0, 600.0)), (800.0, 300.0));
    }

    #[test]
    fn wraps_vertically_both_ways() {
        let bounds = Bounds::new(800.0, 600.0);
        let down = at(400.0, 599.9, 0.0, 0.2);
        assert_eq!(advance(&down, bounds), (400.0, 0.0));
        let up = at(400.0, 0.05, 0.0, -0.1);
        assert_eq!(advance(&up, bounds), (400.0, 600.0));
    }

    #[test]
    fn spawn_respects_parameter_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(800.0, 600.0);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, bounds);
            assert!(p.x >= 0.0 && p.x < bounds.width);
            assert!(p.y >= 0.0 && p.y < bounds.height);
            assert!(p.size >= Particle::SIZE_MIN && p.size < Particle::SIZE_MAX);
            assert!(p.vx >= -Particle::SPEED_MAX && p.vx < Particle::SPEED_MAX);
            assert!(p.vy >= -Particle::SPEED_MAX && p.vy < Particle::SPEED_MAX);
            assert!(p.opacity >= Particle::OPACITY_MIN && p.opacity < Particle::OPACITY_MAX);
        }
    }
}
