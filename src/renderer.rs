// Render step: clears the surface, draws every particle as a filled dot,
// then strokes a faint line between every pair of particles close enough
// to each other, fading with distance.

use crate::field::ParticleField;
use crate::surface::{Bounds, Surface};

// Pairs closer than this get a connection line.
pub const CONNECT_DISTANCE: f64 = 150.0;
pub const LINE_WIDTH: f64 = 0.5;
const LINE_ALPHA_MAX: f64 = 0.1;

// Line alpha for a pair at distance d, or None when too far apart.
// Falls off linearly from LINE_ALPHA_MAX at d = 0 to zero at the cutoff.
pub fn connection_alpha(distance: f64) -> Option<f64> {
    if distance < CONNECT_DISTANCE {
        Some(LINE_ALPHA_MAX * (1.0 - distance / CONNECT_DISTANCE))
    } else {
        None
    }
}

pub fn render<S: Surface>(surface: &mut S, field: &ParticleField, bounds: Bounds) {
    surface.clear(bounds);

    let particles = field.particles();
    for p in particles {
        surface.fill_circle(p.x, p.y, p.size, p.opacity);
    }

    // Every unordered pair is checked: 1225 distance checks per frame at
    // 50 particles. Cheap enough at this population that a spatial index
    // would only add code; revisit if the count ever grows.
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let (p1, p2) = (&particles[i], &particles[j]);
            let dx = p1.x - p2.x;
            let dy = p1.y - p2.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if let Some(alpha) = connection_alpha(distance) {
                surface.stroke_line(p1.x, p1.y, p2.x, p2.y, LINE_WIDTH, alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use crate::surface::{DrawCall, RecordingSurface};

    fn dot(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 2.0,
            opacity: 0.5,
        }
    }

    fn render_pair(x2: f64) -> Vec<DrawCall> {
        let field = ParticleField::from_particles(vec![dot(0.0, 0.0), dot(x2, 0.0)]);
        let mut surface = RecordingSurface::default();
        render(&mut surface, &field, Bounds::new(800.0, 600.0));
        surface.calls
    }

    fn line_count(calls: &[DrawCall]) -> usize {
        calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count()
    }

    #[test]
    fn clears_before_any_drawing() {
        let calls = render_pair(100.0);
        assert_eq!(
            calls[0],
            DrawCall::Clear {
                width: 800.0,
                height: 600.0
            }
        );
    }

    #[test]
    fn draws_one_circle_per_particle_with_own_size_and_opacity() {
        let calls = render_pair(100.0);
        let circles: Vec<_> = calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .collect();
        assert_eq!(circles.len(), 2);
        assert_eq!(
            circles[0],
            &DrawCall::Circle {
                x: 0.0,
                y: 0.0,
                radius: 2.0,
                alpha: 0.5
            }
        );
    }

    #[test]
    fn connects_pairs_inside_the_cutoff_only() {
        assert_eq!(line_count(&render_pair(149.0)), 1);
        assert_eq!(line_count(&render_pair(150.0)), 0);
        assert_eq!(line_count(&render_pair(400.0)), 0);
    }

    #[test]
    fn connection_alpha_matches_distance_falloff() {
        // 0.1 * (1 - 100/150) = 1/30
        let calls = render_pair(100.0);
        match calls.last() {
            Some(DrawCall::Line { width, alpha, .. }) => {
                assert!((alpha - 1.0 / 30.0).abs() < 1e-12);
                assert_eq!(*width, LINE_WIDTH);
            }
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn connection_alpha_strictly_decreases_with_distance() {
        let mut last = f64::INFINITY;
        for d in (0..150).map(f64::from) {
            let alpha = connection_alpha(d).unwrap();
            assert!(alpha < last);
            assert!(alpha > 0.0 && alpha <= 0.1);
            last = alpha;
        }
        assert_eq!(connection_alpha(150.0), None);
    }

    #[test]
    fn checks_every_unordered_pair() {
        // Three mutually-close particles produce all three pair lines.
        let field = ParticleField::from_particles(vec![
            dot(0.0, 0.0),
            dot(10.0, 0.0),
            dot(0.0, 10.0),
        ]);
        let mut surface = RecordingSurface::default();
        render(&mut surface, &field, Bounds::new(800.0, 600.0));
        assert_eq!(line_count(&surface.calls), 3);
    }
}
