// The full particle population and its per-frame simulation step.
// The field is spawned once at mount time and never grows or shrinks;
// a surface resize only changes the bounds later steps wrap against.

use rand::Rng;

use crate::particle::{self, Particle};
use crate::surface::Bounds;

pub const PARTICLE_COUNT: usize = 50;

pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn spawn<R: Rng>(rng: &mut R, bounds: Bounds) -> ParticleField {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(rng, bounds))
            .collect();
        ParticleField { particles }
    }

    // Advances every particle by one tick. Particles are independent, so
    // iteration order carries no meaning here.
    pub fn step(&mut self, bounds: Bounds) {
        for p in &mut self.particles {
            let (x, y) = particle::advance(p, bounds);
            p.x = x;
            p.y = y;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn from_particles(particles: Vec<Particle>) -> ParticleField {
        ParticleField { particles }
    }
}
