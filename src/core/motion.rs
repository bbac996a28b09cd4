//! Decorative motion parameters: background particles and floating cards.
//!
//! Values come from a seeded generator rather than a random source so the
//! server-rendered markup matches what the client hydrates.

/// Linear congruential generator (Numerical Recipes constants)
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`
    pub fn next_f32(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.state >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Next value in `[min, max)`
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_SEED: u32 = 0x5EED_A61;
pub const PARTICLE_COLORS: [&str; 5] = ["#3B82F6", "#A855F7", "#22C55E", "#EAB308", "#06B6D4"];

/// A glowing dot streaming left to right behind the model training panel
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Start height in px
    pub y: f32,
    pub color: &'static str,
    /// Seconds per cycle
    pub duration: f32,
    /// Seconds before the first cycle
    pub delay: f32,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "top: {:.1}px; background-color: {}; box-shadow: 0 0 10px {}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.y, self.color, self.color, self.duration, self.delay
        )
    }
}

/// The particle field, identical on every call
pub fn particles() -> Vec<Particle> {
    let mut rng = SeededRng::new(PARTICLE_SEED);
    (0..PARTICLE_COUNT)
        .map(|_| {
            let y = rng.range(0.0, 300.0);
            let color_index = (rng.next_f32() * PARTICLE_COLORS.len() as f32) as usize;
            Particle {
                y,
                color: PARTICLE_COLORS[color_index.min(PARTICLE_COLORS.len() - 1)],
                duration: rng.range(3.0, 8.0),
                delay: rng.range(0.0, 5.0),
            }
        })
        .collect()
}

pub const FLOAT_SEED: u32 = 0xF10A7;

/// Vertical bobbing of one testimonial card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    /// +1 for even cards, -1 for odd cards
    pub direction: f32,
    /// Radians per second, 0.2..0.5
    pub speed: f32,
    /// Peak offset in px, 5..10
    pub amplitude: f32,
    /// Seconds before the phase starts, 0..2
    pub delay: f32,
}

impl FloatMotion {
    /// Parameters for the card at `index`
    pub fn for_index(index: usize) -> Self {
        let mut rng = SeededRng::new(FLOAT_SEED ^ (index as u32).wrapping_mul(0x9E37_79B9));
        Self {
            direction: if index % 2 == 0 { 1.0 } else { -1.0 },
            speed: rng.range(0.2, 0.5),
            delay: rng.range(0.0, 2.0),
            amplitude: rng.range(5.0, 10.0),
        }
    }

    /// Vertical offset in px, `elapsed` seconds after mount
    pub fn offset(&self, elapsed: f64) -> f32 {
        let t = elapsed as f32 - self.delay;
        (t * self.speed).sin() * self.amplitude * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_stays_in_unit_interval() {
        let mut rng = SeededRng::new(1);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_rng_is_deterministic() {
        let a: Vec<f32> = {
            let mut rng = SeededRng::new(42);
            (0..5).map(|_| rng.next_f32()).collect()
        };
        let b: Vec<f32> = {
            let mut rng = SeededRng::new(42);
            (0..5).map(|_| rng.next_f32()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_particles_within_ranges() {
        let field = particles();
        assert_eq!(field.len(), PARTICLE_COUNT);
        for p in &field {
            assert!((0.0..300.0).contains(&p.y));
            assert!((3.0..8.0).contains(&p.duration));
            assert!((0.0..5.0).contains(&p.delay));
            assert!(PARTICLE_COLORS.contains(&p.color));
        }
        assert_eq!(field, particles());
    }

    #[test]
    fn test_particle_style() {
        let p = Particle {
            y: 12.0,
            color: "#3B82F6",
            duration: 4.0,
            delay: 0.5,
        };
        assert_eq!(
            p.style(),
            "top: 12.0px; background-color: #3B82F6; box-shadow: 0 0 10px #3B82F6; animation-duration: 4.00s; animation-delay: 0.50s;"
        );
    }

    #[test]
    fn test_float_motion_ranges() {
        for i in 0..32 {
            let m = FloatMotion::for_index(i);
            assert!((0.2..0.5).contains(&m.speed));
            assert!((5.0..10.0).contains(&m.amplitude));
            assert!((0.0..2.0).contains(&m.delay));
            assert_eq!(m.direction, if i % 2 == 0 { 1.0 } else { -1.0 });
            assert_eq!(m, FloatMotion::for_index(i));
        }
    }

    #[test]
    fn test_float_offset_bounded_and_signed() {
        let m = FloatMotion {
            direction: -1.0,
            speed: 0.5,
            amplitude: 8.0,
            delay: 0.0,
        };
        assert_eq!(m.offset(0.0), 0.0);
        // sin(pi/2) at t = pi
        assert!((m.offset(std::f64::consts::PI) + 8.0).abs() < 1e-4);
        for step in 0..200 {
            assert!(m.offset(step as f64 * 0.37).abs() <= 8.0 + 1e-4);
        }
    }
}
