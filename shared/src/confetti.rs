use crate::constants::{
    CONFETTI_DURATION_MS, CONFETTI_FADE_MS, CONFETTI_WAVE_OFFSETS_MS, CONFETTI_WAVE_SIZE,
};
use crate::outcome_policy::RandomSource;

pub const CONFETTI_COLORS: [&str; 9] = [
    "#D4AF37", "#FFD700", "#B8860B", "#DAA520", "#F0E68C", "#FF6B6B", "#4ECDC4", "#FF4444", "#44FF44",
];

/// Particles this far below the bottom edge count as gone.
const OFFSCREEN_MARGIN: f64 = 100.0;
const WOBBLE_STRENGTH: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub gravity: f64,
    pub drag: f64,
    pub wobble: f64,
    pub wobble_speed: f64,
}

impl Particle {
    /// A particle somewhere above a viewport `viewport_width` wide.
    pub fn spawn(viewport_width: f64, source: &mut dyn RandomSource) -> Self {
        Self {
            x: source.next_unit() * viewport_width,
            y: -20.0 - source.next_unit() * 300.0,
            vx: (source.next_unit() - 0.5) * 8.0,
            vy: source.next_range(1.0, 3.0),
            width: source.next_range(4.0, 14.0),
            height: source.next_range(2.0, 8.0),
            color: CONFETTI_COLORS[source.next_index(CONFETTI_COLORS.len())],
            rotation: source.next_unit() * 360.0,
            rotation_speed: (source.next_unit() - 0.5) * 12.0,
            gravity: source.next_range(0.03, 0.05),
            drag: 0.99,
            wobble: source.next_unit() * 10.0,
            wobble_speed: source.next_range(0.05, 0.15),
        }
    }

    pub fn update(&mut self) {
        self.wobble += self.wobble_speed;
        self.vx += self.wobble.sin() * WOBBLE_STRENGTH;
        self.vx *= self.drag;
        self.vy += self.gravity;
        self.x += self.vx;
        self.y += self.vy;
        self.rotation += self.rotation_speed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStatus {
    Running { alpha: f64 },
    Finished,
}

/// Particle simulation for one confetti burst. The caller owns the frame loop
/// and the wave timers; this only advances physics one frame per `step`.
#[derive(Debug, Clone)]
pub struct ConfettiField {
    pub width: f64,
    pub height: f64,
    pub duration_ms: f64,
    particles: Vec<Particle>,
    waves_spawned: usize,
    active: bool,
}

impl ConfettiField {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_duration(width, height, CONFETTI_DURATION_MS as f64)
    }

    pub fn with_duration(width: f64, height: f64, duration_ms: f64) -> Self {
        Self {
            width,
            height,
            duration_ms,
            particles: Vec::new(),
            waves_spawned: 0,
            active: true,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn waves_remaining(&self) -> usize {
        CONFETTI_WAVE_OFFSETS_MS.len().saturating_sub(self.waves_spawned)
    }

    pub fn spawn_wave(&mut self, source: &mut dyn RandomSource) {
        if !self.active || self.waves_remaining() == 0 {
            return;
        }
        let width = self.width;
        self.particles
            .extend((0..CONFETTI_WAVE_SIZE).map(|_| Particle::spawn(width, source)));
        self.waves_spawned += 1;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.particles.clear();
    }

    /// Global opacity; fades to zero across the final second.
    pub fn alpha(&self, elapsed_ms: f64) -> f64 {
        let fade_start = self.duration_ms - CONFETTI_FADE_MS;
        if elapsed_ms > fade_start {
            ((self.duration_ms - elapsed_ms) / CONFETTI_FADE_MS).max(0.0)
        } else {
            1.0
        }
    }

    fn has_visible(&self) -> bool {
        self.particles
            .iter()
            .any(|particle| particle.y < self.height + OFFSCREEN_MARGIN)
    }

    /// Advances one frame. Once this returns `Finished` the caller must stop
    /// requesting frames.
    pub fn step(&mut self, elapsed_ms: f64) -> FrameStatus {
        if !self.active || elapsed_ms >= self.duration_ms {
            return FrameStatus::Finished;
        }
        if !self.has_visible() && self.waves_remaining() == 0 {
            return FrameStatus::Finished;
        }

        for particle in self.particles.iter_mut() {
            particle.update();
        }
        FrameStatus::Running { alpha: self.alpha(elapsed_ms) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FRAME_MS: f64 = 16.0;

    fn run_until_finished(field: &mut ConfettiField, rng: &mut StdRng) -> f64 {
        let mut elapsed = 0.0;
        loop {
            for (wave, offset) in CONFETTI_WAVE_OFFSETS_MS.iter().enumerate() {
                if wave == field.waves_spawned && elapsed >= *offset as f64 {
                    field.spawn_wave(rng);
                }
            }
            if field.step(elapsed) == FrameStatus::Finished {
                return elapsed;
            }
            elapsed += FRAME_MS;
        }
    }

    #[test]
    fn test_waves_are_capped() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ConfettiField::new(1280.0, 720.0);
        for _ in 0..5 {
            field.spawn_wave(&mut rng);
        }
        assert_eq!(field.particles().len(), CONFETTI_WAVE_SIZE * CONFETTI_WAVE_OFFSETS_MS.len());
        assert_eq!(field.waves_remaining(), 0);
    }

    #[test]
    fn test_particles_start_above_viewport() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut field = ConfettiField::new(800.0, 600.0);
        field.spawn_wave(&mut rng);
        for particle in field.particles() {
            assert!(particle.y < 0.0);
            assert!(particle.x >= 0.0 && particle.x <= 800.0);
            assert!(CONFETTI_COLORS.contains(&particle.color));
        }
    }

    #[test]
    fn test_stops_by_duration_on_tall_viewport() {
        let mut rng = StdRng::seed_from_u64(3);
        // Nothing can fall out of a viewport this tall in time.
        let mut field = ConfettiField::new(1000.0, 1_000_000.0);
        let finished_at = run_until_finished(&mut field, &mut rng);
        assert!(finished_at >= field.duration_ms);
        assert!(finished_at <= field.duration_ms + FRAME_MS);
    }

    #[test]
    fn test_stops_early_when_everything_fell_out() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut field = ConfettiField::with_duration(400.0, 10.0, 60_000.0);
        let finished_at = run_until_finished(&mut field, &mut rng);
        assert!(finished_at < field.duration_ms);
        // Every wave got its chance before the loop ended.
        assert_eq!(field.waves_remaining(), 0);
        assert!(field.particles().iter().all(|p| p.y >= field.height + OFFSCREEN_MARGIN));
    }

    #[test]
    fn test_deactivated_field_never_runs() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = ConfettiField::new(800.0, 600.0);
        field.spawn_wave(&mut rng);
        assert!(matches!(field.step(0.0), FrameStatus::Running { .. }));

        field.deactivate();
        assert_eq!(field.step(16.0), FrameStatus::Finished);
        field.spawn_wave(&mut rng);
        assert!(field.particles().is_empty());
        assert_eq!(field.step(32.0), FrameStatus::Finished);
    }

    #[test]
    fn test_alpha_fades_in_last_second() {
        let field = ConfettiField::new(800.0, 600.0);
        assert_eq!(field.alpha(0.0), 1.0);
        assert_eq!(field.alpha(6000.0), 1.0);
        assert!((field.alpha(6500.0) - 0.5).abs() < 1e-9);
        assert_eq!(field.alpha(7000.0), 0.0);
        assert_eq!(field.alpha(9000.0), 0.0);
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut particle = Particle::spawn(500.0, &mut rng);
        let start_y = particle.y;
        let start_vy = particle.vy;
        for _ in 0..10 {
            particle.update();
        }
        assert!(particle.vy > start_vy);
        assert!(particle.y > start_y);
    }
}
