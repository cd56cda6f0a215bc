//! Decorative background: rising bubbles, drifting particles with pointer
//! parallax, slow floating shapes, and a dot following the pointer.
//!
//! Purely cosmetic. Positions are in terminal cells; the UI samples them each frame.

use rand::Rng;
use std::time::{Duration, Instant};

pub const BUBBLE_COUNT: usize = 20;
pub const PARTICLE_COUNT: usize = 30;
pub const SHAPE_COUNT: usize = 10;
/// Largest per-step particle velocity on either axis.
pub const MAX_VELOCITY: f64 = 0.25;
/// Largest horizontal drift of a floating shape, either way.
pub const DRIFT_COLUMNS: f64 = 20.0;
/// Largest vertical drift of a floating shape, either way.
pub const DRIFT_ROWS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    /// Nominal diameter, 20 to 80.
    pub size: f64,
    /// Horizontal position as a percentage of the width.
    pub left_percent: f64,
    /// Time for one rise from the bottom edge to the top.
    pub duration: Duration,
    /// Time before the first rise begins.
    pub delay: Duration,
}

impl Bubble {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: rng.random_range(20.0..80.0),
            left_percent: rng.random_range(0.0..100.0),
            duration: Duration::from_secs_f64(rng.random_range(15.0..25.0)),
            delay: Duration::from_secs_f64(rng.random_range(0.0..5.0)),
        }
    }

    /// Fraction of the rise completed after `elapsed`, wrapping each cycle.
    /// `None` while still waiting out the start delay.
    pub fn rise_at(&self, elapsed: Duration) -> Option<f64> {
        let running = elapsed.checked_sub(self.delay)?;
        let cycle = self.duration.as_secs_f64();
        if cycle <= 0.0 {
            return Some(0.0);
        }
        Some((running.as_secs_f64() % cycle) / cycle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];
}

/// A shape drifting toward a fixed offset and back, forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub left_percent: f64,
    pub top_percent: f64,
    /// Offset in cells at the far end of the drift.
    pub drift: (f64, f64),
    /// Time for one leg of the drift.
    pub duration: Duration,
    pub delay: Duration,
}

impl FloatingShape {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            kind: ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())],
            left_percent: rng.random_range(0.0..100.0),
            top_percent: rng.random_range(0.0..100.0),
            drift: (
                rng.random_range(-DRIFT_COLUMNS..DRIFT_COLUMNS),
                rng.random_range(-DRIFT_ROWS..DRIFT_ROWS),
            ),
            duration: Duration::from_secs_f64(rng.random_range(10.0..30.0)),
            delay: Duration::from_secs_f64(rng.random_range(0.0..5.0)),
        }
    }

    /// Fraction of the drift covered after `elapsed`: out to 1.0 and back to
    /// 0.0 in linear legs. Stays at 0.0 during the start delay.
    pub fn drift_at(&self, elapsed: Duration) -> f64 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        let leg = self.duration.as_secs_f64();
        if leg <= 0.0 {
            return 0.0;
        }
        let phase = (running.as_secs_f64() / leg) % 2.0;
        if phase <= 1.0 {
            phase
        } else {
            2.0 - phase
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.random_range(0.0..=width.max(0.0)),
            y: rng.random_range(0.0..=height.max(0.0)),
            vx: rng.random_range(-MAX_VELOCITY..MAX_VELOCITY),
            vy: rng.random_range(-MAX_VELOCITY..MAX_VELOCITY),
        }
    }

    /// Move one step, flipping velocity at an edge and clamping into bounds.
    fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x <= 0.0 || self.x >= width {
            self.vx = -self.vx;
        }
        if self.y <= 0.0 || self.y >= height {
            self.vy = -self.vy;
        }

        self.clamp(width, height);
    }

    fn clamp(&mut self, width: f64, height: f64) {
        self.x = self.x.clamp(0.0, width.max(0.0));
        self.y = self.y.clamp(0.0, height.max(0.0));
    }
}

/// Parallax speed factor for the particle at `index`: 0.5, 1.0 or 1.5.
pub fn parallax_speed(index: usize) -> f64 {
    ((index % 3) + 1) as f64 * 0.5
}

/// Rows the bubble at `index` sinks per row the page is scrolled.
pub fn scroll_drift(index: usize) -> f64 {
    index as f64 * 0.1 + 0.1
}

/// Offset for one axis given the pointer's normalized position on that axis.
pub fn parallax_offset(pointer: f64, index: usize) -> f64 {
    (pointer - 0.5) * parallax_speed(index) * 10.0
}

#[derive(Debug, Clone)]
pub struct Background {
    bubbles: Vec<Bubble>,
    particles: Vec<Particle>,
    shapes: Vec<FloatingShape>,
    width: f64,
    height: f64,
    /// Pointer position normalized to `0.0..=1.0` on each axis.
    pointer: (f64, f64),
    /// Last pointer cell, once the pointer has moved.
    cursor: Option<(u16, u16)>,
    started: Option<Instant>,
}

impl Background {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_rng(&mut rand::rng(), width, height)
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R, width: u16, height: u16) -> Self {
        let (width, height) = (f64::from(width), f64::from(height));
        Self {
            bubbles: (0..BUBBLE_COUNT).map(|_| Bubble::random(rng)).collect(),
            particles: (0..PARTICLE_COUNT)
                .map(|_| Particle::random(rng, width, height))
                .collect(),
            shapes: (0..SHAPE_COUNT).map(|_| FloatingShape::random(rng)).collect(),
            width,
            height,
            pointer: (0.5, 0.5),
            cursor: None,
            started: None,
        }
    }

    /// Begin animating. Until then nothing moves and no bubble is visible.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            tracing::debug!("Background effects started");
            self.started = Some(now);
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn shapes(&self) -> &[FloatingShape] {
        &self.shapes
    }

    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Advance every particle one step.
    pub fn step(&mut self) {
        if !self.is_running() {
            return;
        }
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    /// Adopt new bounds and pull every particle back inside them.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = f64::from(width);
        self.height = f64::from(height);
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.clamp(width, height);
        }
    }

    /// Record the pointer in cell coordinates.
    pub fn set_pointer(&mut self, column: u16, row: u16) {
        let norm = |value: u16, extent: f64| {
            if extent <= 0.0 {
                0.5
            } else {
                (f64::from(value) / extent).clamp(0.0, 1.0)
            }
        };
        self.pointer = (norm(column, self.width), norm(row, self.height));
        self.cursor = Some((column, row));
    }

    /// Particle positions with the parallax offset applied.
    pub fn particle_positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let (px, py) = self.pointer;
        self.particles.iter().enumerate().map(move |(i, p)| {
            (
                p.x + parallax_offset(px, i),
                p.y + parallax_offset(py, i),
            )
        })
    }

    /// Visible bubbles at `now` as `(x, y, size)` in cells, each sunk by its
    /// share of the page's `scroll` offset.
    pub fn bubble_positions(&self, now: Instant, scroll: u16) -> Vec<(f64, f64, f64)> {
        let Some(started) = self.started else {
            return Vec::new();
        };
        let elapsed = now.saturating_duration_since(started);
        self.bubbles
            .iter()
            .enumerate()
            .filter_map(|(i, bubble)| {
                let rise = bubble.rise_at(elapsed)?;
                let x = bubble.left_percent / 100.0 * self.width;
                let y = self.height * (1.0 - rise) + f64::from(scroll) * scroll_drift(i);
                Some((x, y, bubble.size))
            })
            .collect()
    }

    /// Floating shapes at `now` as `(x, y, kind)` in cells. Empty until started.
    pub fn shape_positions(&self, now: Instant) -> Vec<(f64, f64, ShapeKind)> {
        let Some(started) = self.started else {
            return Vec::new();
        };
        let elapsed = now.saturating_duration_since(started);
        self.shapes
            .iter()
            .map(|shape| {
                let t = shape.drift_at(elapsed);
                let x = shape.left_percent / 100.0 * self.width + shape.drift.0 * t;
                let y = shape.top_percent / 100.0 * self.height + shape.drift.1 * t;
                (x, y, shape.kind)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn background() -> Background {
        let mut rng = StdRng::seed_from_u64(7);
        Background::with_rng(&mut rng, 80, 24)
    }

    #[test]
    fn test_counts_and_ranges() {
        let bg = background();
        assert_eq!(bg.bubbles().len(), BUBBLE_COUNT);
        assert_eq!(bg.particles().len(), PARTICLE_COUNT);
        for bubble in bg.bubbles() {
            assert!((20.0..80.0).contains(&bubble.size));
            assert!((0.0..100.0).contains(&bubble.left_percent));
            assert!(bubble.duration >= Duration::from_secs(15));
            assert!(bubble.duration < Duration::from_secs(25));
            assert!(bubble.delay < Duration::from_secs(5));
        }
        for p in bg.particles() {
            assert!(p.vx.abs() < MAX_VELOCITY && p.vy.abs() < MAX_VELOCITY);
        }
        assert_eq!(bg.shapes().len(), SHAPE_COUNT);
        for shape in bg.shapes() {
            assert!(shape.drift.0.abs() < DRIFT_COLUMNS && shape.drift.1.abs() < DRIFT_ROWS);
            assert!(shape.duration >= Duration::from_secs(10));
            assert!(shape.duration < Duration::from_secs(30));
        }
    }

    #[test]
    fn test_particle_bounces_at_edge() {
        let mut p = Particle {
            x: 0.1,
            y: 5.0,
            vx: -0.2,
            vy: 0.0,
        };
        p.step(10.0, 10.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.vx, 0.2);
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let mut bg = background();
        bg.start(Instant::now());
        for _ in 0..1000 {
            bg.step();
        }
        for p in bg.particles() {
            assert!((0.0..=80.0).contains(&p.x));
            assert!((0.0..=24.0).contains(&p.y));
        }
    }

    #[test]
    fn test_resize_clamps_particles() {
        let mut bg = background();
        bg.resize(10, 5);
        for p in bg.particles() {
            assert!(p.x <= 10.0 && p.y <= 5.0);
        }
    }

    #[test]
    fn test_parallax_offsets() {
        assert_eq!(parallax_speed(0), 0.5);
        assert_eq!(parallax_speed(4), 1.0);
        assert_eq!(parallax_speed(5), 1.5);
        assert_eq!(parallax_offset(0.5, 2), 0.0);
        assert_eq!(parallax_offset(1.0, 2), 7.5);
        assert_eq!(parallax_offset(0.0, 0), -2.5);
    }

    #[test]
    fn test_bubble_waits_then_wraps() {
        let bubble = Bubble {
            size: 40.0,
            left_percent: 50.0,
            duration: Duration::from_secs(20),
            delay: Duration::from_secs(2),
        };
        assert_eq!(bubble.rise_at(Duration::from_secs(1)), None);
        assert_eq!(bubble.rise_at(Duration::from_secs(12)), Some(0.5));
        assert_eq!(bubble.rise_at(Duration::from_secs(27)), Some(0.25));
    }

    #[test]
    fn test_nothing_moves_before_start() {
        let mut bg = background();
        let before = bg.particles().to_vec();
        bg.step();
        assert_eq!(bg.particles(), before.as_slice());
        assert!(bg.bubble_positions(Instant::now(), 0).is_empty());
        assert!(bg.shape_positions(Instant::now()).is_empty());
    }

    #[test]
    fn test_shape_drifts_out_and_back() {
        let shape = FloatingShape {
            kind: ShapeKind::Square,
            left_percent: 50.0,
            top_percent: 50.0,
            drift: (10.0, -4.0),
            duration: Duration::from_secs(10),
            delay: Duration::from_secs(1),
        };
        assert_eq!(shape.drift_at(Duration::ZERO), 0.0);
        assert_eq!(shape.drift_at(Duration::from_secs(6)), 0.5);
        assert_eq!(shape.drift_at(Duration::from_secs(11)), 1.0);
        assert_eq!(shape.drift_at(Duration::from_secs(16)), 0.5);
        assert_eq!(shape.drift_at(Duration::from_secs(21)), 0.0);
    }

    #[test]
    fn test_bubbles_sink_with_scroll() {
        let mut bg = background();
        let t0 = Instant::now();
        bg.start(t0);
        let now = t0 + Duration::from_secs(6);
        let still = bg.bubble_positions(now, 0);
        let scrolled = bg.bubble_positions(now, 10);
        assert_eq!(still.len(), scrolled.len());
        for ((_, y0, _), (_, y1, _)) in still.iter().zip(&scrolled) {
            assert!(y1 > y0);
        }
        assert_eq!(scroll_drift(0), 0.1);
    }

    #[test]
    fn test_cursor_follows_pointer() {
        let mut bg = background();
        assert_eq!(bg.cursor(), None);
        bg.set_pointer(12, 7);
        assert_eq!(bg.cursor(), Some((12, 7)));
    }
}
