//! Generator module - random figure selection with one-piece lookahead
//!
//! Shapes are drawn uniformly from the seven-entry catalog. The random source is
//! seeded once, when the generator is built (from OS entropy, or from an explicit
//! seed for reproducible sessions), never per draw.

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::figure::Figure;
use crate::shapes::{preview_grid, PreviewGrid};
use crate::types::ShapeKind;

/// Uniform figure generator holding the pending next shape
#[derive(Debug, Clone)]
pub struct FigureGenerator {
    rng: StdRng,
    next: ShapeKind,
}

impl FigureGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a deterministic generator
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let next = Self::draw(&mut rng);
        Self { rng, next }
    }

    fn draw(rng: &mut StdRng) -> ShapeKind {
        ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())]
    }

    /// Draw a shape uniformly from the catalog
    pub fn pick_random(&mut self) -> ShapeKind {
        Self::draw(&mut self.rng)
    }

    /// The pending next shape
    pub fn next(&self) -> ShapeKind {
        self.next
    }

    /// Replace the pending next shape
    pub fn set_next(&mut self, kind: ShapeKind) {
        self.next = kind;
    }

    /// Preview grid of the pending next shape
    pub fn preview(&self) -> PreviewGrid {
        preview_grid(self.next)
    }

    /// Promote the pending shape to a figure at the spawn origin and draw a fresh one
    pub fn spawn_from_next(&mut self) -> Figure {
        let figure = Figure::spawn(self.next);
        self.next = self.pick_random();
        trace!(
            "spawned {} (next: {})",
            figure.kind.as_str(),
            self.next.as_str()
        );
        figure
    }
}

impl Default for FigureGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rotation, SPAWN_X, SPAWN_Y};

    #[test]
    fn test_generator_deterministic() {
        let mut g1 = FigureGenerator::with_seed(12345);
        let mut g2 = FigureGenerator::with_seed(12345);

        assert_eq!(g1.next(), g2.next());
        for _ in 0..100 {
            assert_eq!(g1.pick_random(), g2.pick_random());
        }
    }

    #[test]
    fn test_spawn_promotes_next() {
        let mut generator = FigureGenerator::with_seed(7);
        let pending = generator.next();

        let figure = generator.spawn_from_next();

        assert_eq!(figure.kind, pending);
        assert_eq!(figure.color, pending.color());
        assert_eq!((figure.x, figure.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(figure.rotation, Rotation::North);
    }

    #[test]
    fn test_set_next_overrides_pending() {
        let mut generator = FigureGenerator::with_seed(1);
        generator.set_next(ShapeKind::O);

        assert_eq!(generator.next(), ShapeKind::O);
        assert_eq!(generator.spawn_from_next().kind, ShapeKind::O);
    }

    #[test]
    fn test_all_shapes_eventually_drawn() {
        let mut generator = FigureGenerator::with_seed(99);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            seen[generator.pick_random().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing shape: {:?}", seen);
    }
}
