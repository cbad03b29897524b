use rand::Rng;

use crate::bird::Bird;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const PIPE_WIDTH: f32 = 80.0;
/// Height of the passable gap between the upper and lower pipe.
pub const PIPE_GAP: f32 = 200.0;
/// A new pipe spawns once the newest one is this far left of the right edge.
pub const PIPE_SPACING: f32 = 380.0;
/// Horizontal scroll per tick.
pub const SCROLL_SPEED: f32 = 3.0;
/// Smallest gap offset; keeps the gap clear of the top edge.
pub const GAP_MARGIN: u32 = 25;
/// Number of distinct gap offsets, `[GAP_MARGIN, GAP_MARGIN + GAP_RANGE)`.
pub const GAP_RANGE: u32 = SCREEN_HEIGHT as u32 - PIPE_GAP as u32 - 50;

/// A pipe pair with a gap. The gap offset never changes after spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    x: f32,
    gap_top: f32,
    passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    /// Spawn at the right screen edge with a random gap.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(SCREEN_WIDTH as f32, random_gap_top(rng))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Top of the gap; the upper pipe ends here.
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_top
    }

    /// Bottom of the gap; the lower pipe starts here.
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + PIPE_GAP
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    #[inline]
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn advance(&mut self) {
        self.x -= SCROLL_SPEED;
    }

    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    /// Flips `passed` the first time the right edge is left of `bird_x`.
    /// Returns whether it flipped on this call.
    fn mark_passed(&mut self, bird_x: f32) -> bool {
        if !self.passed && self.right() < bird_x {
            self.passed = true;
            true
        } else {
            false
        }
    }
}

/// Draw a gap offset uniformly from the integers in
/// `[GAP_MARGIN, GAP_MARGIN + GAP_RANGE)`.
pub fn random_gap_top<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.gen_range(0..GAP_RANGE) + GAP_MARGIN) as f32
}

/// Scrolling pipes in spawn order, which is also left-to-right order.
#[derive(Debug, Clone, Default)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn newest(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Append one pipe at the right edge unconditionally.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.obstacles.push(Obstacle::spawn(rng));
    }

    /// Append a pipe if the stream is empty or the newest pipe has moved far
    /// enough from the right edge. Returns whether one was spawned.
    pub fn spawn_if_due<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let due = match self.newest() {
            None => true,
            Some(newest) => newest.x() < SCREEN_WIDTH as f32 - PIPE_SPACING,
        };
        if due {
            self.spawn(rng);
        }
        due
    }

    /// Scroll every pipe left, then drop those that are fully off screen.
    /// Returns the number dropped.
    pub fn advance(&mut self) -> usize {
        for obstacle in &mut self.obstacles {
            obstacle.advance();
        }
        let before = self.obstacles.len();
        self.obstacles.retain(|obstacle| !obstacle.is_off_screen());
        before - self.obstacles.len()
    }

    pub fn any_collision(&self, bird: &Bird) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| bird.collides_with(obstacle))
    }

    /// Mark every pipe whose right edge has crossed `bird_x` as passed and
    /// return how many flipped now. A pipe counts at most once.
    pub fn mark_passed(&mut self, bird_x: f32) -> u32 {
        self.obstacles
            .iter_mut()
            .map(|obstacle| obstacle.mark_passed(bird_x) as u32)
            .sum()
    }
}
