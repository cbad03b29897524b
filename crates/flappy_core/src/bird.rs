use crate::obstacle::{Obstacle, PIPE_GAP, PIPE_WIDTH};
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Downward acceleration, units per tick squared.
pub const GRAVITY: f32 = 0.25;
/// Velocity a jump sets, units per tick (negative is up).
pub const JUMP_STRENGTH: f32 = -4.5;
pub const BIRD_WIDTH: f32 = 54.0;
pub const BIRD_HEIGHT: f32 = 44.0;
pub const BIRD_START_X: f32 = (SCREEN_WIDTH / 4) as f32;
pub const BIRD_START_Y: f32 = (SCREEN_HEIGHT / 2) as f32;

/// The player. Only ever moves vertically; `x` is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    x: f32,
    /// Top edge, screen coordinates (down is positive).
    pub y: f32,
    pub velocity: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new(BIRD_START_X, BIRD_START_Y)
    }
}

impl Bird {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// One tick of free fall. No clamping; leaving the screen is the
    /// session's business.
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    /// Overwrites the velocity, so repeated jumps never stack.
    pub fn jump(&mut self) {
        self.velocity = JUMP_STRENGTH;
    }

    /// Horizontal overlap with the pipe pair while vertically outside its gap.
    pub fn collides_with(&self, obstacle: &Obstacle) -> bool {
        let gap_top = obstacle.gap_top();
        let overlaps_x = self.x + BIRD_WIDTH > obstacle.x() && self.x < obstacle.x() + PIPE_WIDTH;
        let outside_gap = self.y < gap_top || self.y + BIRD_HEIGHT > gap_top + PIPE_GAP;
        overlaps_x && outside_gap
    }
}
