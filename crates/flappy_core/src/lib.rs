pub mod app;
pub mod bird;
pub mod config;
mod font;
pub mod layout;
pub mod obstacle;
pub mod render;
pub mod score_store;
pub mod session;

pub use app::FlappyApp;
pub use bird::Bird;
pub use config::GameConfig;
pub use obstacle::{Obstacle, ObstacleStream};
pub use score_store::{FileScoreStore, MemoryScoreStore, ScoreStore};
pub use session::{GameSession, GameState, Snapshot};

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 800;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 750;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 1;
/// Physics ticks per second. Speeds are per tick, not per second.
pub const TICK_RATE: u32 = 60;
