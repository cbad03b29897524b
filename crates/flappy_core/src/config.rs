use std::path::PathBuf;

use typed_builder::TypedBuilder;

use crate::SCREEN_SCALE;

pub const DEFAULT_SCORE_PATH: &str = "best_score.txt";

/// Process-level wiring. Gameplay constants are not configurable.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GameConfig {
    /// Where the best score lives, relative to the working directory.
    #[builder(default = PathBuf::from(DEFAULT_SCORE_PATH), setter(into))]
    pub score_path: PathBuf,
    /// Fixed seed for gap placement; `None` seeds from the OS.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
    #[builder(default = SCREEN_SCALE)]
    pub scale: u32,
    #[builder(default = "Flappy Bird".to_string(), setter(into))]
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
