use flappy_common::app::App;
use flappy_common::key::Key;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::render::render_snapshot;
use crate::score_store::{FileScoreStore, ScoreStore};
use crate::session::GameSession;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Frontend-facing wrapper around a `GameSession`.
///
/// This type implements the shared `App` trait so that the SDL2 frontend
/// (`flappy_sdl2`) can drive the game: ticks go to the session, Space and
/// pointer presses become game input, Escape leaves.
pub struct FlappyApp<R, S> {
    should_exit: bool,
    scale: u32,
    title: String,
    pub session: GameSession<R, S>,
}

impl FlappyApp<StdRng, FileScoreStore> {
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let store = FileScoreStore::new(config.score_path.clone());
        let mut app = Self::new(rng, store);
        app.scale = config.scale;
        app.title = config.title.clone();
        app
    }
}

impl<R: Rng, S: ScoreStore> FlappyApp<R, S> {
    pub fn new(rng: R, store: S) -> Self {
        let defaults = GameConfig::default();
        Self {
            should_exit: false,
            scale: defaults.scale,
            title: defaults.title,
            session: GameSession::new(rng, store),
        }
    }
}

impl<R: Rng, S: ScoreStore> App for FlappyApp<R, S> {
    fn init(&mut self) {
        log::info!(
            "Flappy init, best score {}",
            self.session.best_score()
        );
    }

    fn tick(&mut self) {
        self.session.tick();
    }

    fn render(&self, screen_state: &mut [u8]) {
        render_snapshot(&self.session.snapshot(), screen_state);
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        if !is_down {
            return;
        }
        match key {
            Key::Space => self.session.press_primary(),
            Key::Escape => self.should_exit = true,
            _ => {}
        }
    }

    fn handle_pointer_event(&mut self, x: i32, y: i32) {
        self.session.press_pointer(x, y);
    }

    fn should_exit(&self) -> bool {
        self.should_exit || self.session.quit_requested()
    }

    fn exit(&mut self) {
        log::info!("Flappy exit");
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        self.scale
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Control;
    use crate::score_store::MemoryScoreStore;
    use crate::session::GameState;
    use flappy_common::driver::{DriverEvent, Flow, FrameDriver};

    fn app() -> FlappyApp<StdRng, MemoryScoreStore> {
        FlappyApp::new(StdRng::seed_from_u64(5), MemoryScoreStore::default())
    }

    #[test]
    fn test_from_config_uses_configured_score_path() {
        let path = std::env::temp_dir().join("flappy_app_config_path.txt");
        let config = GameConfig::builder().score_path(&path).seed(3).build();
        let app = FlappyApp::from_config(&config);
        assert_eq!(app.session.store().path(), path.as_path());
    }

    #[test]
    fn test_space_starts_and_release_is_ignored() {
        let mut app = app();
        app.handle_key_event(Key::Space, false);
        assert_eq!(app.session.state(), GameState::Menu);
        app.handle_key_event(Key::Space, true);
        assert_eq!(app.session.state(), GameState::Playing);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut app = app();
        app.handle_key_event(Key::None, true);
        assert_eq!(app.session.state(), GameState::Menu);
        assert!(!app.should_exit());
    }

    #[test]
    fn test_escape_exits() {
        let mut app = app();
        app.handle_key_event(Key::Escape, true);
        assert!(app.should_exit());
    }

    #[test]
    fn test_exit_button_stops_driver() {
        let mut app = app();
        let mut driver = FrameDriver::new();
        let exit = Control::Exit.rect();
        let flow = driver.dispatch(
            &mut app,
            DriverEvent::Pointer {
                x: exit.x + 5,
                y: exit.y + 5,
            },
        );
        assert_eq!(flow, Flow::Exit);
    }

    #[test]
    fn test_driver_ticks_session() {
        let mut app = app();
        let mut driver = FrameDriver::new();
        driver.dispatch(
            &mut app,
            DriverEvent::Key {
                key: Key::Space,
                is_down: true,
            },
        );
        let y = app.session.bird().y;
        driver.dispatch(&mut app, DriverEvent::Tick);
        assert!(app.session.bird().y < y);
        assert!(driver.take_redraw(true));
    }

    #[test]
    fn test_render_fills_whole_screen() {
        let app = app();
        let mut screen = vec![0u8; (app.width() * app.height() * 3) as usize];
        app.render(&mut screen);
        assert!(screen.chunks_exact(3).all(|px| px != [0, 0, 0]));
    }
}
