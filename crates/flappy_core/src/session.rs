//! The game state machine.
//!
//! A `GameSession` owns everything one game needs: the bird, the obstacle
//! stream, the score, the best score and its store, and the random source
//! used for gap placement. It advances only through `tick`; input calls flip
//! state and velocity but never move anything.

use rand::Rng;

use crate::bird::Bird;
use crate::layout::Control;
use crate::obstacle::{Obstacle, ObstacleStream};
use crate::score_store::ScoreStore;
use crate::SCREEN_HEIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
}

impl GameState {
    /// Controls that accept clicks in this state.
    pub fn controls(self) -> &'static [Control] {
        match self {
            GameState::Menu => &[Control::Start, Control::Exit],
            GameState::Playing => &[],
            GameState::GameOver => &[Control::Menu],
        }
    }
}

/// Read-only view handed to the renderer once per redraw.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub state: GameState,
    pub bird: Bird,
    pub obstacles: &'a [Obstacle],
    pub score: u32,
    pub best_score: u32,
}

pub struct GameSession<R, S> {
    state: GameState,
    bird: Bird,
    obstacles: ObstacleStream,
    score: u32,
    best_score: u32,
    quit_requested: bool,
    rng: R,
    store: S,
}

impl<R: Rng, S: ScoreStore> GameSession<R, S> {
    /// A session in the menu with one pipe waiting off to the right.
    ///
    /// A store that cannot be read is treated as holding no best score.
    pub fn new(rng: R, mut store: S) -> Self {
        let best_score = store.load().unwrap_or_else(|err| {
            log::warn!("{:#}; starting with best score 0", err);
            0
        });
        log::debug!("loaded best score {}", best_score);

        let mut session = Self {
            state: GameState::Menu,
            bird: Bird::default(),
            obstacles: ObstacleStream::new(),
            score: 0,
            best_score,
            quit_requested: false,
            rng,
            store,
        };
        session.reset_field();
        session
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.obstacles.as_slice()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Set once the player clicked Exit in the menu.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: self.state,
            bird: self.bird,
            obstacles: self.obstacles.as_slice(),
            score: self.score,
            best_score: self.best_score,
        }
    }

    /// The primary action key.
    pub fn press_primary(&mut self) {
        match self.state {
            GameState::Menu => {
                self.start();
                self.bird.jump();
            }
            GameState::Playing => self.bird.jump(),
            GameState::GameOver => self.restart(),
        }
    }

    /// A pointer press at screen coordinates.
    pub fn press_pointer(&mut self, x: i32, y: i32) {
        if self.state == GameState::Playing {
            self.bird.jump();
            return;
        }

        match Control::hit(self.state.controls(), x, y) {
            Some(Control::Start) => self.start(),
            Some(Control::Exit) => {
                log::info!("exit requested from menu");
                self.quit_requested = true;
            }
            Some(Control::Menu) => self.restart(),
            None => {}
        }
    }

    /// One fixed-rate step. Does nothing outside `Playing`.
    pub fn tick(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        self.bird.update();
        let mut game_over = self.bird.y < 0.0 || self.bird.y > SCREEN_HEIGHT as f32;

        self.obstacles.advance();
        if self.obstacles.any_collision(&self.bird) {
            game_over = true;
        }

        // No points on the frame the run ends.
        if !game_over {
            self.score += self.obstacles.mark_passed(self.bird.x());
        }

        self.obstacles.spawn_if_due(&mut self.rng);

        if game_over {
            log::info!(
                "game over: score {} (best {})",
                self.score,
                self.best_score
            );
            self.transition(GameState::GameOver);
        }
    }

    fn start(&mut self) {
        self.reset_field();
        self.transition(GameState::Playing);
    }

    /// Leave `GameOver` for the menu: keep the best score, then clear the
    /// field.
    fn restart(&mut self) {
        self.record_best();
        self.reset_field();
        self.score = 0;
        self.transition(GameState::Menu);
    }

    fn record_best(&mut self) {
        if self.score <= self.best_score {
            return;
        }
        self.best_score = self.score;
        match self.store.save(self.best_score) {
            Ok(()) => log::info!("new best score {}", self.best_score),
            Err(err) => log::warn!("{:#}; best score kept in memory only", err),
        }
    }

    fn reset_field(&mut self) {
        self.bird = Bird::default();
        self.obstacles.clear();
        self.obstacles.spawn(&mut self.rng);
    }

    fn transition(&mut self, next: GameState) {
        log::debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
