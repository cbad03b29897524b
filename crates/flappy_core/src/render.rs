use flappy_common::Color;

use crate::bird::{BIRD_HEIGHT, BIRD_WIDTH};
use crate::font::{glyph, text_width, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::layout::Control;
use crate::obstacle::{Obstacle, PIPE_WIDTH};
use crate::session::{GameState, Snapshot};
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Size of one font pixel on screen.
const TEXT_SCALE: i32 = 6;
/// Width of the darker rim drawn down each pipe edge.
const PIPE_RIM: i32 = 4;

/// A clipped RGB24 drawing surface over a borrowed buffer.
pub struct Frame<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height * 3);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let idx = (y * self.width + x) * 3;
        Color::new_rgb(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(3) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
    }

    /// Fill the rectangle, clipped to the frame. Empty or fully outside
    /// rectangles draw nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let x0 = x.clamp(0, self.width as i32) as usize;
        let y0 = y.clamp(0, self.height as i32) as usize;
        let x1 = x.saturating_add(width).clamp(0, self.width as i32) as usize;
        let y1 = y.saturating_add(height).clamp(0, self.height as i32) as usize;
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        for row in y0..y1 {
            let start = (row * self.width + x0) * 3;
            let end = (row * self.width + x1) * 3;
            for px in self.pixels[start..end].chunks_exact_mut(3) {
                px[0] = color.r;
                px[1] = color.g;
                px[2] = color.b;
            }
        }
    }

    /// Draw `text` horizontally centred on `center_x`, top edge at `y`.
    pub fn draw_text(&mut self, text: &str, center_x: i32, y: i32, scale: i32, color: Color) {
        let mut x = center_x - text_width(text) * scale / 2;
        for ch in text.chars() {
            if let Some(rows) = glyph(ch) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if bits & (0b100 >> col) != 0 {
                            self.fill_rect(
                                x + col * scale,
                                y + row as i32 * scale,
                                scale,
                                scale,
                                color,
                            );
                        }
                    }
                }
            }
            x += GLYPH_ADVANCE * scale;
        }
    }
}

/// Render one frame of the session into an RGB24 buffer of screen size.
pub fn render_snapshot(snapshot: &Snapshot<'_>, screen: &mut [u8]) {
    let mut frame = Frame::new(screen, SCREEN_WIDTH, SCREEN_HEIGHT);
    frame.clear(Color::SKY);

    let center_x = SCREEN_WIDTH as i32 / 2;
    match snapshot.state {
        GameState::Menu => {
            frame.draw_text(
                "FLAPPY BIRD",
                center_x,
                SCREEN_HEIGHT as i32 / 4 - 100,
                TEXT_SCALE * 2,
                Color::WHITE,
            );
        }
        GameState::Playing => {
            draw_scene(&mut frame, snapshot);
            frame.draw_text(
                &format!("SCORE: {}", snapshot.score),
                center_x,
                50,
                TEXT_SCALE,
                Color::WHITE,
            );
        }
        GameState::GameOver => {
            draw_scene(&mut frame, snapshot);
            let y = SCREEN_HEIGHT as i32 / 4;
            frame.draw_text(
                &format!("GAME OVER! SCORE: {}", snapshot.score),
                center_x,
                y,
                TEXT_SCALE,
                Color::BLACK,
            );
            frame.draw_text(
                &format!("BEST: {}", snapshot.best_score),
                center_x,
                y + 50,
                TEXT_SCALE,
                Color::BLACK,
            );
        }
    }

    for &control in snapshot.state.controls() {
        draw_button(&mut frame, control);
    }
}

fn draw_scene(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>) {
    for obstacle in snapshot.obstacles {
        draw_pipe(frame, obstacle);
    }
    let bird = &snapshot.bird;
    frame.fill_rect(
        bird.x() as i32,
        bird.y as i32,
        BIRD_WIDTH as i32,
        BIRD_HEIGHT as i32,
        Color::BIRD,
    );
}

fn draw_pipe(frame: &mut Frame<'_>, obstacle: &Obstacle) {
    let x = obstacle.x() as i32;
    let width = PIPE_WIDTH as i32;
    let gap_top = obstacle.gap_top() as i32;
    let gap_bottom = obstacle.gap_bottom() as i32;
    let bottom_height = SCREEN_HEIGHT as i32 - gap_bottom;

    for (y, height) in [(0, gap_top), (gap_bottom, bottom_height)] {
        frame.fill_rect(x, y, width, height, Color::PIPE_EDGE);
        frame.fill_rect(x + PIPE_RIM, y, width - 2 * PIPE_RIM, height, Color::PIPE);
    }
}

fn draw_button(frame: &mut Frame<'_>, control: Control) {
    let rect = control.rect();
    frame.fill_rect(rect.x, rect.y, rect.width, rect.height, Color::RED);
    let text_height = GLYPH_HEIGHT * TEXT_SCALE;
    frame.draw_text(
        control.label(),
        rect.x + rect.width / 2,
        rect.y + (rect.height - text_height) / 2,
        TEXT_SCALE,
        Color::WHITE,
    );
}
