use std::time::Instant;

use anyhow::{Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, WindowCanvas};
use typed_builder::TypedBuilder;

pub use flappy_common;
pub use flappy_common::app::App;
pub use sdl2;

use flappy_common::clock::FrameClock;
use flappy_common::driver::{DriverEvent, Flow, FrameDriver};
use flappy_common::key::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = 60)]
    pub tick_rate: u32,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
}

pub struct SdlContext;

impl SdlContext {
    /// Open the window and run the app until it asks to exit or the window
    /// is closed.
    ///
    /// Single-threaded: each iteration blocks on the SDL event queue until
    /// either an event arrives or the next tick is due, processes everything
    /// queued in arrival order, and renders once the queue is empty.
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            tick_rate,
            pixel_format,
        } = sdl_init_info;

        let sdl_context = sdl2::init()
            .map_err(anyhow::Error::msg)
            .context("failed to initialise SDL")?;
        let video_subsystem = sdl_context
            .video()
            .map_err(anyhow::Error::msg)
            .context("failed to initialise SDL video")?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()
            .context("failed to create window")?;
        let mut canvas: WindowCanvas = window
            .into_canvas()
            .build()
            .context("failed to create canvas")?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(anyhow::Error::msg)?;

        let texture_creator = canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(map_pixel_format(pixel_format), width, height)
            .context("failed to create screen texture")?;
        let mut event_pump = sdl_context
            .event_pump()
            .map_err(anyhow::Error::msg)
            .context("failed to create event pump")?;

        let color_size = map_pixel_format_size(pixel_format);
        let pitch = (width * color_size) as usize;
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];

        app.init();
        let mut clock = FrameClock::new(tick_rate, Instant::now());
        let mut driver = FrameDriver::new();

        log::info!("{} running at {} ticks per second", title, tick_rate);
        let outcome = 'running: loop {
            // Round up so we do not wake just before the tick is due.
            let timeout_ms = clock.until_next(Instant::now()).as_micros().div_ceil(1000);
            let mut next = event_pump.wait_event_timeout(timeout_ms as u32);

            // Drain everything that is queued, interleaving due ticks.
            loop {
                if let Some(event) = next.take() {
                    if let Some(event) = map_event(event, scale) {
                        if driver.dispatch(&mut app, event) == Flow::Exit {
                            break 'running Ok(());
                        }
                    }
                }
                if clock.poll(Instant::now())
                    && driver.dispatch(&mut app, DriverEvent::Tick) == Flow::Exit
                {
                    break 'running Ok(());
                }
                next = event_pump.poll_event();
                if next.is_none() {
                    break;
                }
            }

            if driver.take_redraw(true) {
                app.render(&mut screen_state);
                if let Err(err) = present(&mut canvas, &mut texture, &screen_state, pitch) {
                    break 'running Err(err);
                }
            }
        };

        finish(&mut app, outcome)
    }
}

fn present(
    canvas: &mut WindowCanvas,
    texture: &mut Texture<'_>,
    screen_state: &[u8],
    pitch: usize,
) -> Result<()> {
    texture
        .update(None, screen_state, pitch)
        .context("failed to upload frame")?;
    canvas.clear();
    canvas
        .copy(texture, None, None)
        .map_err(anyhow::Error::msg)?;
    canvas.present();
    Ok(())
}

/// Shut the app down however the loop ended, then hand back the outcome.
fn finish(app: &mut impl App, outcome: Result<()>) -> Result<()> {
    app.exit();
    outcome
}

/// Translate an SDL event into a driver event. Window coordinates are
/// scaled back to logical screen coordinates.
pub fn map_event(event: Event, scale: u32) -> Option<DriverEvent> {
    let scale = scale.max(1) as i32;
    match event {
        Event::Quit { .. } => Some(DriverEvent::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            repeat: false,
            ..
        } => Some(DriverEvent::Key {
            key: map_keycode(keycode),
            is_down: true,
        }),
        Event::KeyUp {
            keycode: Some(keycode),
            ..
        } => Some(DriverEvent::Key {
            key: map_keycode(keycode),
            is_down: false,
        }),
        Event::MouseButtonDown { x, y, .. } => Some(DriverEvent::Pointer {
            x: x / scale,
            y: y / scale,
        }),
        _ => None,
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Space => Key::Space,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;
    use sdl2::mouse::MouseButton;

    fn key_down(keycode: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    #[test]
    fn test_map_keycode() {
        assert_eq!(map_keycode(Keycode::Space), Key::Space);
        assert_eq!(map_keycode(Keycode::Escape), Key::Escape);
        assert_eq!(map_keycode(Keycode::Q), Key::None);
    }

    #[test]
    fn test_repeated_key_down_is_dropped() {
        assert_eq!(
            map_event(key_down(Keycode::Space, false), 1),
            Some(DriverEvent::Key {
                key: Key::Space,
                is_down: true
            })
        );
        assert_eq!(map_event(key_down(Keycode::Space, true), 1), None);
    }

    #[test]
    fn test_pointer_is_scaled_to_logical_coordinates() {
        let event = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 610,
            y: 552,
        };
        assert_eq!(
            map_event(event, 2),
            Some(DriverEvent::Pointer { x: 305, y: 276 })
        );
    }

    #[derive(Default)]
    struct ExitCounter {
        exits: u32,
    }

    impl App for ExitCounter {
        fn init(&mut self) {}
        fn tick(&mut self) {}
        fn render(&self, _screen: &mut [u8]) {}
        fn handle_key_event(&mut self, _key: Key, _is_down: bool) {}
        fn handle_pointer_event(&mut self, _x: i32, _y: i32) {}
        fn should_exit(&self) -> bool {
            false
        }
        fn exit(&mut self) {
            self.exits += 1;
        }
        fn width(&self) -> u32 {
            1
        }
        fn height(&self) -> u32 {
            1
        }
        fn scale(&self) -> u32 {
            1
        }
        fn title(&self) -> String {
            "exit counter".to_string()
        }
    }

    #[test]
    fn test_finish_exits_app_on_error() {
        let mut app = ExitCounter::default();
        let outcome = finish(&mut app, Err(anyhow::anyhow!("failed to upload frame")));
        assert_eq!(app.exits, 1);
        assert_eq!(outcome.unwrap_err().to_string(), "failed to upload frame");
    }

    #[test]
    fn test_finish_exits_app_on_success() {
        let mut app = ExitCounter::default();
        assert!(finish(&mut app, Ok(())).is_ok());
        assert_eq!(app.exits, 1);
    }

    #[test]
    fn test_quit() {
        assert_eq!(
            map_event(Event::Quit { timestamp: 0 }, 1),
            Some(DriverEvent::Quit)
        );
    }
}
