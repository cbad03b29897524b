use crate::app::App;
use crate::key::Key;

/// Events a frontend feeds into the driver, in the order they arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverEvent {
    Tick,
    Key { key: Key, is_down: bool },
    Pointer { x: i32, y: i32 },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Routes frontend events into an `App` and decides when to redraw.
///
/// Only ticks advance the game; input is forwarded and may flip state, but
/// the result becomes visible on the next tick. A redraw is requested by
/// every tick and performed once the frontend has drained its queue, so a
/// burst of events costs a single render.
#[derive(Debug)]
pub struct FrameDriver {
    redraw: bool,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self { redraw: true }
    }

    pub fn dispatch<A: App + ?Sized>(&mut self, app: &mut A, event: DriverEvent) -> Flow {
        match event {
            DriverEvent::Tick => {
                app.tick();
                self.redraw = true;
            }
            DriverEvent::Key { key, is_down } => app.handle_key_event(key, is_down),
            DriverEvent::Pointer { x, y } => app.handle_pointer_event(x, y),
            DriverEvent::Quit => return Flow::Exit,
        }

        if app.should_exit() {
            Flow::Exit
        } else {
            Flow::Continue
        }
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw
    }

    /// Consume the pending redraw, but only at an idle point.
    pub fn take_redraw(&mut self, queue_empty: bool) -> bool {
        if self.redraw && queue_empty {
            self.redraw = false;
            true
        } else {
            false
        }
    }
}
