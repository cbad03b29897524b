use crate::key::Key;

/// A game driven by a frontend.
///
/// The frontend owns the window and the event queue; it calls `tick` at a
/// fixed rate, forwards input as it arrives, and asks for a `render` into an
/// RGB24 framebuffer of `width() * height()` pixels whenever a redraw is due.
pub trait App {
    fn init(&mut self);
    fn tick(&mut self);
    fn render(&self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn handle_pointer_event(&mut self, x: i32, y: i32);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
