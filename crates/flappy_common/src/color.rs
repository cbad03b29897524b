#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const RED: Color = Color::new_rgb(255, 0, 0);

    pub const SKY: Color = Color::new_rgb(112, 197, 206);
    pub const PIPE: Color = Color::new_rgb(100, 170, 40);
    pub const PIPE_EDGE: Color = Color::new_rgb(60, 100, 20);
    pub const BIRD: Color = Color::new_rgb(245, 200, 66);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}
