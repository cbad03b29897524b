use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const BUTTON_WIDTH: i32 = 200;
pub const BUTTON_HEIGHT: i32 = 50;
/// Vertical space between stacked menu buttons.
pub const BUTTON_SPACING: i32 = 20;

const BUTTON_X: i32 = SCREEN_WIDTH as i32 / 2 - BUTTON_WIDTH / 2;
const START_Y: i32 = SCREEN_HEIGHT as i32 / 2 - 100;
const EXIT_Y: i32 = START_Y + BUTTON_HEIGHT + BUTTON_SPACING;
const MENU_Y: i32 = SCREEN_HEIGHT as i32 / 2 + 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Clickable buttons. Which ones are live depends on the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Exit,
    Menu,
}

impl Control {
    pub const fn rect(self) -> Rect {
        match self {
            Control::Start => Rect::new(BUTTON_X, START_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
            Control::Exit => Rect::new(BUTTON_X, EXIT_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
            Control::Menu => Rect::new(BUTTON_X, MENU_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::Start => "START",
            Control::Exit => "EXIT",
            Control::Menu => "MENU",
        }
    }

    /// First control in `controls` whose rectangle holds the point.
    pub fn hit(controls: &[Control], x: i32, y: i32) -> Option<Control> {
        controls
            .iter()
            .copied()
            .find(|control| control.rect().contains(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_offsets() {
        assert_eq!(Control::Start.rect(), Rect::new(300, 275, 200, 50));
        assert_eq!(Control::Exit.rect(), Rect::new(300, 345, 200, 50));
        assert_eq!(Control::Menu.rect(), Rect::new(300, 475, 200, 50));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = Control::Start.rect();
        assert!(rect.contains(300, 275));
        assert!(rect.contains(500, 325));
        assert!(!rect.contains(299, 300));
        assert!(!rect.contains(400, 326));
    }

    #[test]
    fn test_hit_only_considers_given_controls() {
        let menu = Control::Menu.rect();
        assert_eq!(
            Control::hit(&[Control::Menu], menu.x + 10, menu.y + 10),
            Some(Control::Menu)
        );
        assert_eq!(
            Control::hit(&[Control::Start, Control::Exit], menu.x + 10, menu.y + 10),
            None
        );
    }
}
