/// Keys the games care about. Everything else maps to `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Space,
    Escape,
    None,
}
