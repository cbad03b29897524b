pub mod app;
pub mod clock;
pub mod color;
pub mod driver;
pub mod key;

pub use app::App;
pub use clock::FrameClock;
pub use color::Color;
pub use driver::{DriverEvent, Flow, FrameDriver};
pub use key::Key;
