mod render;
mod tick;
mod user_input;

pub use render::*;
pub use tick::*;
pub use user_input::*;
