mod callback;
pub mod event;
pub mod util;
pub mod widget;
mod window;

pub use util::key_event_to_code;
pub use window::{FieldValue, Window, WindowAction, WindowBuilder, WindowTheme};
