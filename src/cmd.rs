mod args;
mod command;

pub use self::args::OutputFormat;
pub use self::command::*;
