mod output_format;

pub use output_format::*;
