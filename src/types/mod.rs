mod parse_result;

pub use parse_result::*;
