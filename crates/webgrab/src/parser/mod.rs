mod header_map;
mod raw;

pub use header_map::*;
pub use raw::*;
