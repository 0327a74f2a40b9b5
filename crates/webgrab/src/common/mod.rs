mod header;
mod macros;

pub use header::*;

/// Header collection as yielded by the managed client: every name once, with
/// all of its values in arrival order.
pub type HeaderMap = Vec<(String, Vec<String>)>;
