mod boundary;
mod preview;

pub use boundary::*;
pub use preview::*;
