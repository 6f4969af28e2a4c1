mod document;
mod error;
mod range;
mod summary;

pub use document::*;
pub use error::*;
pub use range::*;
pub use summary::*;
