mod cli;
mod editor;
pub mod logging;

pub use cli::Cli;
pub use editor::*;
