pub mod cli;
pub mod probe;

pub use cli::*;
pub use probe::*;
