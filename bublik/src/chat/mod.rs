mod filter;
mod seed;
mod shell;

pub use filter::*;
pub use seed::*;
pub use shell::*;
