pub mod core;
pub mod screens;
pub mod theme;

mod app;

pub use app::*;
