mod screen;

pub use screen::*;
