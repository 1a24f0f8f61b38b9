mod service;
mod wizard;

pub use service::*;
pub use wizard::*;
