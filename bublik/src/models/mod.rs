mod chat;
mod identity;
mod message;
mod settings;
mod types;

pub use chat::*;
pub use identity::*;
pub use message::*;
pub use settings::*;
pub use types::*;
