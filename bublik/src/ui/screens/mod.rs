mod auth;
mod chat_list;
mod settings;

pub use auth::*;
pub use chat_list::*;
pub use settings::*;
