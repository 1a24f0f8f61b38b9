use iced::{Element, Task};
use std::fmt::Debug;

use crate::ui::AppContext;

/// Command returned from screen update methods
pub enum ScreenCommand<M> {
    /// No action needed
    None,
    /// Execute a command with screen's message type
    Message(Task<M>),
    /// Switch to a different screen
    ChangeScreen(ScreenType),
}

/// Types of screens for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenType {
    /// Sign-in wizard, shown while no identity is stored
    Auth,
    /// Chat list with the conversation view
    Chats,
}

/// Base trait for all application screens
pub trait Screen {
    /// Message type for this screen
    type Message: Debug + Clone + Send + 'static;

    /// Process a screen message and return a command
    fn update(
        &mut self,
        message: Self::Message,
        ctx: &mut AppContext,
    ) -> ScreenCommand<Self::Message>;

    /// Create the view for this screen. Identity, settings and theme come
    /// from the context.
    fn view<'a>(&'a self, ctx: &'a AppContext) -> Element<'a, Self::Message>;
}

impl<M> ScreenCommand<M> {
    /// Check if command requests screen change
    pub fn get_screen_change(&self) -> Option<ScreenType> {
        match self {
            ScreenCommand::ChangeScreen(screen_type) => Some(*screen_type),
            _ => None,
        }
    }

    /// Check if this is a None command
    pub fn is_none(&self) -> bool {
        matches!(self, ScreenCommand::None)
    }
}
