use super::{ChatId, initials};

/// Sidebar entry for a conversation with a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: ChatId,
    pub name: String,
    pub username: String,
    // Avatar image reference, initials are rendered when absent.
    pub avatar: Option<String>,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
    pub online: bool,
}

impl Chat {
    /// A fresh chat with no history.
    pub fn new(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: ChatId::generate(),
            name: name.into(),
            username: username.into(),
            avatar: None,
            last_message: String::new(),
            time: String::new(),
            unread: 0,
            online: false,
        }
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    /// `query` must already be lowercased.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.username.to_lowercase().contains(query)
    }

    pub fn presence_label(&self) -> &'static str {
        if self.online {
            "online"
        } else {
            "last seen recently"
        }
    }
}
