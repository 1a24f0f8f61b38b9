use anyhow::anyhow;
use async_trait::async_trait;

use crate::models::{Chat, normalize_username};

/// A user as returned by a directory lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub username: String,
    pub name: String,
    pub online: bool,
}

impl DirectoryEntry {
    /// Entry synthesized from a username alone, the username doubling as the
    /// display name.
    pub fn unverified(username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            name: username.clone(),
            username,
            online: false,
        }
    }

    pub fn into_chat(self) -> Chat {
        let mut chat = Chat::new(self.name, self.username);
        chat.online = self.online;
        chat
    }
}

/// Strips a leading `@` and applies the username rule.
pub fn parse_contact_username(input: &str) -> String {
    normalize_username(input.trim().trim_start_matches('@'))
}

/// Stand-in for the backend's user search.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn lookup(&self, username: &str) -> Result<DirectoryEntry, anyhow::Error>;
}

/// Resolves every non-empty username without checking that it exists.
#[derive(Debug, Default)]
pub struct LocalDirectory;

#[async_trait]
impl DirectoryService for LocalDirectory {
    async fn lookup(&self, username: &str) -> Result<DirectoryEntry, anyhow::Error> {
        let username = parse_contact_username(username);
        if username.is_empty() {
            return Err(anyhow!("Username cannot be empty"));
        }
        tracing::debug!(?username, "Resolved contact locally");
        Ok(DirectoryEntry::unverified(username))
    }
}
