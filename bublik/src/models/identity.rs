use serde::{Deserialize, Serialize};

/// The signed-in user. Produced by the auth wizard and kept in the
/// persisted identity slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub username: String,
    pub name: String,
}

impl Identity {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            name: name.into(),
        }
    }

    /// Username with the `@` prefix used throughout the UI.
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

/// Lowercases the input and drops everything outside `[a-z0-9_]`.
///
/// Applying it twice yields the same string as applying it once.
pub fn normalize_username(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// The only email check the client performs.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

/// Initials shown in place of a missing avatar: the first character of each
/// word, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
