use std::collections::HashMap;

use crate::contact::{DirectoryEntry, parse_contact_username};
use crate::models::{Chat, ChatId, Message, MessageId, Sender, clock_time};

use super::filter_chats;

/// Auxiliary panels of the chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Profile,
    Settings,
    AddContact,
}

/// Visibility flags. Each flag is independent, so profile and settings may be
/// open together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panels {
    pub profile: bool,
    pub settings: bool,
    pub add_contact: bool,
}

impl Panels {
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Profile => self.profile,
            Panel::Settings => self.settings,
            Panel::AddContact => self.add_contact,
        }
    }

    fn slot(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Profile => &mut self.profile,
            Panel::Settings => &mut self.settings,
            Panel::AddContact => &mut self.add_contact,
        }
    }
}

/// State behind the chat screen: the chat collection, the selection, one
/// message log per chat, the compose and search fields and panel flags.
#[derive(Debug, Clone, Default)]
pub struct ConversationShell {
    chats: Vec<Chat>,
    selected: Option<ChatId>,
    messages: HashMap<ChatId, Vec<Message>>,
    compose: String,
    search: String,
    add_contact_input: String,
    panels: Panels,
}

impl ConversationShell {
    /// An empty shell: no chats, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn chat(&self, id: ChatId) -> Option<&Chat> {
        self.chats.iter().find(|chat| chat.id == id)
    }

    pub fn selected_id(&self) -> Option<ChatId> {
        self.selected
    }

    pub fn selected_chat(&self) -> Option<&Chat> {
        self.selected.and_then(|id| self.chat(id))
    }

    /// Log of one chat, oldest first.
    pub fn messages(&self, id: ChatId) -> &[Message] {
        self.messages.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn selected_messages(&self) -> &[Message] {
        self.selected.map(|id| self.messages(id)).unwrap_or_default()
    }

    /// Points the selection at `id`. Unknown ids are ignored so the
    /// selection always names a chat in the collection.
    pub fn select_chat(&mut self, id: ChatId) -> bool {
        if self.chat(id).is_none() {
            tracing::warn!(%id, "Cannot select unknown chat");
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn compose(&self) -> &str {
        &self.compose
    }

    pub fn set_compose(&mut self, text: impl Into<String>) {
        self.compose = text.into();
    }

    /// Sends the compose field to the selected chat.
    pub fn send_compose(&mut self) -> Option<MessageId> {
        let text = self.compose.clone();
        self.send_message(&text)
    }

    /// Appends `text` as typed from the current user to the selected chat
    /// and clears the compose field. Blank text or a missing selection leaves
    /// every log untouched.
    pub fn send_message(&mut self, text: &str) -> Option<MessageId> {
        if text.trim().is_empty() {
            return None;
        }
        let chat_id = self.selected?;
        let id = self.append_message(chat_id, Sender::Me, text, clock_time())?;
        self.compose.clear();
        tracing::debug!(%chat_id, id, "Message appended");
        Some(id)
    }

    /// Appends a message to the log of `chat_id`, numbering it after the
    /// last one.
    pub fn append_message(
        &mut self,
        chat_id: ChatId,
        sender: Sender,
        text: impl Into<String>,
        time: impl Into<String>,
    ) -> Option<MessageId> {
        self.chat(chat_id)?;
        let log = self.messages.entry(chat_id).or_default();
        let id = log.len() as MessageId + 1;
        log.push(Message::new(id, text, sender, time));
        Some(id)
    }

    /// Adds a chat for `username` without any lookup. Returns the id of the
    /// new chat, or of the existing one when the username is already known.
    pub fn add_contact(&mut self, username: &str) -> Option<ChatId> {
        let username = parse_contact_username(username);
        if username.is_empty() {
            return None;
        }
        Some(self.insert_contact(DirectoryEntry::unverified(username)))
    }

    /// Adds a chat for a resolved directory entry and selects it.
    pub fn insert_contact(&mut self, entry: DirectoryEntry) -> ChatId {
        let id = match self.chats.iter().find(|chat| chat.username == entry.username) {
            Some(existing) => {
                tracing::debug!(username = ?entry.username, "Contact already present");
                existing.id
            }
            None => {
                let chat = entry.into_chat();
                let id = chat.id;
                tracing::info!(username = ?chat.username, %id, "Contact added");
                self.messages.insert(id, Vec::new());
                self.chats.push(chat);
                id
            }
        };
        self.selected = Some(id);
        self.add_contact_input.clear();
        self.panels.add_contact = false;
        id
    }

    /// Adds a prepared chat with its history, used for seeding.
    pub fn push_chat(&mut self, chat: Chat, history: Vec<Message>) {
        self.messages.insert(chat.id, history);
        self.chats.push(chat);
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Chats matching the search field.
    pub fn filtered_chats(&self) -> Vec<&Chat> {
        filter_chats(&self.chats, &self.search)
    }

    pub fn add_contact_input(&self) -> &str {
        &self.add_contact_input
    }

    pub fn set_add_contact_input(&mut self, value: impl Into<String>) {
        self.add_contact_input = value.into();
    }

    pub fn panels(&self) -> Panels {
        self.panels
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.panels.is_open(panel)
    }

    pub fn toggle_panel(&mut self, panel: Panel) {
        let slot = self.panels.slot(panel);
        *slot = !*slot;
    }

    pub fn set_panel(&mut self, panel: Panel, open: bool) {
        *self.panels.slot(panel) = open;
    }
}
