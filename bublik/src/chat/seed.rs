use crate::models::{Chat, Message, Sender};

use super::ConversationShell;

struct SeedChat {
    name: &'static str,
    username: &'static str,
    last_message: &'static str,
    time: &'static str,
    unread: u32,
    online: bool,
}

const DEMO_CHATS: [SeedChat; 4] = [
    SeedChat {
        name: "Anna Smirnova",
        username: "anna",
        last_message: "Hi! How are you?",
        time: "14:32",
        unread: 2,
        online: true,
    },
    SeedChat {
        name: "Design Team",
        username: "design_team",
        last_message: "Sent over the mockups",
        time: "13:15",
        unread: 0,
        online: false,
    },
    SeedChat {
        name: "Maxim Ivanov",
        username: "maxim",
        last_message: "Call at 15:00",
        time: "12:45",
        unread: 1,
        online: true,
    },
    SeedChat {
        name: "Project Apollo",
        username: "apollo",
        last_message: "Updated the docs",
        time: "11:20",
        unread: 0,
        online: false,
    },
];

const DEMO_HISTORY: [(&str, Sender, &str); 3] = [
    ("Hi! How are you?", Sender::Other, "14:30"),
    ("Great! Working on a new project", Sender::Me, "14:31"),
    ("Cool! Tell me more?", Sender::Other, "14:32"),
];

/// Shell pre-filled with the demo conversations. The first chat is selected
/// and carries a short history.
pub fn demo_shell() -> ConversationShell {
    let mut shell = ConversationShell::new();
    for (index, seed) in DEMO_CHATS.iter().enumerate() {
        let mut chat = Chat::new(seed.name, seed.username);
        chat.last_message = seed.last_message.to_string();
        chat.time = seed.time.to_string();
        chat.unread = seed.unread;
        chat.online = seed.online;
        let history = if index == 0 {
            DEMO_HISTORY
                .iter()
                .enumerate()
                .map(|(i, (text, sender, time))| Message::new(i as u64 + 1, *text, *sender, *time))
                .collect()
        } else {
            Vec::new()
        };
        shell.push_chat(chat, history);
    }
    if let Some(first) = shell.chats().first().map(|chat| chat.id) {
        shell.select_chat(first);
    }
    shell
}
