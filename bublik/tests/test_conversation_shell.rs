use bublik::chat::{ConversationShell, Panel, demo_shell, filter_chats};
use bublik::contact::DirectoryEntry;
use bublik::models::{Chat, ChatId, Sender};

fn shell_with(chats: &[(&str, &str)]) -> ConversationShell {
    let mut shell = ConversationShell::new();
    for (name, username) in chats {
        shell.push_chat(Chat::new(*name, *username), Vec::new());
    }
    shell
}

#[test]
fn test_new_shell_is_empty() {
    let shell = ConversationShell::new();
    assert!(shell.chats().is_empty());
    assert_eq!(shell.selected_id(), None);
    assert!(shell.selected_messages().is_empty());
    assert_eq!(shell.panels(), Default::default());
}

#[test]
fn test_filter_is_case_insensitive_and_keeps_order() {
    // Arrange
    let shell = shell_with(&[
        ("Anna Smirnova", "anna"),
        ("Design Team", "design_team"),
        ("Maxim Ivanov", "maxim"),
    ]);
    // Act
    let by_name: Vec<_> = filter_chats(shell.chats(), "ANNA").iter().map(|c| c.name.clone()).collect();
    let by_user: Vec<_> = filter_chats(shell.chats(), "_team").iter().map(|c| c.name.clone()).collect();
    let common: Vec<_> = filter_chats(shell.chats(), "a").iter().map(|c| c.name.clone()).collect();
    // Assert
    assert_eq!(by_name, vec!["Anna Smirnova"]);
    assert_eq!(by_user, vec!["Design Team"]);
    assert_eq!(common, vec!["Anna Smirnova", "Design Team", "Maxim Ivanov"]);
    assert_eq!(filter_chats(shell.chats(), "").len(), 3);
    assert!(filter_chats(shell.chats(), "zzz").is_empty());
}

#[test]
fn test_search_field_drives_filtered_chats() {
    let mut shell = shell_with(&[("Anna Smirnova", "anna"), ("Maxim Ivanov", "maxim")]);
    shell.set_search("max");
    let names: Vec<_> = shell.filtered_chats().iter().map(|c| c.username.clone()).collect();
    assert_eq!(names, vec!["maxim"]);
    assert_eq!(shell.chats().len(), 2);
}

#[test]
fn test_send_appends_to_selected_chat() {
    // Arrange
    let mut shell = demo_shell();
    let selected = shell.selected_id().expect("demo selects a chat");
    let before = shell.selected_messages().len();
    shell.set_compose("  Hello there  ");
    // Act
    let id = shell.send_compose();
    // Assert
    assert_eq!(id, Some(before as u64 + 1));
    let log = shell.messages(selected);
    assert_eq!(log.len(), before + 1);
    let last = log.last().expect("message appended");
    assert_eq!(last.text, "  Hello there  ");
    assert_eq!(last.sender, Sender::Me);
    assert_eq!(shell.compose(), "");
}

#[test]
fn test_sent_text_keeps_whitespace() {
    let mut shell = demo_shell();
    let selected = shell.selected_id().expect("demo selects a chat");
    let id = shell.send_message("  fn main() {}\n");
    assert!(id.is_some());
    let last = shell.messages(selected).last().expect("message appended");
    assert_eq!(last.text, "  fn main() {}\n");
}

#[test]
fn test_blank_message_is_ignored() {
    let mut shell = demo_shell();
    let before = shell.selected_messages().len();
    shell.set_compose("   \n\t ");
    assert_eq!(shell.send_compose(), None);
    assert_eq!(shell.selected_messages().len(), before);
    assert_eq!(shell.compose(), "   \n\t ");
}

#[test]
fn test_send_without_selection_is_ignored() {
    let mut shell = shell_with(&[("Anna", "anna")]);
    assert_eq!(shell.send_message("hi"), None);
    let id = shell.chats()[0].id;
    assert!(shell.messages(id).is_empty());
}

#[test]
fn test_logs_are_partitioned_per_chat() {
    // Arrange
    let mut shell = shell_with(&[("Anna", "anna"), ("Maxim", "maxim")]);
    let anna = shell.chats()[0].id;
    let maxim = shell.chats()[1].id;
    // Act
    shell.select_chat(anna);
    shell.send_message("for anna");
    shell.select_chat(maxim);
    shell.send_message("for maxim");
    shell.send_message("again");
    // Assert
    let anna_log: Vec<_> = shell.messages(anna).iter().map(|m| m.text.as_str()).collect();
    let maxim_log: Vec<_> = shell.messages(maxim).iter().map(|m| (m.id, m.text.as_str())).collect();
    assert_eq!(anna_log, vec!["for anna"]);
    assert_eq!(maxim_log, vec![(1, "for maxim"), (2, "again")]);
}

#[test]
fn test_select_unknown_chat_is_ignored() {
    let mut shell = demo_shell();
    let selected = shell.selected_id();
    assert!(!shell.select_chat(ChatId::generate()));
    assert_eq!(shell.selected_id(), selected);
}

#[test]
fn test_append_to_unknown_chat_fails() {
    let mut shell = ConversationShell::new();
    assert_eq!(shell.append_message(ChatId::generate(), Sender::Other, "hi", "10:00"), None);
}

#[test]
fn test_add_contact_creates_and_selects_chat() {
    // Arrange
    let mut shell = demo_shell();
    shell.set_panel(Panel::AddContact, true);
    shell.set_add_contact_input("@Alice");
    let before = shell.chats().len();
    // Act
    let id = shell.add_contact("@Alice").expect("contact added");
    // Assert
    assert_eq!(shell.chats().len(), before + 1);
    let chat = shell.chat(id).expect("chat exists");
    assert_eq!(chat.username, "alice");
    assert_eq!(chat.name, "alice");
    assert_eq!(chat.unread, 0);
    assert_eq!(shell.selected_id(), Some(id));
    assert!(shell.messages(id).is_empty());
    assert!(!shell.is_open(Panel::AddContact));
    assert_eq!(shell.add_contact_input(), "");
}

#[test]
fn test_add_contact_to_empty_shell() {
    // Arrange
    let mut shell = ConversationShell::new();
    // Act
    let id = shell.add_contact("alice").expect("contact added");
    // Assert
    assert_eq!(shell.chats().len(), 1);
    let chat = &shell.chats()[0];
    assert_eq!(chat.id, id);
    assert_eq!(chat.username, "alice");
    assert_eq!(chat.unread, 0);
    assert_eq!(shell.selected_id(), Some(id));
}

#[test]
fn test_add_contact_rejects_empty_username() {
    let mut shell = demo_shell();
    let before = shell.chats().len();
    assert_eq!(shell.add_contact("  @  "), None);
    assert_eq!(shell.add_contact("!!!"), None);
    assert_eq!(shell.chats().len(), before);
}

#[test]
fn test_add_existing_contact_selects_it() {
    let mut shell = demo_shell();
    let before = shell.chats().len();
    let maxim = shell.chats()[2].id;
    let id = shell.add_contact("Maxim").expect("existing contact");
    assert_eq!(id, maxim);
    assert_eq!(shell.chats().len(), before);
    assert_eq!(shell.selected_id(), Some(maxim));
}

#[test]
fn test_insert_resolved_entry_keeps_display_name() {
    let mut shell = ConversationShell::new();
    let id = shell.insert_contact(DirectoryEntry {
        username: "bob".to_string(),
        name: "Bob Builder".to_string(),
        online: true,
    });
    let chat = shell.chat(id).expect("chat exists");
    assert_eq!(chat.name, "Bob Builder");
    assert!(chat.online);
}

#[test]
fn test_panels_toggle_independently() {
    let mut shell = ConversationShell::new();
    shell.toggle_panel(Panel::Profile);
    shell.toggle_panel(Panel::Settings);
    assert!(shell.is_open(Panel::Profile));
    assert!(shell.is_open(Panel::Settings));
    assert!(!shell.is_open(Panel::AddContact));
    shell.toggle_panel(Panel::Profile);
    assert!(!shell.is_open(Panel::Profile));
    assert!(shell.is_open(Panel::Settings));
    shell.set_panel(Panel::Settings, false);
    assert!(!shell.panels().settings);
}

#[test]
fn test_demo_shell_content() {
    let shell = demo_shell();
    let names: Vec<_> = shell.chats().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Anna Smirnova", "Design Team", "Maxim Ivanov", "Project Apollo"]
    );
    assert_eq!(shell.selected_id(), Some(shell.chats()[0].id));
    assert_eq!(shell.selected_messages().len(), 3);
    assert!(shell.messages(shell.chats()[1].id).is_empty());
    assert_eq!(shell.chats()[0].unread, 2);
    assert!(shell.chats()[0].online);
}
