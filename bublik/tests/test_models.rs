use bublik::models::{
    Chat, ChatId, Identity, Language, Message, Sender, Settings, SettingsToggle, clock_time,
    initials, is_valid_email, normalize_username,
};

#[test]
fn test_normalize_username_rules() {
    assert_eq!(normalize_username("Bob"), "bob");
    assert_eq!(normalize_username("John.Doe-99"), "johndoe99");
    assert_eq!(normalize_username("  snake_case  "), "snake_case");
    assert_eq!(normalize_username("Алиса"), "");
    assert_eq!(normalize_username(""), "");
}

#[test]
fn test_normalize_username_is_idempotent() {
    for input in ["Bob", "@Alice!", "user name 42", "ÄÖÜ_x", "__Mixed__Case__"] {
        let once = normalize_username(input);
        assert_eq!(normalize_username(&once), once, "input: {input:?}");
    }
}

#[test]
fn test_email_check_only_requires_at_sign() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("@"));
    assert!(!is_valid_email("ab.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_initials() {
    assert_eq!(initials("Anna Smirnova"), "AS");
    assert_eq!(initials("design team"), "DT");
    assert_eq!(initials("  Bob  "), "B");
    assert_eq!(initials(""), "");
}

#[test]
fn test_identity_handle_and_json() {
    // Arrange
    let identity = Identity::new("a@b.com", "bob", "Bob");
    // Act
    let raw = serde_json::to_string(&identity).expect("serialize identity");
    let decoded: Identity = serde_json::from_str(&raw).expect("deserialize identity");
    // Assert
    assert_eq!(identity.handle(), "@bob");
    assert_eq!(decoded, identity);
    assert!(raw.contains("\"username\":\"bob\""));
}

#[test]
fn test_chat_matches_name_or_username() {
    let chat = Chat::new("Maxim Ivanov", "maxim");
    assert!(chat.matches("ivan"));
    assert!(chat.matches("max"));
    assert!(!chat.matches("anna"));
    assert_eq!(chat.initials(), "MI");
    assert_eq!(chat.unread, 0);
    assert!(!chat.online);
    assert_eq!(chat.presence_label(), "last seen recently");
}

#[test]
fn test_chat_ids_are_unique_and_parse_back() {
    let a = ChatId::generate();
    let b = ChatId::generate();
    assert_ne!(a, b);
    let parsed: ChatId = a.to_string().parse().expect("parse chat id");
    assert_eq!(parsed, a);
}

#[test]
fn test_message_sender() {
    let mine = Message::new(1, "hello", Sender::Me, "10:00");
    let theirs = Message::new(2, "hi", Sender::Other, "10:01");
    assert!(mine.is_mine());
    assert!(!theirs.is_mine());
}

#[test]
fn test_clock_time_format() {
    let time = clock_time();
    assert_eq!(time.len(), 5);
    assert_eq!(time.as_bytes()[2], b':');
    assert!(time.chars().filter(|c| *c != ':').all(|c| c.is_ascii_digit()));
}

#[test]
fn test_settings_defaults_and_toggles() {
    // Arrange
    let mut settings = Settings::default();
    // Assert defaults
    assert!(!settings.dark_theme);
    assert!(settings.notifications);
    assert!(settings.sounds);
    assert!(settings.show_online_status);
    assert_eq!(settings.language, Language::En);
    // Act
    for toggle in SettingsToggle::ALL {
        let value = settings.get(toggle);
        settings.set(toggle, !value);
        assert_eq!(settings.get(toggle), !value);
    }
    assert!(settings.dark_theme);
    assert!(!settings.show_online_status);
}

#[test]
fn test_language_codes() {
    assert_eq!(Language::from_code("ru"), Some(Language::Ru));
    assert_eq!(Language::from_code("en"), Some(Language::En));
    assert_eq!(Language::from_code("de"), None);
    assert_eq!(Language::Ru.code(), "ru");
}
