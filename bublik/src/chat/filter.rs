use crate::models::Chat;

/// Chats whose name or username contains `query`, ignoring case. An empty
/// query keeps every chat. Order is preserved.
pub fn filter_chats<'a>(chats: &'a [Chat], query: &str) -> Vec<&'a Chat> {
    if query.is_empty() {
        return chats.iter().collect();
    }
    let query = query.to_lowercase();
    chats.iter().filter(|chat| chat.matches(&query)).collect()
}
