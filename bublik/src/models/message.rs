/// Position of a message within its chat log, starting at 1.
pub type MessageId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Me,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub time: String,
}

impl Message {
    pub fn new(id: MessageId, text: impl Into<String>, sender: Sender, time: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            time: time.into(),
        }
    }

    pub fn is_mine(&self) -> bool {
        self.sender == Sender::Me
    }
}
