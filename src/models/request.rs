use serde::{self, Deserialize, Serialize};

use super::Role;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Request body for the chat completion route. `model` and `messages` are
/// the only required fields; anything else clients send is ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletionCreate {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}
