use std::time::{SystemTime, UNIX_EPOCH};

use serde::{self, Deserialize, Serialize};

use super::request::ChatMessage;
use super::{FinishReason, Role};
use crate::consts;

#[derive(Debug, Serialize, Deserialize)]
pub struct Choice {
    pub index: i32,
    pub message: ChatMessage,
    pub finish_reason: FinishReason,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletion {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<Choice>,
}

impl ChatCompletion {
    /// Canned single-choice completion echoing the requested model name.
    /// The id is a fixed placeholder, not unique per request.
    pub fn mock_reply(model: String) -> Self {
        let created = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        ChatCompletion {
            id: consts::MOCK_COMPLETION_ID.to_string(),
            object: consts::OBJECT_CHAT_COMPLETION.to_string(),
            created,
            model,
            choices: vec![Choice {
                index: 0,
                message: ChatMessage {
                    role: Role::Assistant,
                    content: consts::MOCK_REPLY.to_string(),
                },
                finish_reason: FinishReason::Stop,
            }],
        }
    }
}
