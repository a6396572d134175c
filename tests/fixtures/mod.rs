use serde_json::{Value, json};

pub fn sample_chat_request() -> Value {
    json!({
        "model": "test-model",
        "messages": [{"role": "user", "content": "hi"}]
    })
}

pub fn multi_message_chat_request() -> Value {
    json!({
        "model": "test-model",
        "messages": [
            {"role": "system", "content": "You are a helpful assistant."},
            {"role": "user", "content": "Hello, how are you?"},
            {"role": "assistant", "content": "I'm doing well."},
            {"role": "user", "content": "Great!"}
        ]
    })
}

pub fn empty_messages_request() -> Value {
    json!({
        "model": "test-model",
        "messages": []
    })
}

pub fn missing_model_request() -> Value {
    json!({
        "messages": [{"role": "user", "content": "hi"}]
    })
}
