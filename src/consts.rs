pub const MOCK_COMPLETION_ID: &str = "mock-id";
pub const OBJECT_CHAT_COMPLETION: &str = "chat.completion";
pub const MOCK_REPLY: &str = "Hello! This is a mock reply.";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

pub const RESTART_SIGNAL_DELAY_MS: u64 = 100;
