pub mod chat;
pub mod chat_token_response;
