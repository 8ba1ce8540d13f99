pub(crate) mod error;
pub(crate) mod stream_client;

pub use error::{ChatError, Result};
pub use stream_client::StreamChatClient;
