//! tandem-chat: mirrors user identities into the hosted chat directory.
//!
//! The server talks to the directory only through [`ChatDirectory`], so
//! handlers and the reconciliation sweep can run against a fake in tests.

pub mod chat_directory;
pub(crate) mod client;


pub use chat_directory::{ChatDirectory, ChatUser};
pub use client::{ChatError, Result, StreamChatClient};
