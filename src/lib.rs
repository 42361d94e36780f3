//! A single-endpoint HTTP relay: accepts an authenticated image URL and
//! forwards it, together with a fixed instructional prompt, to a
//! vision-capable chat-completion API, returning the model's output verbatim.

pub mod config;
pub mod llm;
pub mod server;
