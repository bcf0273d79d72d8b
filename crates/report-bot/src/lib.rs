//! Election report bot: a LINE webhook that checks unit reports for the
//! required fields and answers in the chat.

pub mod config;
pub mod handler;
pub mod server;

pub use config::{Config, ConfigError};
pub use handler::{MessageHandler, Outcome};
pub use server::{AppState, router, serve};
