//! Election unit report checks.
//!
//! A report is free text sent to the bot after the `#รายงาน` command prefix.
//! It is complete when every [`RequiredField`] keyword occurs in it somewhere;
//! nothing else about its structure is inspected.

pub mod command;
pub mod fields;
pub mod reply;
pub mod validate;

pub use command::{COMMAND_PREFIX, extract_report};
pub use fields::RequiredField;
pub use reply::{SUCCESS_REPLY, USAGE_EXAMPLE, compose_reply};
pub use validate::validate;
