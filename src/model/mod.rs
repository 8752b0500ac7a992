//! Domain models shared across the bot.

pub mod api;
pub mod command;
