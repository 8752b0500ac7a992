//! Gateway event handlers attached to the client at startup.
//!
//! Each handler is registered separately with the client builder; Serenity
//! dispatches every event to all of them.

pub mod command;
pub mod ready;
