//! Discord bot integration.
//!
//! This module owns everything that talks to Discord: the compiled-in command
//! catalog, the synchronizer that registers it, the session handle used for REST
//! calls and the gateway event handlers.
//!
//! Startup builds the client first, takes its HTTP handle, then spawns the gateway
//! loop in its own tokio task. Command registration goes through the REST API and
//! does not wait for the gateway handshake.
//!
//! # Gateway Intents
//!
//! Slash commands arrive as interactions, which need no privileged intents. Only
//! `GUILDS` is requested so the ready event reports the guilds the bot is in.

pub mod catalog;
pub mod handler;
pub mod session;
pub mod start;
pub mod sync;
