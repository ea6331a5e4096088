//! Data shapes shared with Discord and the bot backend.

pub mod api;
pub mod discord;
pub mod feature;
pub mod guild;
