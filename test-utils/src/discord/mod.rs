//! Test factories for Discord API payloads.
//!
//! Discord's current-user guild listing returns partial guild objects with the
//! snowflake ID and the permission bit-field both encoded as strings. These factories
//! produce that exact shape so tests can deserialize them into the dashboard DTOs.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - A guild the current user is a member of
//! - `guild::create_test_owned_guild` - A guild the current user owns
//! - `guild::create_test_guild_list` - Several guilds with sequential IDs

pub mod guild;

// Re-export commonly used items for convenience
pub use guild::{create_test_guild, create_test_guild_list, create_test_owned_guild, GuildPermissions};
