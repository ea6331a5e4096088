//! Featureboard Test Utils
//!
//! Provides shared testing utilities for the featureboard dashboard. The factories in
//! this crate build JSON payloads shaped like the ones Discord and the bot backend
//! return, so tests exercise the same deserialization path the dashboard uses at
//! runtime.
//!
//! # Overview
//!
//! - **discord**: guild listings as returned by Discord's current-user guild endpoint
//! - **feature**: guild state and per-feature data as returned by the bot backend
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::discord::{create_test_guild, GuildPermissions};
//!
//! #[test]
//! fn admin_guild_is_configurable() {
//!     let guild: UserGuildDto = serde_json::from_value(create_test_guild(
//!         123456789,
//!         "Test Guild",
//!         None,
//!         GuildPermissions::Bits(8),
//!     ))
//!     .unwrap();
//!     // Use in your tests...
//! }
//! ```

pub mod discord;
pub mod feature;
