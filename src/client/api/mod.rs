#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod feature;

#[cfg(feature = "web")]
pub mod guild;

#[cfg(feature = "web")]
pub use feature::{disable_feature, enable_feature, get_feature, update_feature};

#[cfg(feature = "web")]
pub use guild::{get_guild_info, get_user_guilds};
