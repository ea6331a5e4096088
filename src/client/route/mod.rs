pub mod feature_settings;
pub mod guild_features;
pub mod guild_select;
pub mod home;
pub mod not_found;
pub mod profile;

pub use feature_settings::FeatureSettings;
pub use guild_features::GuildFeatures;
pub use guild_select::GuildSelect;
pub use home::Home;
pub use not_found::NotFound;
pub use profile::Profile;
