//! Dashboard configuration contract.
//!
//! The host application describes its bot once through [`AppConfig`]: its name and
//! icon, the invite URL, which guilds are configurable, and how each feature renders
//! its settings. Routes read this configuration from context; nothing in it changes
//! after startup.
//!
//! - **Guild filter** (`guild`) - which guilds the current user may configure
//! - **Feature registry** (`feature`) - per-feature metadata and render hooks
//! - **Render contract** (`render`) - what a render hook returns
//! - **Save protocol** (`save`) - serialize, send, and track a feature update
//! - **Draft** (`draft`) - baseline and edited value kept by render hooks

pub mod capability;
pub mod draft;
pub mod error;
pub mod feature;
pub mod guild;
pub mod render;
pub mod save;

pub use capability::Capability;
pub use draft::Draft;
pub use error::{ConfigError, FeatureError, FilterError, SerializeError};
pub use feature::{ElementFn, FeatureConfig, FeatureStatus, FeatureView, Features};
pub use guild::{GuildConfig, GuildFilter};
pub use render::{FeatureBody, FeatureRender, FormBody, SaveActions};
pub use save::{FeatureEndpoint, FeatureUpdate, LoadedSettings, SaveBarControls, SaveStatus};

/// Optional pages the host may replace.
#[derive(Default, Clone, Copy)]
pub struct Pages {
    pub use_dashboard: Capability<ElementFn>,
    pub use_profile: Capability<ElementFn>,
}

/// Top-level dashboard configuration.
pub struct AppConfig {
    pub name: String,
    pub icon: Capability<ElementFn>,
    pub guild: GuildConfig,
    /// OAuth2 URL that adds the bot to a guild.
    pub invite_url: String,
    pub pages: Pages,
}

impl AppConfig {
    /// Checks the configuration invariants.
    ///
    /// # Returns
    /// - `Ok(AppConfig)` - Name and invite URL are usable
    /// - `Err(ConfigError::EmptyName)` - Name is empty or whitespace
    /// - `Err(ConfigError::EmptyInviteUrl)` - Invite URL is empty
    /// - `Err(ConfigError::InvalidInviteUrl)` - Invite URL is not an absolute URL
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }

        if self.invite_url.trim().is_empty() {
            return Err(ConfigError::EmptyInviteUrl);
        }

        url::Url::parse(&self.invite_url).map_err(|source| ConfigError::InvalidInviteUrl {
            url: self.invite_url.clone(),
            source,
        })?;

        Ok(self)
    }

    /// Invite URL with the guild preselected in Discord's authorization screen.
    pub fn invite_url_for(&self, guild_id: u64) -> String {
        match url::Url::parse(&self.invite_url) {
            Ok(mut url) => {
                url.query_pairs_mut()
                    .append_pair("guild_id", &guild_id.to_string())
                    .append_pair("disable_guild_select", "true");
                url.to_string()
            }
            Err(_) => self.invite_url.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixture;
#[cfg(test)]
mod test;
