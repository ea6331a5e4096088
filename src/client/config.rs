//! Build-time configuration.
//!
//! The web client has no process environment at runtime, so configuration is read
//! from the environment of the build through `option_env!` and validated once when
//! the app starts.

use crate::{
    client::{
        dashboard::{AppConfig, Capability, ConfigError, GuildConfig, GuildFilter, Pages},
        features,
    },
    model::discord::Permissions,
};

const DEFAULT_API_URL: &str = "/api";
const DEFAULT_BOT_NAME: &str = "Featureboard";
const DISCORD_AUTHORIZE_URL: &str = "https://discord.com/api/oauth2/authorize";

/// Permission integer requested when the bot is invited (administrator).
const INVITE_PERMISSIONS: u64 = 8;

/// Where the bot backend is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_api_url(option_env!("FEATUREBOARD_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Validates a backend base URL.
    ///
    /// Accepts an absolute http(s) URL or a path starting with `/`. A trailing slash
    /// is dropped so endpoint paths can be appended directly.
    pub fn from_api_url(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');

        if raw.trim().starts_with('/') {
            return Ok(Self {
                api_url: trimmed.to_string(),
            });
        }

        let url = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidApiUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self {
            api_url: trimmed.to_string(),
        })
    }

    /// Full URL of a backend path such as `/guilds/1`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// Everything the app needs, loaded once at startup.
pub struct Dashboard {
    pub client: ClientConfig,
    pub app: AppConfig,
}

// Loaded once and shared by reference, so identity is equality.
impl PartialEq for Dashboard {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// Loads and validates the configuration of this build.
pub fn load() -> Result<Dashboard, ConfigError> {
    let client = ClientConfig::from_env()?;

    let invite_url = match option_env!("FEATUREBOARD_INVITE_URL") {
        Some(url) => url.to_string(),
        None => {
            let client_id = option_env!("FEATUREBOARD_CLIENT_ID")
                .ok_or_else(|| ConfigError::MissingEnvVar("FEATUREBOARD_CLIENT_ID".to_string()))?;
            invite_url_from_client_id(client_id)
        }
    };

    let name = option_env!("FEATUREBOARD_BOT_NAME").unwrap_or(DEFAULT_BOT_NAME);
    let app = app_config(name, invite_url).validate()?;

    Ok(Dashboard { client, app })
}

/// The bot's dashboard configuration.
///
/// Guilds are configurable for owners, administrators, and members who can manage
/// the server.
pub fn app_config(name: &str, invite_url: String) -> AppConfig {
    AppConfig {
        name: name.to_string(),
        icon: Capability::Unsupported,
        guild: GuildConfig::new(
            GuildFilter::require_any(Permissions::MANAGE_GUILD),
            features::features(),
        ),
        invite_url,
        pages: Pages::default(),
    }
}

/// Discord OAuth2 URL inviting the bot with the application `client_id`.
pub fn invite_url_from_client_id(client_id: &str) -> String {
    let mut url = match url::Url::parse(DISCORD_AUTHORIZE_URL) {
        Ok(url) => url,
        Err(_) => return String::new(),
    };
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("permissions", &INVITE_PERMISSIONS.to_string())
        .append_pair("scope", "bot applications.commands");
    url.to_string()
}
