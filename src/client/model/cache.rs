use crate::client::model::error::ApiError;

/// Data fetched once and kept for the rest of the session.
#[derive(Clone, Default)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_fetched(&self) -> bool {
        !matches!(self, Cache::NotFetched)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }
}

/// Data fetched for one guild at a time; switching guilds refetches.
#[derive(Clone, Default)]
pub enum GuildCache<T> {
    #[default]
    NotFetched,
    Loading {
        guild_id: u64,
    },
    Fetched {
        guild_id: u64,
        data: T,
    },
    Error {
        guild_id: u64,
        error: ApiError,
    },
}

impl<T> GuildCache<T> {
    pub fn guild_id(&self) -> Option<u64> {
        match self {
            GuildCache::Loading { guild_id }
            | GuildCache::Fetched { guild_id, .. }
            | GuildCache::Error { guild_id, .. } => Some(*guild_id),
            GuildCache::NotFetched => None,
        }
    }

    /// Whether the cache holds, or is fetching, data for `guild_id`.
    pub fn is_for(&self, guild_id: u64) -> bool {
        self.guild_id() == Some(guild_id)
    }
}
