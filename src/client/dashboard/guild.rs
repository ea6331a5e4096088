//! Guild filtering.
//!
//! Decides which of the current user's guilds show up as configurable. Each guild
//! is evaluated on its own; a predicate that cannot decide fails closed.

use std::rc::Rc;

use dioxus_logger::tracing;

use crate::{
    client::dashboard::{error::FilterError, feature::Features},
    model::discord::{Permissions, UserGuildDto},
};

type Predicate = dyn Fn(&UserGuildDto) -> Result<bool, FilterError>;

/// Predicate deciding whether a guild is configurable by the current user.
#[derive(Clone)]
pub struct GuildFilter(Rc<Predicate>);

impl GuildFilter {
    /// Wraps an infallible predicate.
    #[cfg(test)]
    pub fn new(predicate: impl Fn(&UserGuildDto) -> bool + 'static) -> Self {
        Self(Rc::new(move |guild| Ok(predicate(guild))))
    }

    /// Wraps a predicate that may fail to decide.
    pub fn try_new(
        predicate: impl Fn(&UserGuildDto) -> Result<bool, FilterError> + 'static,
    ) -> Self {
        Self(Rc::new(predicate))
    }

    #[cfg(test)]
    pub fn allow_all() -> Self {
        Self::new(|_| true)
    }

    /// Allows owners, administrators, and members holding any of `permissions`.
    ///
    /// A malformed permission field is reported as an error for that guild.
    pub fn require_any(permissions: Permissions) -> Self {
        Self::try_new(move |guild| {
            if guild.owner {
                return Ok(true);
            }

            let granted =
                guild
                    .permissions()
                    .map_err(|source| FilterError::InvalidPermissions {
                        guild_id: guild.id,
                        value: guild.permissions.clone(),
                        source,
                    })?;

            Ok(granted.contains(Permissions::ADMINISTRATOR) || granted.intersects(permissions))
        })
    }

    pub fn evaluate(&self, guild: &UserGuildDto) -> Result<bool, FilterError> {
        (self.0)(guild)
    }

    /// Evaluates the predicate, treating a failure as "not configurable".
    pub fn allows(&self, guild: &UserGuildDto) -> bool {
        match self.evaluate(guild) {
            Ok(allowed) => allowed,
            Err(err) => {
                tracing::warn!("Hiding guild {} ({}): {}", guild.id, guild.name, err);
                false
            }
        }
    }
}

/// Per-guild dashboard settings.
pub struct GuildConfig {
    pub filter: GuildFilter,
    pub features: Features,
}

impl GuildConfig {
    pub fn new(filter: GuildFilter, features: Features) -> Self {
        Self { filter, features }
    }

    /// Guilds the filter allows, in their original order.
    pub fn configurable_guilds<'a>(&self, guilds: &'a [UserGuildDto]) -> Vec<&'a UserGuildDto> {
        guilds
            .iter()
            .filter(|guild| self.filter.allows(guild))
            .collect()
    }
}

#[cfg(test)]
mod test;
