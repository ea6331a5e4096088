use crate::client::dashboard::{
    fixture::{decode, test_features},
    FilterError, GuildConfig, GuildFilter,
};
use crate::model::discord::{Permissions, UserGuildDto};
use test_utils::discord::{
    create_test_guild, create_test_guild_list, create_test_owned_guild, GuildPermissions,
};

mod allows;
mod configurable_guilds;
mod require_any;
