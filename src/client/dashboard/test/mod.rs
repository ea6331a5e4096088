use crate::client::dashboard::{
    fixture::{decode, test_app_config, TEST_INVITE_URL},
    ConfigError, GuildFilter,
};
use crate::model::{discord::UserGuildDto, guild::GuildInfo};
use test_utils::{
    discord::{create_test_guild, GuildPermissions},
    feature::create_test_guild_info,
};
