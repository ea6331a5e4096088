use crate::client::dashboard::{
    fixture::{decode, test_features},
    FeatureBody, FeatureError,
};
use crate::model::{feature::FeatureId, guild::GuildInfo};
use test_utils::feature::{
    create_test_guild_info, create_test_meme, create_test_music, create_test_welcome_message,
};

mod lookup;
mod resolve_enabled;
