use crate::{
    client::{config::ClientConfig, model::error::ApiError},
    model::{discord::UserGuildDto, guild::GuildInfo},
};

use super::helper::{get, parse_optional_response, parse_response, send_request};

/// Get the Discord guilds of the logged-in user
pub async fn get_user_guilds(config: &ClientConfig) -> Result<Vec<UserGuildDto>, ApiError> {
    let response = send_request(get(&config.endpoint("/guilds"))).await?;
    parse_response(response).await
}

/// Get the bot's state for a guild, `None` if the bot has not joined it
pub async fn get_guild_info(
    config: &ClientConfig,
    guild_id: u64,
) -> Result<Option<GuildInfo>, ApiError> {
    let url = config.endpoint(&format!("/guilds/{}", guild_id));
    let response = send_request(get(&url)).await?;
    parse_optional_response(response).await
}
