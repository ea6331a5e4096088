use std::num::ParseIntError;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

const DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";

bitflags! {
    /// Discord permission bits relevant to deciding who may configure the bot.
    ///
    /// Values match Discord's permission bit-field; unknown bits are retained so a
    /// round trip through `bits()` never loses information.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        const CREATE_INSTANT_INVITE = 1 << 0;
        const KICK_MEMBERS = 1 << 1;
        const BAN_MEMBERS = 1 << 2;
        const ADMINISTRATOR = 1 << 3;
        const MANAGE_CHANNELS = 1 << 4;
        const MANAGE_GUILD = 1 << 5;
        const VIEW_AUDIT_LOG = 1 << 7;
        const MANAGE_MESSAGES = 1 << 13;
        const MANAGE_ROLES = 1 << 28;
        const MANAGE_WEBHOOKS = 1 << 29;

        const _ = !0;
    }
}

/// A guild as returned by Discord's current-user guild listing.
///
/// Discord encodes both the snowflake ID and the permission bit-field as strings;
/// the ID is parsed on deserialization, the permissions are parsed on demand so a
/// malformed value only affects the guild that carries it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UserGuildDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    pub permissions: String,
}

impl UserGuildDto {
    /// Parses the permission bit-field of the current user in this guild.
    pub fn permissions(&self) -> Result<Permissions, ParseIntError> {
        self.permissions
            .parse::<u64>()
            .map(Permissions::from_bits_retain)
    }

    /// Discord CDN URL of the guild icon, animated icons (`a_` prefix) as GIF.
    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_ref().map(|hash| {
            let ext = if hash.starts_with("a_") { "gif" } else { "png" };
            format!("{}/icons/{}/{}.{}", DISCORD_CDN_URL, self.id, hash, ext)
        })
    }

    /// First character of the guild name, shown when the guild has no icon.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

fn deserialize_u64_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer)?
        .parse::<u64>()
        .map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::discord::{create_test_guild, GuildPermissions};

    fn guild(json: serde_json::Value) -> UserGuildDto {
        serde_json::from_value(json).unwrap()
    }

    /// Tests parsing a guild from Discord's string-encoded payload.
    ///
    /// Verifies the snowflake ID is parsed into a u64 and the permission
    /// bit-field decodes into the expected flags.
    ///
    /// Expected: ID 123456789 with ADMINISTRATOR set
    #[test]
    fn parses_discord_guild_payload() {
        let dto = guild(create_test_guild(
            123456789,
            "Test Guild",
            None,
            GuildPermissions::Bits(8),
        ));

        assert_eq!(dto.id, 123456789);
        assert!(dto
            .permissions()
            .unwrap()
            .contains(Permissions::ADMINISTRATOR));
    }

    /// Tests that a malformed permission string is reported as an error.
    ///
    /// Expected: Err(ParseIntError)
    #[test]
    fn rejects_malformed_permissions() {
        let dto = guild(create_test_guild(
            1,
            "Broken",
            None,
            GuildPermissions::Raw("not-a-number"),
        ));

        assert!(dto.permissions().is_err());
    }

    /// Tests that unknown permission bits survive parsing.
    ///
    /// Expected: bits() equals the original value
    #[test]
    fn retains_unknown_permission_bits() {
        let raw = (1u64 << 40) | 8;
        let dto = guild(create_test_guild(1, "Guild", None, GuildPermissions::Bits(raw)));

        assert_eq!(dto.permissions().unwrap().bits(), raw);
    }

    /// Tests icon URL construction for static and animated icons.
    ///
    /// Expected: .png for static hashes, .gif for `a_` hashes, None without icon
    #[test]
    fn builds_icon_urls() {
        let static_icon = guild(create_test_guild(
            42,
            "Guild",
            Some("abc"),
            GuildPermissions::Bits(0),
        ));
        let animated = guild(create_test_guild(
            42,
            "Guild",
            Some("a_abc"),
            GuildPermissions::Bits(0),
        ));
        let no_icon = guild(create_test_guild(42, "Guild", None, GuildPermissions::Bits(0)));

        assert_eq!(
            static_icon.icon_url().as_deref(),
            Some("https://cdn.discordapp.com/icons/42/abc.png")
        );
        assert_eq!(
            animated.icon_url().as_deref(),
            Some("https://cdn.discordapp.com/icons/42/a_abc.gif")
        );
        assert_eq!(no_icon.icon_url(), None);
    }
}
