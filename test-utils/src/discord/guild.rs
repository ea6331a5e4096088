//! Test factory for Discord partial guild payloads.

use serde_json::{json, Value};

/// Permission bit-field of the current user in a test guild.
///
/// `Bits` is encoded the way Discord does (a decimal string), `Raw` is written
/// verbatim and allows simulating malformed payloads.
#[derive(Debug, Clone, Copy)]
pub enum GuildPermissions {
    Bits(u64),
    Raw(&'static str),
}

impl GuildPermissions {
    fn encode(self) -> String {
        match self {
            GuildPermissions::Bits(bits) => bits.to_string(),
            GuildPermissions::Raw(raw) => raw.to_string(),
        }
    }
}

/// Creates a test guild payload with customizable fields.
///
/// The current user is a member but not the owner.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash, written as-is
/// - `permissions` - Permission bit-field of the current user
///
/// # Returns
/// - `Value` - JSON shaped like an entry of `GET /users/@me/guilds`
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::discord::{create_test_guild, GuildPermissions};
///
/// // Guild where the user is an administrator
/// let guild = create_test_guild(123456789, "Test Guild", None, GuildPermissions::Bits(8));
/// ```
pub fn create_test_guild(
    guild_id: u64,
    name: &str,
    icon_hash: Option<&str>,
    permissions: GuildPermissions,
) -> Value {
    guild_payload(guild_id, name, icon_hash, false, permissions)
}

/// Creates a test guild payload owned by the current user.
///
/// Owners receive every permission from Discord, but the bit-field is left at the
/// provided value so ownership checks can be tested independently.
pub fn create_test_owned_guild(guild_id: u64, name: &str, permissions: GuildPermissions) -> Value {
    guild_payload(guild_id, name, None, true, permissions)
}

/// Creates a list of guild payloads with sequential IDs starting at `first_id`.
///
/// Each entry uses the paired permissions and is named `Guild {n}`.
pub fn create_test_guild_list(first_id: u64, permissions: &[GuildPermissions]) -> Value {
    Value::Array(
        permissions
            .iter()
            .enumerate()
            .map(|(offset, perms)| {
                let id = first_id + offset as u64;
                create_test_guild(id, &format!("Guild {}", offset + 1), None, *perms)
            })
            .collect(),
    )
}

fn guild_payload(
    guild_id: u64,
    name: &str,
    icon_hash: Option<&str>,
    owner: bool,
    permissions: GuildPermissions,
) -> Value {
    json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": icon_hash,
        "owner": owner,
        "permissions": permissions.encode(),
        "features": [],
    })
}
