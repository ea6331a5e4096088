use super::*;

/// Tests that filtering keeps the input order.
///
/// Guilds 1 and 3 hold MANAGE_GUILD, guild 2 does not.
///
/// Expected: [1, 3]
#[test]
fn keeps_allowed_guilds_in_order() {
    let config = GuildConfig::new(
        GuildFilter::require_any(Permissions::MANAGE_GUILD),
        test_features(),
    );
    let manage = GuildPermissions::Bits(Permissions::MANAGE_GUILD.bits());
    let guilds: Vec<UserGuildDto> = decode(create_test_guild_list(
        1,
        &[manage, GuildPermissions::Bits(0), manage],
    ));

    let ids: Vec<u64> = config
        .configurable_guilds(&guilds)
        .into_iter()
        .map(|guild| guild.id)
        .collect();

    assert_eq!(ids, vec![1, 3]);
}

/// Tests that one malformed guild does not hide the others.
///
/// Expected: only the malformed guild is dropped
#[test]
fn malformed_guild_does_not_affect_others() {
    let config = GuildConfig::new(
        GuildFilter::require_any(Permissions::MANAGE_GUILD),
        test_features(),
    );
    let guilds: Vec<UserGuildDto> = decode(create_test_guild_list(
        10,
        &[
            GuildPermissions::Raw("garbage"),
            GuildPermissions::Bits(Permissions::ADMINISTRATOR.bits()),
        ],
    ));

    let ids: Vec<u64> = config
        .configurable_guilds(&guilds)
        .into_iter()
        .map(|guild| guild.id)
        .collect();

    assert_eq!(ids, vec![11]);
}

/// Tests filtering an empty guild list.
///
/// Expected: empty result
#[test]
fn empty_list_yields_nothing() {
    let config = GuildConfig::new(GuildFilter::allow_all(), test_features());
    assert!(config.configurable_guilds(&[]).is_empty());
}
