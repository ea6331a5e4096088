use super::*;

/// Tests that administrators pass regardless of the required permissions.
///
/// Expected: Ok(true)
#[test]
fn administrator_is_allowed() {
    let filter = GuildFilter::require_any(Permissions::MANAGE_GUILD);
    let guild: UserGuildDto = decode(create_test_guild(
        1,
        "Guild",
        None,
        GuildPermissions::Bits(Permissions::ADMINISTRATOR.bits()),
    ));

    assert!(filter.evaluate(&guild).unwrap());
}

/// Tests that members without the required permissions are rejected.
///
/// Expected: Ok(false)
#[test]
fn member_without_permission_is_rejected() {
    let filter = GuildFilter::require_any(Permissions::MANAGE_GUILD);
    let guild: UserGuildDto = decode(create_test_guild(
        1,
        "Guild",
        None,
        GuildPermissions::Bits(Permissions::KICK_MEMBERS.bits()),
    ));

    assert!(!filter.evaluate(&guild).unwrap());
}

/// Tests that guild owners pass even with an empty bit-field.
///
/// Expected: Ok(true)
#[test]
fn owner_is_allowed() {
    let filter = GuildFilter::require_any(Permissions::MANAGE_GUILD);
    let guild: UserGuildDto =
        decode(create_test_owned_guild(1, "Owned", GuildPermissions::Bits(0)));

    assert!(filter.evaluate(&guild).unwrap());
}

/// Tests that a malformed permission field is reported, not guessed.
///
/// Expected: Err(FilterError::InvalidPermissions) naming the guild
#[test]
fn malformed_permissions_are_an_error() {
    let filter = GuildFilter::require_any(Permissions::MANAGE_GUILD);
    let guild: UserGuildDto = decode(create_test_guild(
        77,
        "Broken",
        None,
        GuildPermissions::Raw("lots"),
    ));

    match filter.evaluate(&guild) {
        Err(FilterError::InvalidPermissions { guild_id, value, .. }) => {
            assert_eq!(guild_id, 77);
            assert_eq!(value, "lots");
        }
        other => panic!("expected InvalidPermissions, got {:?}", other),
    }
}
