use super::*;

/// Tests that the filter answers the same for an unchanged guild.
///
/// Expected: identical results across repeated calls
#[test]
fn filter_is_pure() {
    let filter = GuildFilter::require_any(Permissions::MANAGE_GUILD);
    let guild: UserGuildDto = decode(create_test_guild(
        1,
        "Guild",
        None,
        GuildPermissions::Bits(Permissions::MANAGE_GUILD.bits()),
    ));

    let first = filter.allows(&guild);
    let second = filter.allows(&guild);

    assert!(first);
    assert_eq!(first, second);
}

/// Tests that a predicate error hides the guild.
///
/// Expected: evaluate() is Err, allows() is false
#[test]
fn failing_predicate_fails_closed() {
    let filter = GuildFilter::try_new(|guild| {
        let source = "not a number".parse::<u64>().unwrap_err();
        Err(FilterError::InvalidPermissions {
            guild_id: guild.id,
            value: "not a number".to_string(),
            source,
        })
    });
    let guild: UserGuildDto = decode(create_test_guild(1, "Guild", None, GuildPermissions::Bits(8)));

    assert!(filter.evaluate(&guild).is_err());
    assert!(!filter.allows(&guild));
}

/// Tests the allow-all filter.
///
/// Expected: true for a guild without any permissions
#[test]
fn allow_all_accepts_every_guild() {
    let guild: UserGuildDto = decode(create_test_guild(1, "Guild", None, GuildPermissions::Bits(0)));
    assert!(GuildFilter::allow_all().allows(&guild));
}
