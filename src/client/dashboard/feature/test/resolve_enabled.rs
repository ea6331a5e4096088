use super::*;

fn resolved_ids(enabled: &[&str]) -> Vec<FeatureId> {
    let features = test_features();
    let info: GuildInfo = decode(create_test_guild_info(enabled));

    features
        .resolve_enabled(&info)
        .into_iter()
        .map(|view| view.id())
        .collect()
}

/// Tests that unknown identifiers are skipped silently.
///
/// Expected: [WelcomeMessage]
#[test]
fn skips_unknown_identifiers() {
    assert_eq!(
        resolved_ids(&["welcome-message", "unknown"]),
        vec![FeatureId::WelcomeMessage]
    );
}

/// Tests that the backend's order is kept.
///
/// Expected: [Music, WelcomeMessage]
#[test]
fn keeps_backend_order() {
    assert_eq!(
        resolved_ids(&["music", "welcome-message"]),
        vec![FeatureId::Music, FeatureId::WelcomeMessage]
    );
}

/// Tests that a feature listed twice resolves once.
///
/// Expected: [Meme]
#[test]
fn deduplicates_identifiers() {
    assert_eq!(resolved_ids(&["meme", "meme"]), vec![FeatureId::Meme]);
}

/// Tests a guild with nothing enabled.
///
/// Expected: empty list
#[test]
fn nothing_enabled_resolves_nothing() {
    assert!(resolved_ids(&[]).is_empty());
}

/// Tests that a guild state without the field decodes as nothing enabled.
///
/// Expected: empty list
#[test]
fn missing_field_resolves_nothing() {
    let features = test_features();
    let info: GuildInfo = decode(serde_json::json!({}));

    assert!(features.resolve_enabled(&info).is_empty());
}
