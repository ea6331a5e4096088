use super::*;

/// Tests that every identifier maps to the configuration registered for it.
///
/// Expected: get(id).id() == id for every identifier
#[test]
fn registry_covers_every_identifier() {
    let features = test_features();

    for id in FeatureId::ALL {
        assert_eq!(features.get(id).id(), id);
    }
}

/// Tests lookup by the backend's identifier string.
///
/// Expected: Ok with the meme configuration's metadata
#[test]
fn looks_up_by_identifier_string() {
    let features = test_features();

    let view = features.lookup("meme").unwrap();

    assert_eq!(view.id(), FeatureId::Meme);
    assert_eq!(view.name(), "Memes");
    assert_eq!(view.description(), None);
}

/// Tests that an unknown identifier is reported, not a panic.
///
/// Expected: Err(FeatureError::UnknownFeature)
#[test]
fn unknown_identifier_is_an_error() {
    let features = test_features();

    assert!(matches!(
        features.lookup("auto-mod"),
        Err(FeatureError::UnknownFeature(_))
    ));
}

/// Tests iteration over the registry.
///
/// Expected: one view per identifier, in identifier order
#[test]
fn iterates_in_identifier_order() {
    let features = test_features();

    let ids: Vec<FeatureId> = features.iter().map(|view| view.id()).collect();

    assert_eq!(ids, FeatureId::ALL.to_vec());
}
