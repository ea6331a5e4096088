use super::*;

/// Tests the update path for a feature of a guild.
///
/// Expected: "/guilds/123/features/welcome-message"
#[test]
fn builds_update_path() {
    let endpoint = FeatureEndpoint::new(123, FeatureId::WelcomeMessage);
    assert_eq!(endpoint.path(), "/guilds/123/features/welcome-message");
}

/// Tests that a successful serialize produces an update.
///
/// Expected: Ok with the endpoint and serialized body
#[test]
fn prepares_update_from_serialized_body() {
    let render = FeatureRender::new(|| Ok(FeatureBody::Text("{}".to_string())), VNode::empty());
    let endpoint = FeatureEndpoint::new(1, FeatureId::Meme);

    let update = FeatureUpdate::prepare(endpoint, &render.actions()).unwrap();

    assert_eq!(update.endpoint, endpoint);
    assert_eq!(update.body, FeatureBody::Text("{}".to_string()));
}

/// Tests that a failing serialize aborts the save.
///
/// Expected: Err(FeatureError::Serialize) for the feature, no update produced
#[test]
fn serialize_failure_aborts_save() {
    let render = FeatureRender::new(
        || Err(SerializeError::Invalid("Message is required".to_string())),
        VNode::empty(),
    );
    let endpoint = FeatureEndpoint::new(1, FeatureId::WelcomeMessage);

    match FeatureUpdate::prepare(endpoint, &render.actions()) {
        Err(FeatureError::Serialize { feature, source }) => {
            assert_eq!(feature, FeatureId::WelcomeMessage);
            assert_eq!(source.to_string(), "Message is required");
        }
        Err(other) => panic!("expected Serialize, got {}", other),
        Ok(update) => panic!("expected Serialize, got {:?}", update),
    }
}

/// Tests that a render with saving turned off cannot be saved.
///
/// Expected: Err(FeatureError::SaveDisabled)
#[test]
fn disabled_save_is_refused() {
    let render = FeatureRender::new(|| Ok(FeatureBody::Text(String::new())), VNode::empty())
        .with_can_save(false);
    let endpoint = FeatureEndpoint::new(1, FeatureId::Music);

    assert!(matches!(
        FeatureUpdate::prepare(endpoint, &render.actions()),
        Err(FeatureError::SaveDisabled(FeatureId::Music))
    ));
}
