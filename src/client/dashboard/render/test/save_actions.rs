use super::*;

fn text_render() -> FeatureRender {
    FeatureRender::new(|| Ok(FeatureBody::Text("body".to_string())), VNode::empty())
}

/// Tests that saving is offered when the render does not say.
///
/// Expected: save_enabled() true
#[test]
fn can_save_defaults_to_true() {
    let render = text_render();

    assert_eq!(render.can_save, None);
    assert!(render.actions().save_enabled());
}

/// Tests that an explicit `can_save(false)` turns saving off.
///
/// Expected: save_enabled() false
#[test]
fn explicit_can_save_false_disables_saving() {
    let render = text_render().with_can_save(false);
    assert!(!render.actions().save_enabled());
}

/// Tests that a render without a reset hook reports reset as unsupported.
///
/// Expected: can_reset() false, reset() returns false
#[test]
fn reset_is_unsupported_by_default() {
    let actions = text_render().actions();

    assert!(!actions.can_reset());
    assert!(!actions.reset());
}

/// Tests that the reset hook runs when supported.
///
/// Expected: hook called once, reset() returns true
#[test]
fn runs_reset_hook() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let actions = text_render()
        .with_reset(move || counter.set(counter.get() + 1))
        .actions();

    assert!(actions.can_reset());
    assert!(actions.reset());
    assert_eq!(calls.get(), 1);
}

/// Tests that serialize can be called repeatedly without arguments.
///
/// Expected: the same body each time
#[test]
fn serialize_is_repeatable() {
    let actions = text_render().actions();

    assert_eq!(actions.serialize().unwrap(), actions.serialize().unwrap());
}

/// Tests that serialize errors are passed through.
///
/// Expected: Err(SerializeError::Invalid) with the hook's message
#[test]
fn passes_serialize_errors_through() {
    let render = FeatureRender::new(
        || Err(SerializeError::Invalid("Message is required".to_string())),
        VNode::empty(),
    );

    match render.actions().serialize() {
        Err(SerializeError::Invalid(message)) => assert_eq!(message, "Message is required"),
        other => panic!("expected Invalid, got {:?}", other),
    }
}

/// Tests that splitting a render keeps its actions.
///
/// Expected: actions from into_parts() match the render's settings
#[test]
fn into_parts_keeps_actions() {
    let (actions, _component) = text_render().with_can_save(false).into_parts();

    assert!(!actions.save_enabled());
    assert!(!actions.can_reset());
}
