//! Feature editors mounted in a virtual DOM, so their hooks and the closures
//! they hand to the save bar run the way they do in the browser.

use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_core::{NoOpMutations, VirtualDom};

use crate::{
    client::{
        dashboard::{
            fixture::decode, Draft, FeatureBody, FeatureEndpoint, FeatureRender, LoadedSettings,
            SaveActions, SaveBarControls, SaveStatus,
        },
        features::{self, meme, welcome_message},
    },
    model::feature::{FeatureId, MemeFeature, MemeSource, WelcomeMessageFeature},
};
use test_utils::feature::{create_test_meme, create_test_music, create_test_welcome_message};


/// Value written by a component during render and read by the test afterwards.
#[derive(Clone)]
struct Slot<T>(Rc<RefCell<Option<T>>>);

impl<T: Clone> Slot<T> {
    fn new() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    fn set(&self, value: T) {
        self.0.borrow_mut().replace(value);
    }

    fn get(&self) -> T {
        self.0.borrow().clone().expect("component should have rendered")
    }
}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone)]
struct RootProps {
    render: Rc<dyn Fn() -> FeatureRender>,
    actions: Slot<SaveActions>,
}

fn root(props: RootProps) -> Element {
    let (actions, component) = (props.render)().into_parts();
    props.actions.set(actions);
    component
}

/// A render hook mounted as the root component, with the save actions it returned.
struct Mounted {
    dom: VirtualDom,
    actions: Slot<SaveActions>,
}

impl Mounted {
    fn new(render: impl Fn() -> FeatureRender + 'static) -> Self {
        let actions = Slot::new();
        let mut dom = VirtualDom::new_with_props(
            root,
            RootProps {
                render: Rc::new(render),
                actions: actions.clone(),
            },
        );
        dom.rebuild_in_place();

        Self { dom, actions }
    }

    /// Mounts a feature through the registry with stored settings.
    fn registered(id: FeatureId, data: serde_json::Value) -> Self {
        Self::new(move || {
            features::features()
                .get(id)
                .render(data.clone())
                .expect("stored settings should decode")
        })
    }

    fn actions(&self) -> SaveActions {
        self.actions.get()
    }

    /// Runs `f` inside the runtime and applies the renders it caused.
    fn update<O>(&mut self, f: impl FnOnce() -> O) -> O {
        let output = self.dom.in_runtime(f);
        self.dom.render_immediate(&mut NoOpMutations);
        output
    }
}
