//! Feature registry.
//!
//! [`Features`] holds one [`FeatureConfig`] per identifier of [`FeatureId`], so a
//! registry missing a feature does not compile. Lookups by identifier go through an
//! exhaustive match and hand out type-erased [`FeatureView`]s that decode the
//! backend's stored settings into the feature's own data type before rendering.

use std::{collections::HashSet, marker::PhantomData};

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::dashboard::{
        capability::Capability, error::FeatureError, render::FeatureRender,
    },
    model::{
        feature::{CustomFeature, FeatureId, Meme, Music, WelcomeMessage},
        guild::GuildInfo,
    },
};

/// Renders a piece of UI with no inputs, such as an icon or a loading skeleton.
pub type ElementFn = fn() -> Element;

/// Static description of one feature's settings UI.
pub struct FeatureConfig<F: CustomFeature> {
    pub name: String,
    pub description: Option<String>,
    pub icon: Capability<ElementFn>,
    /// Renders the feature's editor; called on every render of the editor view.
    pub use_render: fn(F::Data) -> FeatureRender,
    /// Rendered while the feature's settings are loading.
    pub use_skeleton: Capability<ElementFn>,
    feature: PhantomData<fn() -> F>,
}

impl<F: CustomFeature> FeatureConfig<F> {
    pub fn new(name: impl Into<String>, use_render: fn(F::Data) -> FeatureRender) -> Self {
        Self {
            name: name.into(),
            description: None,
            icon: Capability::Unsupported,
            use_render,
            use_skeleton: Capability::Unsupported,
            feature: PhantomData,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: ElementFn) -> Self {
        self.icon = Capability::Supported(icon);
        self
    }

    pub fn with_skeleton(mut self, use_skeleton: ElementFn) -> Self {
        self.use_skeleton = Capability::Supported(use_skeleton);
        self
    }
}

/// Type-erased access to a [`FeatureConfig`].
pub trait FeatureView {
    fn id(&self) -> FeatureId;
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn icon(&self) -> Capability<ElementFn>;
    fn skeleton(&self) -> Capability<ElementFn>;

    /// Decodes stored settings and calls the feature's render hook.
    ///
    /// Undecodable settings are reported without calling the hook.
    fn render(&self, data: serde_json::Value) -> Result<FeatureRender, FeatureError>;
}

impl<F: CustomFeature> FeatureView for FeatureConfig<F> {
    fn id(&self) -> FeatureId {
        F::ID
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn icon(&self) -> Capability<ElementFn> {
        self.icon
    }

    fn skeleton(&self) -> Capability<ElementFn> {
        self.use_skeleton
    }

    fn render(&self, data: serde_json::Value) -> Result<FeatureRender, FeatureError> {
        let data = serde_json::from_value::<F::Data>(data).map_err(|source| {
            FeatureError::InvalidData {
                feature: F::ID,
                source,
            }
        })?;

        Ok((self.use_render)(data))
    }
}

/// A registered feature together with its enablement in a guild.
pub struct FeatureStatus<'a> {
    pub view: &'a dyn FeatureView,
    pub enabled: bool,
}

/// The feature registry: one configuration per feature identifier.
pub struct Features {
    pub welcome_message: FeatureConfig<WelcomeMessage>,
    pub meme: FeatureConfig<Meme>,
    pub music: FeatureConfig<Music>,
}

impl Features {
    pub fn get(&self, id: FeatureId) -> &dyn FeatureView {
        match id {
            FeatureId::WelcomeMessage => &self.welcome_message,
            FeatureId::Meme => &self.meme,
            FeatureId::Music => &self.music,
        }
    }

    /// Looks up a feature by the identifier string used by the backend.
    pub fn lookup(&self, identifier: &str) -> Result<&dyn FeatureView, FeatureError> {
        let id = identifier.parse::<FeatureId>()?;
        Ok(self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn FeatureView> + '_ {
        FeatureId::ALL.into_iter().map(move |id| self.get(id))
    }

    /// Features the guild has enabled, in the backend's order.
    ///
    /// Identifiers this dashboard does not know are skipped, as are duplicates.
    pub fn resolve_enabled(&self, info: &GuildInfo) -> Vec<&dyn FeatureView> {
        let mut seen = HashSet::new();

        info.enabled_features
            .iter()
            .filter_map(|identifier| match self.lookup(identifier) {
                Ok(view) => Some(view),
                Err(err) => {
                    tracing::debug!("Skipping enabled feature: {}", err);
                    None
                }
            })
            .filter(|view| seen.insert(view.id()))
            .collect()
    }

    /// Every registered feature with whether the guild has it enabled.
    ///
    /// Enabled features come first in the backend's order, followed by the
    /// remaining ones in registry order.
    pub fn statuses(&self, info: &GuildInfo) -> Vec<FeatureStatus<'_>> {
        let enabled = self.resolve_enabled(info);
        let disabled = self
            .iter()
            .filter(|view| !enabled.iter().any(|e| e.id() == view.id()))
            .map(|view| FeatureStatus {
                view,
                enabled: false,
            });

        enabled
            .iter()
            .map(|&view| FeatureStatus {
                view,
                enabled: true,
            })
            .chain(disabled)
            .collect()
    }
}

#[cfg(test)]
mod test;
