use dioxus::prelude::*;

use crate::client::dashboard::{
    FeatureBody, FeatureEndpoint, FeatureError, FeatureRender, FeatureUpdate, LoadedSettings,
    SaveBarControls, SaveStatus, SerializeError,
};
use crate::model::feature::FeatureId;

mod prepare;
