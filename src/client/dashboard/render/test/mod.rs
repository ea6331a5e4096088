use std::{cell::Cell, rc::Rc};

use dioxus::prelude::*;

use crate::client::dashboard::{FeatureBody, FeatureRender, FormBody, SerializeError};

mod save_actions;
