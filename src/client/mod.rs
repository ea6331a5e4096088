pub mod api;
pub mod app;
pub mod component;
pub mod config;
pub mod dashboard;
pub mod features;
pub mod model;
pub mod route;
pub mod router;

pub use app::App;
