//! UI panels around the field view

mod settings;
mod status;

pub use settings::SettingsWindow;
pub use status::{StatusAction, StatusBar};
