// Settings service module
// TOML-backed configuration file

mod service;

pub use service::{default_config_path, SettingsService};
