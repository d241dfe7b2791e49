// src/config/mod.rs

pub mod app_config;
pub mod layout;

pub use app_config::{AppConfig, ConfigError, LayoutConfig, PanelSource};
