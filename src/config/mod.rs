//! Configuration module for outlay
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::OutlayPaths;
pub use settings::Settings;
