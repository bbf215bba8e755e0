//! Configuration module for ProserPlan
//!
//! - data directory resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::ProserPaths;
pub use settings::Settings;
