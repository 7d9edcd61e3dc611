//! Configuration and path management for FinFlow

pub mod paths;
pub mod settings;

pub use paths::FinFlowPaths;
pub use settings::Settings;
