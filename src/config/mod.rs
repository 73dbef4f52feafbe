//! Configuration loading and management for the detection engine.
//!
//! This module provides functionality to load detection settings from a
//! YAML file.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/detection.yaml").unwrap();
//! println!("Threshold: {}", config.config().consecutive_days_threshold);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::DetectionConfig;
