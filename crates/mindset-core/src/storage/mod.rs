//! On-disk settings. Only configuration is persisted; reflections stay in
//! memory.

mod config;

pub use config::{Config, DisplayConfig, LogConfig, RandomConfig, ServerConfig};
