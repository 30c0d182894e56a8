//! Crime Web Core Library
//!
//! Shared pieces for the crime records web client:
//! - Configuration loading (XDG-compliant)
//! - Default endpoints and limits

mod config;

pub use config::{find_config_file, load_config, ConfigSource};

/// Application name used for XDG paths
pub const APP_NAME: &str = "crime-web";

/// Default port the web client listens on
pub const DEFAULT_WEB_PORT: u16 = 5173;

/// Backend origin used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Number of detail records requested by the crimes page
pub const DEFAULT_DETAILS_LIMIT: u32 = 1000;
