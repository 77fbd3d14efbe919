//! Configuration for the `schema-graph` command line tool.
//!
//! A config file is optional. When present it supplies defaults for the
//! schema path and the expansion depth; command line flags always win.

mod config;
mod error;
mod loader;

pub use config::GraphConfig;
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILES};
