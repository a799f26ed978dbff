//! Loading `SimConfig` from a TOML file.
//!
//! Every key is optional; missing keys take the library defaults.
//!
//! ```toml
//! elevator_count   = 4
//! dwell_secs       = 20
//! inter_floor_secs = 2
//! capacity         = 8
//! min_floor        = 1
//! max_floor        = 25
//! # initial_floor  = 1
//! tick_secs        = 1
//! seed             = 42
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use lift_core::SimConfig;
use tracing::warn;

/// Parse a TOML document into a `SimConfig`.
pub fn parse_config(text: &str) -> Result<SimConfig> {
    toml::from_str(text).context("invalid simulation config")
}

/// Read `path` as TOML.
pub fn read_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}

/// The config at `path`, or the defaults if there is no path or the file
/// cannot be read or parsed.
pub fn load_config_or_default(path: Option<&Path>) -> SimConfig {
    let Some(path) = path else {
        return SimConfig::default();
    };
    read_config(path).unwrap_or_else(|e| {
        warn!(error = %format!("{e:#}"), "using default simulation config");
        SimConfig::default()
    })
}
