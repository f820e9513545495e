// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! Paths are resolved in priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions
//!    (tests and the `--config-dir` CLI flag)
//! 2. **Environment variable** (`SR_PORTAL_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "SrPortal";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SR_PORTAL_CONFIG_DIR";

/// Returns the application config directory, honoring an explicit override.
pub fn get_app_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
