use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::types::MonitorError;

const CONFIG_FILE: &str = "config.json";

/// Get the path to the config.json file
/// Looks next to the executable first, then in the working directory
pub(super) fn get_config_path() -> Result<PathBuf, MonitorError> {
    let exe_path = std::env::current_exe().ok();
    if let Some(exe_path) = &exe_path {
        debug!(path = %exe_path.display(), "Executable path detected");
    }

    let cwd = std::env::current_dir().map_err(|err| {
        MonitorError::Config(format!("Failed to determine working directory: {err}"))
    })?;

    Ok(resolve_config_path(
        exe_path.as_deref().and_then(Path::parent),
        &cwd,
    ))
}

fn resolve_config_path(exe_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(exe_dir) = exe_dir {
        let config_path = exe_dir.join(CONFIG_FILE);
        debug!(path = %config_path.display(), "Looking for config");
        if config_path.exists() {
            return config_path;
        }
    }

    warn!("Using fallback: looking for config.json in current directory");
    cwd.join(CONFIG_FILE)
}
