// src/infra/paths.rs — Path management
//
// All paths respect the PAPERTALK_HOME environment variable for isolation.
// When PAPERTALK_HOME is set, config lives under that directory.
// When unset, config uses ~/.papertalk/.

use std::path::PathBuf;

/// Returns the PAPERTALK_HOME override, if set.
fn papertalk_home() -> Option<PathBuf> {
    std::env::var_os("PAPERTALK_HOME").map(PathBuf::from)
}

/// Configuration directory: $PAPERTALK_HOME/ or ~/.papertalk/
pub fn config_dir() -> PathBuf {
    if let Some(home) = papertalk_home() {
        return home;
    }
    dirs_home().join(".papertalk")
}

/// Home directory
pub fn dirs_home() -> PathBuf {
    directories::BaseDirs::new()
        .expect("Could not determine home directory")
        .home_dir()
        .to_path_buf()
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
