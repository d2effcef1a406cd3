use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use super::core::LeadmapConfig;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "leadmap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<LeadmapConfig, String> {
    let mut config = toml::from_str::<LeadmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    // Degrade invalid geographic weights to defaults rather than aborting
    if let Some(ref geographic) = config.geographic {
        if let Err(e) = geographic.validate() {
            eprintln!("Warning: invalid geographic config: {}. Using defaults.", e);
            config.geographic = None;
        }
    }

    Ok(config)
}

/// Try loading config from a specific path; `None` means fall back to defaults.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<LeadmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Load configuration for a run.
///
/// An explicit `--config` path wins; otherwise `leadmap.toml` in the
/// working directory is consulted. Missing or unparseable files resolve
/// to defaults.
pub fn load_config(explicit: Option<&Path>) -> LeadmapConfig {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| Path::new(CONFIG_FILE_NAME).to_path_buf());
    try_load_config_from_path(&path).unwrap_or_default()
}
