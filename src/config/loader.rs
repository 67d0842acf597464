use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::settings::CaesarConfig;
use crate::core::errors::{Error, Result, ResultExt};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".caesar.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<CaesarConfig> {
    toml::from_str::<CaesarConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load an explicitly requested config file; every failure is an error
pub fn load_config_from(path: &Path) -> Result<CaesarConfig> {
    let contents = read_config_file(path)
        .map_err(Error::from)
        .context(format!("Failed to read {}", path.display()))?;
    let config = parse_config(&contents).context(format!("Loading {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a specific path, warning on anything but absence
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CaesarConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
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

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_starting_at(start: &Path) -> CaesarConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CaesarConfig::default()
        })
}

/// Search the current directory and its ancestors for a config file
pub fn load_config() -> CaesarConfig {
    match std::env::current_dir() {
        Ok(current) => load_config_starting_at(&current),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CaesarConfig::default()
        }
    }
}

/// Use the explicit config file if one was given, otherwise search for one
pub fn resolve_config(explicit: Option<&Path>) -> Result<CaesarConfig> {
    match explicit {
        Some(path) => load_config_from(path),
        None => Ok(load_config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::ColorMode;
    use crate::io::output::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            "[cipher]\ndefault_shift = 13\n\n[output]\ndefault_format = \"json\"\ncolor = \"never\"\n",
        )
        .unwrap();
        assert_eq!(config.default_shift(), Some(13));
        assert_eq!(config.default_format(), OutputFormat::Json);
        assert_eq!(config.output.color, ColorMode::Never);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, CaesarConfig::default());
        assert_eq!(config.default_format(), OutputFormat::Terminal);
        assert_eq!(config.default_shift(), None);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = parse_config("[cipher]\nshift = 3\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse .caesar.toml"));
    }

    #[test]
    fn test_parse_rejects_non_integer_shift() {
        assert!(parse_config("[cipher]\ndefault_shift = \"three\"\n").is_err());
    }

    #[test]
    fn test_directory_ancestors_depth_limit() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_load_config_from_ancestor() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[cipher]\ndefault_shift = 5\n",
        )
        .unwrap();
        let nested = temp.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_starting_at(&nested);
        assert_eq!(config.default_shift(), Some(5));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = load_config_starting_at(temp.path());
        assert_eq!(config, CaesarConfig::default());
    }

    #[test]
    fn test_explicit_invalid_config_names_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[cipher]\ndefault_shift = 1.5\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Loading "));
        assert!(err.to_string().contains("custom.toml"));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = resolve_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read "));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_explicit_config_directory_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let err = read_config_file(temp.path()).map_err(Error::from).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        let err = load_config_from(temp.path()).unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
        assert!(err.to_string().starts_with("Failed to read "));
    }
}
