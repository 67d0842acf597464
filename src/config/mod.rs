//! `.caesar.toml` configuration.

mod loader;
mod settings;

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_starting_at, parse_config,
    resolve_config, CONFIG_FILE_NAME,
};
pub use settings::{CaesarConfig, CipherConfig, OutputConfig};
