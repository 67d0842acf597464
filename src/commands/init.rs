use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Caesar Configuration

[cipher]
# Shift used by encrypt/decrypt when --shift is omitted
# default_shift = 3

[output]
# terminal, json or markdown
default_format = "terminal"
# auto, always or never
color = "auto"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_at(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default configuration into `dir`, returning the file path
pub fn init_config_at(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    log::info!("Wrote {}", config_path.display());

    Ok(config_path)
}
