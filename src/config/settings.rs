use serde::{Deserialize, Serialize};

use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;

/// Contents of a `.caesar.toml` file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaesarConfig {
    /// Cipher defaults
    #[serde(default)]
    pub cipher: CipherConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CipherConfig {
    /// Shift used by encrypt/decrypt when `--shift` is omitted
    #[serde(default)]
    pub default_shift: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when `--format` is omitted
    #[serde(default = "default_output_format")]
    pub default_format: OutputFormat,

    /// Color policy when neither `--plain` nor the environment decides
    #[serde(default = "default_color_mode")]
    pub color: ColorMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_output_format(),
            color: default_color_mode(),
        }
    }
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Terminal
}

fn default_color_mode() -> ColorMode {
    ColorMode::Auto
}

impl CaesarConfig {
    pub fn default_shift(&self) -> Option<i64> {
        self.cipher.default_shift
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output.default_format
    }
}
