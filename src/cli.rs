use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  caesar encrypt \"Hello World\" --shift 3
  caesar decrypt \"Khoor Zruog\" --shift 3
  caesar brute-force \"Khoor Zruog\"
  caesar frequency \"Khoor Zruog\"
  caesar interactive

Running caesar without a command starts interactive mode.";

#[derive(Parser, Debug)]
#[command(name = "caesar")]
#[command(about = "Caesar cipher toolkit: encrypt, decrypt, brute force and frequency analysis", long_about = None)]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (defaults to the config file setting, then terminal)
    #[arg(short = 'F', long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to searching for .caesar.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: info
    /// -vv: debug
    /// -vvv: trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Encrypt text
    Encrypt {
        /// Text to encrypt
        text: String,

        /// Shift value; any integer, reduced modulo 26
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<String>,
    },

    /// Decrypt text
    Decrypt {
        /// Text to decrypt
        text: String,

        /// Shift value used for encryption
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<String>,
    },

    /// Try every shift against a ciphertext
    BruteForce {
        /// Text to attack
        text: String,
    },

    /// Letter frequency analysis
    Frequency {
        /// Text to analyze
        text: String,
    },

    /// Run the menu-driven interactive mode
    Interactive,

    /// Show a short demonstration
    Demo,

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("caesar").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_means_interactive() {
        assert_eq!(parse(&[]).command, None);
    }

    #[test]
    fn test_encrypt_with_negative_shift() {
        let cli = parse(&["encrypt", "abc", "--shift", "-3"]);
        assert_eq!(
            cli.command,
            Some(Commands::Encrypt {
                text: "abc".into(),
                shift: Some("-3".into())
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["brute-force", "Khoor", "--format", "json", "--plain", "-vv"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.plain);
        assert_eq!(cli.verbosity, 2);
    }

    #[test]
    fn test_shift_is_kept_as_text_for_validation() {
        let cli = parse(&["decrypt", "abc", "-s", "abc"]);
        assert_eq!(
            cli.command,
            Some(Commands::Decrypt {
                text: "abc".into(),
                shift: Some("abc".into())
            })
        );
    }
}
