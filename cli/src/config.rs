//! Resolved runtime settings for one CLI invocation.

use crate::cli::{Commands, KeysCommand, NostressCli};
use crate::logging::LogFormat;

/// Filter used when `RUST_LOG` is unset.
const QUIET_FILTER: &str = "nostress=warn";
/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "nostress=debug";

/// Settings resolved once at startup and passed to every command handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliConfig {
    pub verbose: bool,
    pub json: bool,
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn from_cli(cli: &NostressCli) -> Self {
        let json = match &cli.command {
            Commands::Keys { command } => match command {
                KeysCommand::Generate(args) => args.json,
                KeysCommand::Validate(args) => args.json,
                KeysCommand::Convert(args) => args.json,
            },
            Commands::Version => false,
        };

        Self {
            verbose: cli.verbose,
            json,
            log_format: LogFormat::from_str_lossy(&cli.log_format),
        }
    }

    /// Default `EnvFilter` directive for this invocation.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_FILTER
        } else {
            QUIET_FILTER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn resolves_flags_from_arguments() {
        let cli = NostressCli::try_parse_from([
            "nostress",
            "--log-format",
            "json",
            "-v",
            "keys",
            "convert",
            "nsec1abc",
            "--to",
            "hex",
            "--json",
        ])
        .unwrap();
        let config = CliConfig::from_cli(&cli);
        assert!(config.verbose);
        assert!(config.json);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter(), "nostress=debug");
    }

    #[test]
    fn quiet_by_default() {
        let config = CliConfig::default();
        assert_eq!(config.log_filter(), "nostress=warn");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
