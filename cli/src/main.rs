// Copyright (c) 2026 Nostress Developers. MIT License.
// See LICENSE for details.

//! # nostress
//!
//! Entry point for the `nostress` binary. Parses CLI arguments, initializes
//! logging, runs one command, and maps failures to exit codes.
//!
//! - `keys generate` — print a fresh keypair
//! - `keys validate` — check a key string
//! - `keys convert`  — re-encode a key as hex or prefixed
//! - `version`       — print build version information
//!
//! Exit codes: 0 success, 1 usage or other failure, 2 malformed key
//! string, 3 private key out of range, 4 public key not on the curve,
//! 5 wrong key type, 6 entropy failure.

mod cli;
mod commands;
mod config;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use nostress_core::{ErrorKind, KeyError};

use cli::{Commands, KeysCommand, NostressCli};
use config::CliConfig;

fn main() -> ExitCode {
    let cli = NostressCli::parse();
    let config = CliConfig::from_cli(&cli);
    logging::init_logging(config.log_filter(), config.log_format);

    match run(cli, &config) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: NostressCli, config: &CliConfig) -> Result<String> {
    match cli.command {
        Commands::Keys { command } => match command {
            KeysCommand::Generate(args) => commands::generate(&args, config),
            KeysCommand::Validate(args) => commands::validate_key(&args, config),
            KeysCommand::Convert(args) => commands::convert(&args, config),
        },
        Commands::Version => Ok(version_text()),
    }
}

/// Map an error to the process exit status.
///
/// Key errors get a code per kind so scripts can tell a typo from an
/// off-curve key; everything else is 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<KeyError>().map(KeyError::kind) {
        Some(ErrorKind::Format) => 2,
        Some(ErrorKind::Range) => 3,
        Some(ErrorKind::Curve) => 4,
        Some(ErrorKind::TypeMismatch) => 5,
        Some(ErrorKind::Entropy) => 6,
        None => 1,
    }
}

fn version_text() -> String {
    format!(
        "nostress      {}\nnostress-core {}",
        env!("CARGO_PKG_VERSION"),
        nostress_core::config::CORE_VERSION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use nostress_core::CodecError;

    #[test]
    fn key_errors_map_to_distinct_codes() {
        let cases = [
            (KeyError::Format(CodecError::Empty), 2),
            (KeyError::Range, 3),
            (KeyError::Curve, 4),
            (
                KeyError::TypeMismatch {
                    expected: nostress_core::KeyKind::Private,
                    found: "public key (npub)".into(),
                },
                5,
            ),
            (KeyError::Entropy("source failed".into()), 6),
        ];
        for (err, code) in cases {
            let wrapped: Result<()> = Err(err).context("invalid key");
            assert_eq!(exit_code(&wrapped.unwrap_err()), code);
        }
    }

    #[test]
    fn other_errors_are_generic() {
        let err = anyhow::anyhow!("hex keys require --type private or --type public");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn version_mentions_both_crates() {
        let text = version_text();
        assert!(text.contains("nostress "));
        assert!(text.contains("nostress-core "));
    }

    #[test]
    fn version_command_runs_without_keys() {
        let cli = NostressCli::try_parse_from(["nostress", "version"]).unwrap();
        let config = CliConfig::from_cli(&cli);
        assert_eq!(run(cli, &config).unwrap(), version_text());
    }
}
