//! # CLI Interface
//!
//! Defines the command-line argument structure for `nostress` using
//! `clap` derive. Key operations live under the `keys` subcommand.

use clap::{Args, Parser, Subcommand, ValueEnum};

use nostress_core::{Encoding, ExpectedKind, KeyKind};

/// Nostr-style identity key toolkit.
///
/// Generates secp256k1 keypairs and validates or converts keys between
/// 64-digit hex and the tagged `nsec1…`/`npub1…` form.
#[derive(Parser, Debug)]
#[command(
    name = "nostress",
    about = "Nostr-style identity key toolkit",
    version,
    propagate_version = true
)]
pub struct NostressCli {
    /// Log progress to stderr.
    ///
    /// Also enabled by `NOSTRESS_VERBOSE=1`. `RUST_LOG` overrides the
    /// resulting filter.
    #[arg(long, short = 'v', global = true, env = "NOSTRESS_VERBOSE")]
    pub verbose: bool,

    /// Log line format: pretty or json.
    #[arg(
        long,
        global = true,
        default_value = "pretty",
        value_parser = ["pretty", "json"]
    )]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Key generation, validation, and conversion.
    Keys {
        #[command(subcommand)]
        command: KeysCommand,
    },
    /// Print version information and exit.
    Version,
}

/// Subcommands under `keys`.
#[derive(Subcommand, Debug)]
pub enum KeysCommand {
    /// Generate a fresh keypair.
    Generate(GenerateArgs),
    /// Check that a key decodes and is a usable key of the expected type.
    Validate(ValidateArgs),
    /// Re-encode a key as hex or prefixed.
    Convert(ConvertArgs),
}

/// Arguments for `keys generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output encoding.
    #[arg(long, short = 'f', value_enum, default_value_t = FormatArg::Hex)]
    pub format: FormatArg,

    /// Print JSON instead of text.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Arguments for `keys validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Key to validate (hex, nsec1…, or npub1…).
    pub key: String,

    /// Expected key type.
    #[arg(long = "type", short = 't', value_enum, default_value_t = ExpectedArg::Auto)]
    pub key_type: ExpectedArg,

    /// Print JSON instead of text.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Arguments for `keys convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Key to convert.
    pub key: String,

    /// Target encoding.
    #[arg(long, value_enum)]
    pub to: EncodingArg,

    /// Key type. Required for hex input, which does not say what it is.
    #[arg(long = "type", short = 't', value_enum)]
    pub key_type: Option<KindArg>,

    /// Print JSON instead of text.
    #[arg(long, short = 'j')]
    pub json: bool,
}

// ---------------------------------------------------------------------------
// Value Enums
// ---------------------------------------------------------------------------

/// `--format` values for `keys generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Hex,
    Prefixed,
    Both,
}

/// `--to` values for `keys convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodingArg {
    Hex,
    Prefixed,
}

/// `--type` values for `keys convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Private,
    Public,
}

/// `--type` values for `keys validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpectedArg {
    Private,
    Public,
    Auto,
    /// A private key in prefixed form only.
    Nsec,
    /// A public key in prefixed form only.
    Npub,
}

impl ExpectedArg {
    /// Whether hex input is ruled out.
    pub fn requires_prefixed(self) -> bool {
        matches!(self, ExpectedArg::Nsec | ExpectedArg::Npub)
    }
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Hex => Encoding::Hex,
            EncodingArg::Prefixed => Encoding::Prefixed,
        }
    }
}

impl From<KindArg> for KeyKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Private => KeyKind::Private,
            KindArg::Public => KeyKind::Public,
        }
    }
}

impl From<ExpectedArg> for ExpectedKind {
    fn from(arg: ExpectedArg) -> Self {
        match arg {
            ExpectedArg::Private | ExpectedArg::Nsec => ExpectedKind::Private,
            ExpectedArg::Public | ExpectedArg::Npub => ExpectedKind::Public,
            ExpectedArg::Auto => ExpectedKind::Auto,
        }
    }
}
