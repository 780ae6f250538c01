//! Handlers for the `keys` subcommands.
//!
//! Each handler takes parsed arguments plus the resolved [`CliConfig`] and
//! returns the stdout payload. Logging goes through `tracing` and only ever
//! mentions kinds, encodings, and public-key prefixes.

use anyhow::{bail, Context, Result};

use nostress_core::codec::{detect, Detected};
use nostress_core::{
    validate, Encoding, ExpectedKind, KeyError, KeyKind, KeyPair, ValidatedKey,
};

use crate::cli::{ConvertArgs, GenerateArgs, ValidateArgs};
use crate::config::CliConfig;
use crate::output::{self, Conversion};

/// Hex digits of a public key shown in log lines.
const LOG_PREFIX_LEN: usize = 16;

fn short(public_hex: &str) -> &str {
    public_hex.get(..LOG_PREFIX_LEN).unwrap_or(public_hex)
}

/// `keys generate`
pub fn generate(args: &GenerateArgs, config: &CliConfig) -> Result<String> {
    tracing::debug!(format = ?args.format, json = config.json, "generating keypair");

    let keypair = KeyPair::generate().context("failed to generate keypair")?;
    tracing::info!(
        public_key = short(&keypair.public_key().to_hex()),
        "keypair generated"
    );

    output::render_generated(&keypair, args.format, config.json)
        .context("failed to render keypair")
}

/// `keys validate`
pub fn validate_key(args: &ValidateArgs, config: &CliConfig) -> Result<String> {
    let key = args.key.trim();
    let expected = ExpectedKind::from(args.key_type);
    tracing::debug!(%expected, length = key.len(), "validating key");

    if let Some(Detected { kind, encoding }) = detect(key) {
        tracing::debug!(?kind, %encoding, "detected key shape");
        if encoding == Encoding::Hex && args.key_type.requires_prefixed() {
            if let Some(want) = expected.kind() {
                return Err(KeyError::TypeMismatch {
                    expected: want,
                    found: "hex key".into(),
                })
                .context("invalid key");
            }
        }
    }

    let validated = validate(key, expected).context("invalid key")?;
    match &validated {
        ValidatedKey::Private { keypair, encoding } => tracing::info!(
            %encoding,
            public_key = short(&keypair.public_key().to_hex()),
            "valid private key"
        ),
        ValidatedKey::Public {
            public_key,
            encoding,
        } => tracing::info!(
            %encoding,
            public_key = short(&public_key.to_hex()),
            "valid public key"
        ),
        ValidatedKey::Ambiguous { .. } => {
            tracing::warn!("hex key is valid as both a private and a public key")
        }
    }

    output::render_validated(&validated, config.json).context("failed to render result")
}

/// `keys convert`
///
/// Prefixed input names its own kind. Hex input does not, so `--type` is
/// required for it; when given alongside prefixed input it must agree with
/// the tag.
pub fn convert(args: &ConvertArgs, config: &CliConfig) -> Result<String> {
    let key = args.key.trim();
    let target = Encoding::from(args.to);
    let requested = args.key_type.map(KeyKind::from);

    let expected = match (detect(key), requested) {
        (_, Some(kind)) => ExpectedKind::from(kind),
        (
            Some(Detected {
                kind: Some(found), ..
            }),
            None,
        ) => ExpectedKind::from(found),
        (Some(Detected { kind: None, .. }), None) => {
            bail!("hex keys require --type private or --type public")
        }
        // Matches no grammar; validation reports the format problem.
        (None, None) => ExpectedKind::Auto,
    };
    tracing::debug!(%expected, %target, "converting key");

    let conversion = match validate(key, expected).context("invalid key")? {
        ValidatedKey::Private { keypair, encoding } => Conversion {
            original_key: key.to_string(),
            original_encoding: encoding,
            kind: KeyKind::Private,
            converted_key: keypair.private_key().to_encoding(target),
            target,
        },
        ValidatedKey::Public {
            public_key,
            encoding,
        } => Conversion {
            original_key: key.to_string(),
            original_encoding: encoding,
            kind: KeyKind::Public,
            converted_key: public_key.to_encoding(target),
            target,
        },
        ValidatedKey::Ambiguous { .. } => {
            bail!("hex keys require --type private or --type public")
        }
    };

    if conversion.is_noop() {
        tracing::warn!(%target, "key is already in the target format");
    } else {
        tracing::info!(
            from = %conversion.original_encoding,
            to = %target,
            kind = %conversion.kind,
            "key converted"
        );
    }

    output::render_converted(&conversion, config.json).context("failed to render result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{EncodingArg, ExpectedArg, FormatArg, KindArg};
    use nostress_core::ErrorKind;

    const ONE_HEX: &str = "0000000000000000000000000000000000000000000000000000000000000001";
    const G_X: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    fn key_error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
        err.downcast_ref::<KeyError>().map(KeyError::kind)
    }

    fn convert_args(key: &str, to: EncodingArg, key_type: Option<KindArg>) -> ConvertArgs {
        ConvertArgs {
            key: key.to_string(),
            to,
            key_type,
            json: false,
        }
    }

    #[test]
    fn generate_prints_both_halves() {
        let args = GenerateArgs {
            format: FormatArg::Prefixed,
            json: false,
        };
        let out = generate(&args, &CliConfig::default()).unwrap();
        assert!(out.contains("Private Key: nsec1"));
        assert!(out.contains("Public Key:  npub1"));
    }

    #[test]
    fn validate_trims_input() {
        let args = ValidateArgs {
            key: format!("  {G_X}\n"),
            key_type: ExpectedArg::Public,
            json: false,
        };
        assert_eq!(
            validate_key(&args, &CliConfig::default()).unwrap(),
            "Valid hex public key"
        );
    }

    #[test]
    fn tag_type_rejects_hex_input() {
        let args = ValidateArgs {
            key: G_X.to_string(),
            key_type: ExpectedArg::Npub,
            json: false,
        };
        let err = validate_key(&args, &CliConfig::default()).unwrap_err();
        assert_eq!(key_error_kind(&err), Some(ErrorKind::TypeMismatch));

        let npub = KeyPair::generate().unwrap().public_key().to_prefixed();
        let args = ValidateArgs {
            key: npub,
            key_type: ExpectedArg::Npub,
            json: false,
        };
        assert_eq!(
            validate_key(&args, &CliConfig::default()).unwrap(),
            "Valid prefixed public key"
        );

        let args = ValidateArgs {
            key: KeyPair::generate().unwrap().private_key().to_prefixed(),
            key_type: ExpectedArg::Npub,
            json: false,
        };
        let err = validate_key(&args, &CliConfig::default()).unwrap_err();
        assert_eq!(key_error_kind(&err), Some(ErrorKind::TypeMismatch));
    }

    #[test]
    fn validate_reports_core_error_kind() {
        let args = ValidateArgs {
            key: "0".repeat(64),
            key_type: ExpectedArg::Private,
            json: false,
        };
        let err = validate_key(&args, &CliConfig::default()).unwrap_err();
        assert_eq!(key_error_kind(&err), Some(ErrorKind::Range));
    }

    #[test]
    fn convert_hex_private_to_prefixed_and_back() {
        let config = CliConfig::default();
        let args = convert_args(ONE_HEX, EncodingArg::Prefixed, Some(KindArg::Private));
        let out = convert(&args, &config).unwrap();
        let nsec = out.rsplit("Result: ").next().unwrap().to_string();
        assert!(nsec.starts_with("nsec1"));

        let back = convert(&convert_args(&nsec, EncodingArg::Hex, None), &config).unwrap();
        assert!(back.ends_with(&format!("Result: {ONE_HEX}")));
    }

    #[test]
    fn convert_hex_without_type_is_usage_error() {
        let err = convert(
            &convert_args(G_X, EncodingArg::Prefixed, None),
            &CliConfig::default(),
        )
        .unwrap_err();
        assert_eq!(key_error_kind(&err), None);
        assert!(err.to_string().contains("--type"));
    }

    #[test]
    fn convert_type_must_agree_with_tag() {
        let npub = KeyPair::generate().unwrap().public_key().to_prefixed();
        let err = convert(
            &convert_args(&npub, EncodingArg::Hex, Some(KindArg::Private)),
            &CliConfig::default(),
        )
        .unwrap_err();
        assert_eq!(key_error_kind(&err), Some(ErrorKind::TypeMismatch));
    }

    #[test]
    fn convert_same_encoding_echoes_canonical_form() {
        let upper = G_X.to_uppercase();
        let out = convert(
            &convert_args(&upper, EncodingArg::Hex, Some(KindArg::Public)),
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(out, format!("Key is already in hex format\n  Result: {G_X}"));
    }

    #[test]
    fn convert_garbage_is_format_error() {
        let err = convert(
            &convert_args("not-a-key", EncodingArg::Hex, None),
            &CliConfig::default(),
        )
        .unwrap_err();
        assert_eq!(key_error_kind(&err), Some(ErrorKind::Format));
    }

    #[test]
    fn convert_json_output() {
        let config = CliConfig {
            json: true,
            ..CliConfig::default()
        };
        let out = convert(
            &convert_args(G_X, EncodingArg::Prefixed, Some(KindArg::Public)),
            &config,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["original_type"], "public");
        assert!(value["converted_key"].as_str().unwrap().starts_with("npub1"));
    }
}
