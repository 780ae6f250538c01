//! Text and JSON rendering of command results.
//!
//! Every function returns the full stdout payload as a string. Nothing here
//! prints, so rendering can be tested without capturing stdout.

use serde::Serialize;

use nostress_core::{Encoding, EncodedKeyPair, KeyKind, KeyPair, ValidatedKey};

use crate::cli::FormatArg;

// ---------------------------------------------------------------------------
// Generate
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct KeyStrings<'a> {
    private_key: &'a str,
    public_key: &'a str,
}

impl<'a> From<&'a EncodedKeyPair> for KeyStrings<'a> {
    fn from(pair: &'a EncodedKeyPair) -> Self {
        Self {
            private_key: &pair.private_key,
            public_key: &pair.public_key,
        }
    }
}

#[derive(Serialize)]
struct SingleReport<'a> {
    #[serde(flatten)]
    keys: KeyStrings<'a>,
    format: String,
}

#[derive(Serialize)]
struct BothReport<'a> {
    hex: KeyStrings<'a>,
    prefixed: KeyStrings<'a>,
    format: &'static str,
}

/// Render a freshly generated keypair in the requested format.
pub fn render_generated(
    keypair: &KeyPair,
    format: FormatArg,
    json: bool,
) -> serde_json::Result<String> {
    let single = |encoding: Encoding| -> serde_json::Result<String> {
        let pair = keypair.to_encoding(encoding);
        if json {
            serde_json::to_string_pretty(&SingleReport {
                keys: KeyStrings::from(&pair),
                format: encoding.to_string(),
            })
        } else {
            Ok(keypair_lines(&pair))
        }
    };

    match format {
        FormatArg::Hex => single(Encoding::Hex),
        FormatArg::Prefixed => single(Encoding::Prefixed),
        FormatArg::Both => {
            let hex = keypair.to_encoding(Encoding::Hex);
            let prefixed = keypair.to_encoding(Encoding::Prefixed);
            if json {
                serde_json::to_string_pretty(&BothReport {
                    hex: KeyStrings::from(&hex),
                    prefixed: KeyStrings::from(&prefixed),
                    format: "both",
                })
            } else {
                Ok(format!(
                    "HEX Format:\n{}\n\nPrefixed Format:\n{}",
                    keypair_lines(&hex),
                    keypair_lines(&prefixed)
                ))
            }
        }
    }
}

fn keypair_lines(pair: &EncodedKeyPair) -> String {
    format!(
        "Private Key: {}\nPublic Key:  {}",
        pair.private_key, pair.public_key
    )
}

// ---------------------------------------------------------------------------
// Validate
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ValidationReport {
    valid: bool,
    kind: &'static str,
    encoding: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_key: Option<String>,
}

/// Render a successful validation.
///
/// For a private key the derived public key is shown; the private key
/// itself is never echoed.
pub fn render_validated(validated: &ValidatedKey, json: bool) -> serde_json::Result<String> {
    let (kind, public_key) = match validated {
        ValidatedKey::Private { keypair, .. } => ("private", Some(keypair.public_key().to_hex())),
        ValidatedKey::Public { public_key, .. } => ("public", Some(public_key.to_hex())),
        ValidatedKey::Ambiguous { .. } => ("ambiguous", None),
    };
    let encoding = validated.encoding().to_string();

    if json {
        return serde_json::to_string_pretty(&ValidationReport {
            valid: true,
            kind,
            encoding,
            public_key,
        });
    }

    let mut out = match validated {
        ValidatedKey::Ambiguous { .. } => format!("Valid {encoding} key (private or public)"),
        _ => format!("Valid {encoding} {kind} key"),
    };
    if let (ValidatedKey::Private { .. }, Some(pk)) = (validated, &public_key) {
        out.push_str(&format!("\n  Public key: {pk}"));
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Convert
// ---------------------------------------------------------------------------

/// Outcome of `keys convert`. Holds key strings, so no `Debug`.
pub struct Conversion {
    pub original_key: String,
    pub original_encoding: Encoding,
    pub kind: KeyKind,
    pub converted_key: String,
    pub target: Encoding,
}

impl Conversion {
    pub fn is_noop(&self) -> bool {
        self.original_encoding == self.target
    }
}

#[derive(Serialize)]
struct ConversionReport<'a> {
    original_key: &'a str,
    original_format: String,
    original_type: String,
    converted_key: &'a str,
    target_format: String,
}

/// Render a conversion result.
pub fn render_converted(conversion: &Conversion, json: bool) -> serde_json::Result<String> {
    if json {
        return serde_json::to_string_pretty(&ConversionReport {
            original_key: &conversion.original_key,
            original_format: conversion.original_encoding.to_string(),
            original_type: conversion.kind.to_string(),
            converted_key: &conversion.converted_key,
            target_format: conversion.target.to_string(),
        });
    }

    let headline = if conversion.is_noop() {
        format!("Key is already in {} format", conversion.target)
    } else {
        format!(
            "Converted {} {} key to {} format",
            conversion.original_encoding, conversion.kind, conversion.target
        )
    };
    Ok(format!("{headline}\n  Result: {}", conversion.converted_key))
}
