//! # CLI Interface
//!
//! Defines the command-line argument structure for `xrpl-tx` using `clap`
//! derive. Supports five subcommands: `validate`, `normalize`, `flags`,
//! `fields` and `version`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use xrpl_models::transaction::types::UnknownTransactionType;
use xrpl_models::transaction::TransactionType;

use crate::logging::LogFormat;

/// XRP Ledger transaction toolkit.
///
/// Validates, normalizes and inspects transactions in the ledger's
/// canonical JSON form. Reads from a file or, when no file is given, from
/// stdin. Results go to stdout as JSON; logs go to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "xrpl-tx",
    about = "XRP Ledger transaction toolkit",
    version,
    propagate_version = true
)]
pub struct XrplTxCli {
    /// Log output format.
    #[arg(long, global = true, env = "XRPL_TX_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Default log filter when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "XRPL_TX_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the `xrpl-tx` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a transaction and print its validation errors.
    Validate(ValidateArgs),
    /// Parse a transaction and re-emit its canonical wire JSON.
    Normalize(InputArgs),
    /// Decode a flags mask or encode flag names for a transaction type.
    Flags(FlagsArgs),
    /// Print the field table of a transaction type.
    Fields(FieldsArgs),
    /// Print version information and exit.
    Version,
}

/// Where to read the transaction JSON from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Path to a JSON file. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Network the transaction is meant for. Warns when the network
    /// requires `NetworkID` and the transaction lacks one.
    #[arg(long, env = "XRPL_TX_NETWORK_ID")]
    pub network_id: Option<u32>,
}

/// Arguments for the `flags` subcommand.
#[derive(Args, Debug)]
pub struct FlagsArgs {
    /// Transaction type, e.g. `Payment`.
    #[arg(long = "type", short = 't', value_parser = parse_transaction_type)]
    pub transaction_type: TransactionType,

    /// Flags mask to decode into names.
    #[arg(long, conflicts_with = "names", value_parser = parse_mask)]
    pub mask: Option<u32>,

    /// Comma-separated flag names to encode into a mask.
    #[arg(long, value_delimiter = ',')]
    pub names: Vec<String>,
}

/// Arguments for the `fields` subcommand.
#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Transaction type, e.g. `EscrowCreate`.
    #[arg(long = "type", short = 't', value_parser = parse_transaction_type)]
    pub transaction_type: TransactionType,
}

fn parse_transaction_type(s: &str) -> Result<TransactionType, String> {
    s.parse().map_err(|e: UnknownTransactionType| e.to_string())
}

/// Accepts decimal or `0x`-prefixed hex.
fn parse_mask(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid mask `{}`: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        XrplTxCli::command().debug_assert();
    }

    #[test]
    fn parses_flags_subcommand() {
        let cli = XrplTxCli::try_parse_from([
            "xrpl-tx",
            "flags",
            "--type",
            "OfferCreate",
            "--names",
            "tfSell,tfPassive",
        ])
        .unwrap();
        match cli.command {
            Commands::Flags(args) => {
                assert_eq!(args.transaction_type, TransactionType::OfferCreate);
                assert_eq!(args.names, vec!["tfSell", "tfPassive"]);
                assert_eq!(args.mask, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn mask_accepts_hex_and_rejects_names_together() {
        let cli =
            XrplTxCli::try_parse_from(["xrpl-tx", "flags", "-t", "Payment", "--mask", "0x20000"])
                .unwrap();
        match cli.command {
            Commands::Flags(args) => assert_eq!(args.mask, Some(0x20000)),
            other => panic!("unexpected command {:?}", other),
        }

        assert!(XrplTxCli::try_parse_from([
            "xrpl-tx", "flags", "-t", "Payment", "--mask", "1", "--names", "tfPartialPayment",
        ])
        .is_err());
    }

    #[test]
    fn log_format_is_global() {
        let cli = XrplTxCli::try_parse_from(["xrpl-tx", "version", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);

        let cli = XrplTxCli::try_parse_from(["xrpl-tx", "version"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert!(XrplTxCli::try_parse_from(["xrpl-tx", "--log-format", "xml", "version"]).is_err());
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        assert!(XrplTxCli::try_parse_from(["xrpl-tx", "fields", "--type", "Transfer"]).is_err());
    }
}
