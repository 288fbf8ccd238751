//! Subcommand implementations.
//!
//! Each command returns the JSON it would print so `main` stays a thin
//! dispatcher and the commands are testable without a process.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use xrpl_models::config::{network_id_required, network_name};
use xrpl_models::prelude::*;

/// Reads and parses the input JSON from `file`, or stdin for `None`/`-`.
pub fn read_input(file: Option<&Path>) -> Result<Value> {
    let text = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("input is not valid JSON")
}

/// Outcome of `validate`: the report to print and whether it passed.
#[derive(Debug)]
pub struct ValidateReport {
    pub valid: bool,
    pub report: Value,
}

pub fn validate(input: &Value, network_id: Option<u32>) -> Result<ValidateReport> {
    let tx = Transaction::from_json(input).context("failed to decode transaction")?;
    let errors = tx.get_errors();

    if let Some(network_id) = network_id {
        if network_id_required(network_id) && tx.common().network_id().is_none() {
            tracing::warn!(
                network = %network_name(network_id),
                "transaction has no NetworkID but the network requires one"
            );
        }
    }

    tracing::debug!(
        transaction_type = %tx.transaction_type(),
        errors = errors.len(),
        "validated transaction"
    );

    let valid = errors.is_empty();
    Ok(ValidateReport {
        valid,
        report: json!({ "valid": valid, "errors": errors }),
    })
}

pub fn normalize(input: &Value) -> Result<Value> {
    let tx = Transaction::from_json(input).context("failed to decode transaction")?;
    Ok(Value::Object(tx.to_wire()))
}

/// Decodes `mask` when given, otherwise encodes `names`. With neither, lists
/// the registry.
pub fn flags(tx_type: TransactionType, mask: Option<u32>, names: &[String]) -> Result<Value> {
    if let Some(mask) = mask {
        return Ok(json!({
            "transaction_type": tx_type,
            "mask": mask,
            "names": Transaction::decode_flags(tx_type, mask),
        }));
    }
    if !names.is_empty() {
        let mask = Transaction::encode_flags(tx_type, names)?;
        return Ok(json!({
            "transaction_type": tx_type,
            "mask": mask,
            "names": names,
        }));
    }
    let registry: serde_json::Map<String, Value> = Transaction::flag_registry(tx_type)
        .into_iter()
        .map(|(name, bits)| (name.to_string(), Value::from(bits)))
        .collect();
    Ok(json!({ "transaction_type": tx_type, "flags": registry }))
}

/// The common fields followed by the type's own fields.
pub fn fields(tx_type: TransactionType) -> Value {
    json!({
        "transaction_type": tx_type,
        "common": COMMON_FIELDS,
        "fields": Transaction::field_specs(tx_type),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ALICE: &str = "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn";
    const BOB: &str = "ra5nK24KXen9AHvsdFTKHSANinZseWnPcX";

    fn self_payment() -> Value {
        json!({
            "TransactionType": "Payment",
            "Account": ALICE,
            "Destination": ALICE,
            "Amount": "1000"
        })
    }

    #[test]
    fn reads_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", self_payment()).unwrap();
        assert_eq!(read_input(Some(file.path())).unwrap(), self_payment());
    }

    #[test]
    fn read_input_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = read_input(Some(file.path())).unwrap_err();
        assert_eq!(err.to_string(), "input is not valid JSON");
    }

    #[test]
    fn validate_reports_errors_by_field() {
        let outcome = validate(&self_payment(), None).unwrap();
        assert!(!outcome.valid);
        assert_eq!(outcome.report["valid"], false);
        assert!(outcome.report["errors"]["destination"].is_string());
    }

    #[test]
    fn validate_passes_a_good_payment() {
        let mut input = self_payment();
        input["Destination"] = json!(BOB);
        let outcome = validate(&input, Some(21338)).unwrap();
        assert!(outcome.valid);
        assert_eq!(outcome.report, json!({"valid": true, "errors": {}}));
    }

    #[test]
    fn validate_fails_on_malformed_input() {
        assert!(validate(&json!([1, 2]), None).is_err());
    }

    #[test]
    fn normalize_drops_nothing_and_adds_nothing() {
        let mut input = self_payment();
        input["Destination"] = json!(BOB);
        assert_eq!(normalize(&input).unwrap(), input);
    }

    #[test]
    fn flags_decode_and_encode() {
        let decoded = flags(TransactionType::OfferCreate, Some(0x000A_0000), &[]).unwrap();
        assert_eq!(decoded["names"], json!(["tfImmediateOrCancel", "tfSell"]));

        let names = vec!["tfSell".to_string()];
        let encoded = flags(TransactionType::OfferCreate, None, &names).unwrap();
        assert_eq!(encoded["mask"], 0x0008_0000);

        let unknown = vec!["tfRenew".to_string()];
        assert!(flags(TransactionType::Payment, None, &unknown).is_err());
    }

    #[test]
    fn flags_without_input_lists_registry() {
        let listed = flags(TransactionType::TrustSet, None, &[]).unwrap();
        assert_eq!(listed["flags"]["tfSetNoRipple"], 0x0002_0000);
        assert_eq!(listed["flags"]["tfFullyCanonicalSig"], 0x8000_0000u32);
    }

    #[test]
    fn fields_lists_required_markers() {
        let table = fields(TransactionType::CheckCash);
        let check_id = table["fields"]
            .as_array()
            .unwrap()
            .iter()
            .find(|spec| spec["wire_name"] == "CheckID")
            .unwrap();
        assert_eq!(check_id["required"], true);
        assert_eq!(table["common"][0]["name"], "account");
    }
}
