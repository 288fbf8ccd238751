//! Array-element sub-records: memos, multi-signers and signer-list entries.
//!
//! On the wire each element sits inside a single-key wrapper object
//! (`{"Memo": {...}}`), which the codec adds and strips.

use serde_json::{Map, Value};

use super::wire::{put, unwrap_wrapper, wrap, FieldReader, WireValue};
use crate::error::DeserializationError;

// ---------------------------------------------------------------------------
// Memo
// ---------------------------------------------------------------------------

/// Arbitrary data attached to a transaction. All three parts are hex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Memo {
    pub memo_data: Option<String>,
    pub memo_format: Option<String>,
    pub memo_type: Option<String>,
}

impl Memo {
    /// A memo whose data is the hex encoding of `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            memo_data: Some(hex::encode_upper(text.as_bytes())),
            ..Self::default()
        }
    }

    /// Sets the memo type from plain text (e.g. a MIME type or URL).
    pub fn with_type(mut self, memo_type: &str) -> Self {
        self.memo_type = Some(hex::encode_upper(memo_type.as_bytes()));
        self
    }

    /// The first part that is not hex, as its wire key and the reason.
    /// Validation reports it under `memos`; the decoder rejects it.
    pub fn invalid_part(&self) -> Option<(&'static str, String)> {
        [
            ("MemoData", &self.memo_data),
            ("MemoFormat", &self.memo_format),
            ("MemoType", &self.memo_type),
        ]
        .into_iter()
        .find_map(|(key, part)| {
            let text = part.as_ref()?;
            hex::decode(text)
                .err()
                .map(|e| (key, format!("expected hex: {}", e)))
        })
    }

    /// Decodes `memo_data` back to UTF-8, if it is text.
    pub fn data_text(&self) -> Option<String> {
        let bytes = hex::decode(self.memo_data.as_ref()?).ok()?;
        String::from_utf8(bytes).ok()
    }
}

impl WireValue for Memo {
    fn to_wire(&self) -> Value {
        let mut inner = Map::new();
        put(&mut inner, "MemoData", self.memo_data.as_ref());
        put(&mut inner, "MemoFormat", self.memo_format.as_ref());
        put(&mut inner, "MemoType", self.memo_type.as_ref());
        wrap("Memo", inner)
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        let inner = unwrap_wrapper(field, value, "Memo")?;
        let prefix = format!("{}.Memo", field);
        let mut reader = FieldReader::nested(inner, &prefix);
        let memo = Self {
            memo_data: reader.take("memo_data", "MemoData")?,
            memo_format: reader.take("memo_format", "MemoFormat")?,
            memo_type: reader.take("memo_type", "MemoType")?,
        };
        reader.finish()?;

        if let Some((key, reason)) = memo.invalid_part() {
            return Err(DeserializationError::invalid(
                &format!("{}.{}", prefix, key),
                value,
                reason,
            ));
        }
        Ok(memo)
    }
}

// ---------------------------------------------------------------------------
// Signer
// ---------------------------------------------------------------------------

/// One signature of a multi-signed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signer {
    pub account: String,
    pub txn_signature: String,
    pub signing_public_key: String,
}

impl WireValue for Signer {
    fn to_wire(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("Account".to_string(), self.account.to_wire());
        inner.insert("TxnSignature".to_string(), self.txn_signature.to_wire());
        inner.insert("SigningPubKey".to_string(), self.signing_public_key.to_wire());
        wrap("Signer", inner)
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        let inner = unwrap_wrapper(field, value, "Signer")?;
        let prefix = format!("{}.Signer", field);
        let mut reader = FieldReader::nested(inner, &prefix);
        let signer = Self {
            account: reader.require("account", "Account", value)?,
            txn_signature: reader.require("txn_signature", "TxnSignature", value)?,
            signing_public_key: reader.require("signing_public_key", "SigningPubKey", value)?,
        };
        reader.finish()?;
        Ok(signer)
    }
}

// ---------------------------------------------------------------------------
// SignerEntry
// ---------------------------------------------------------------------------

/// A member of an account's signer list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignerEntry {
    pub account: String,
    pub signer_weight: u16,
}

impl SignerEntry {
    pub fn new(account: impl Into<String>, signer_weight: u16) -> Self {
        Self {
            account: account.into(),
            signer_weight,
        }
    }
}

impl WireValue for SignerEntry {
    fn to_wire(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("Account".to_string(), self.account.to_wire());
        inner.insert("SignerWeight".to_string(), self.signer_weight.to_wire());
        wrap("SignerEntry", inner)
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        let inner = unwrap_wrapper(field, value, "SignerEntry")?;
        let prefix = format!("{}.SignerEntry", field);
        let mut reader = FieldReader::nested(inner, &prefix);
        let entry = Self {
            account: reader.require("account", "Account", value)?,
            signer_weight: reader.require("signer_weight", "SignerWeight", value)?,
        };
        reader.finish()?;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn memo_from_text() {
        let memo = Memo::from_text("hello").with_type("text/plain");
        assert_eq!(memo.memo_data.as_deref(), Some("68656C6C6F"));
        assert_eq!(memo.data_text().as_deref(), Some("hello"));
        assert_eq!(
            memo.to_wire(),
            json!({"Memo": {"MemoData": "68656C6C6F", "MemoType": "746578742F706C61696E"}})
        );
    }

    #[test]
    fn memo_rejects_non_hex_and_unknown_keys() {
        let err = Memo::from_wire("Memos[0]", &json!({"Memo": {"MemoData": "xyz"}})).unwrap_err();
        assert_eq!(err.field(), Some("Memos[0].Memo.MemoData"));

        let err =
            Memo::from_wire("Memos[1]", &json!({"Memo": {"MemoNote": "00"}})).unwrap_err();
        assert_eq!(err.field(), Some("Memos[1].Memo.MemoNote"));
    }

    #[test]
    fn invalid_part_names_the_first_bad_key() {
        assert_eq!(Memo::from_text("ok").invalid_part(), None);

        let memo = Memo {
            memo_type: Some("not hex".to_string()),
            memo_format: Some("ABC".to_string()),
            ..Memo::from_text("ok")
        };
        let (key, reason) = memo.invalid_part().unwrap();
        assert_eq!(key, "MemoFormat");
        assert!(reason.starts_with("expected hex"));
    }

    #[test]
    fn signer_entry_wire_shape() {
        let entry = SignerEntry::new("rPcNzota6B8YBokhYtcTNqQVCngtbnWfux", 2);
        let wire = entry.to_wire();
        assert_eq!(
            wire,
            json!({"SignerEntry": {"Account": "rPcNzota6B8YBokhYtcTNqQVCngtbnWfux", "SignerWeight": 2}})
        );
        assert_eq!(SignerEntry::from_wire("SignerEntries[0]", &wire).unwrap(), entry);
    }

    #[test]
    fn signer_requires_all_parts() {
        let err = Signer::from_wire(
            "Signers[0]",
            &json!({"Signer": {"Account": "rA", "TxnSignature": "AB"}}),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("Signers[0].Signer.SigningPubKey"));
    }
}
