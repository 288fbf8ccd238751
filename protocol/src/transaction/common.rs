//! Fields shared by every transaction variant.

use serde_json::{Map, Value};

use super::field::FieldSpec;
use super::flags::{allowed_mask, TransactionFlag};
use super::validation::ValidationErrors;
use crate::error::DeserializationError;
use crate::models::wire::{put, FieldReader};
use crate::models::{Drops, Hash256, Memo, Required, Signer};

/// The common field table, in wire order.
pub const COMMON_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("account", "Account", "String", true),
    FieldSpec::new("fee", "Fee", "Drops", false),
    FieldSpec::new("sequence", "Sequence", "u32", false),
    FieldSpec::new("account_txn_id", "AccountTxnID", "Hash256", false),
    FieldSpec::new("flags", "Flags", "u32", false),
    FieldSpec::new("last_ledger_sequence", "LastLedgerSequence", "u32", false),
    FieldSpec::new("memos", "Memos", "Vec<Memo>", false),
    FieldSpec::new("signers", "Signers", "Vec<Signer>", false),
    FieldSpec::new("source_tag", "SourceTag", "u32", false),
    FieldSpec::new("signing_public_key", "SigningPubKey", "String", false),
    FieldSpec::new("ticket_sequence", "TicketSequence", "u32", false),
    FieldSpec::new("txn_signature", "TxnSignature", "String", false),
    FieldSpec::new("network_id", "NetworkID", "u32", false),
];

/// The fields every transaction carries. Variants embed one of these and
/// expose it read-only through `common()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonFields {
    pub(crate) account: Required<String>,
    pub(crate) fee: Option<Drops>,
    pub(crate) sequence: Option<u32>,
    pub(crate) account_txn_id: Option<Hash256>,
    pub(crate) flags: Option<u32>,
    pub(crate) last_ledger_sequence: Option<u32>,
    pub(crate) memos: Option<Vec<Memo>>,
    pub(crate) signers: Option<Vec<Signer>>,
    pub(crate) source_tag: Option<u32>,
    pub(crate) signing_public_key: Option<String>,
    pub(crate) ticket_sequence: Option<u32>,
    pub(crate) txn_signature: Option<String>,
    pub(crate) network_id: Option<u32>,
}

impl CommonFields {
    /// The sending account, `None` if it was never supplied.
    pub fn account(&self) -> Option<&str> {
        self.account.as_ref().map(String::as_str)
    }

    pub fn fee(&self) -> Option<Drops> {
        self.fee
    }

    pub fn sequence(&self) -> Option<u32> {
        self.sequence
    }

    pub fn account_txn_id(&self) -> Option<&Hash256> {
        self.account_txn_id.as_ref()
    }

    /// The normalized flag mask.
    pub fn flags(&self) -> Option<u32> {
        self.flags
    }

    pub fn last_ledger_sequence(&self) -> Option<u32> {
        self.last_ledger_sequence
    }

    pub fn memos(&self) -> Option<&[Memo]> {
        self.memos.as_deref()
    }

    pub fn signers(&self) -> Option<&[Signer]> {
        self.signers.as_deref()
    }

    pub fn source_tag(&self) -> Option<u32> {
        self.source_tag
    }

    pub fn signing_public_key(&self) -> Option<&str> {
        self.signing_public_key.as_deref()
    }

    pub fn ticket_sequence(&self) -> Option<u32> {
        self.ticket_sequence
    }

    pub fn txn_signature(&self) -> Option<&str> {
        self.txn_signature.as_deref()
    }

    pub fn network_id(&self) -> Option<u32> {
        self.network_id
    }

    /// Whether every bit of `bits` is set in the flag mask.
    pub(crate) fn has_bits(&self, bits: u32) -> bool {
        self.flags.map_or(false, |mask| mask & bits == bits)
    }

    /// Sentinel check for `account`, flag bits no registry for this
    /// variant defines, and memo parts that are not hex.
    pub(crate) fn check<F: TransactionFlag>(&self, errors: &mut ValidationErrors) {
        if self.account.is_missing() {
            errors.insert("account", "`account` is required.");
        }
        if let Some(mask) = self.flags {
            let unknown = mask & !allowed_mask::<F>();
            if unknown != 0 {
                errors.insert(
                    "flags",
                    format!("flag bits 0x{:08X} are not defined for this transaction type", unknown),
                );
            }
        }
        let bad_memo = self.memos.iter().flatten().enumerate().find_map(|(index, memo)| {
            memo.invalid_part().map(|(key, reason)| (index, key, reason))
        });
        if let Some((index, key, reason)) = bad_memo {
            errors.insert("memos", format!("memo {} `{}`: {}", index, key, reason));
        }
    }

    pub(crate) fn read(reader: &mut FieldReader<'_>) -> Result<Self, DeserializationError> {
        Ok(Self {
            account: Required::from_option(reader.take("account", "Account")?),
            fee: reader.take("fee", "Fee")?,
            sequence: reader.take("sequence", "Sequence")?,
            account_txn_id: reader.take("account_txn_id", "AccountTxnID")?,
            flags: reader.take_flags()?,
            last_ledger_sequence: reader.take("last_ledger_sequence", "LastLedgerSequence")?,
            memos: reader.take("memos", "Memos")?,
            signers: reader.take("signers", "Signers")?,
            source_tag: reader.take("source_tag", "SourceTag")?,
            signing_public_key: reader.take("signing_public_key", "SigningPubKey")?,
            ticket_sequence: reader.take("ticket_sequence", "TicketSequence")?,
            txn_signature: reader.take("txn_signature", "TxnSignature")?,
            network_id: reader.take("network_id", "NetworkID")?,
        })
    }

    pub(crate) fn write(&self, map: &mut Map<String, Value>) {
        put(map, "Account", self.account.as_ref());
        put(map, "Fee", self.fee.as_ref());
        put(map, "Sequence", self.sequence.as_ref());
        put(map, "AccountTxnID", self.account_txn_id.as_ref());
        put(map, "Flags", self.flags.as_ref());
        put(map, "LastLedgerSequence", self.last_ledger_sequence.as_ref());
        put(map, "Memos", self.memos.as_ref());
        put(map, "Signers", self.signers.as_ref());
        put(map, "SourceTag", self.source_tag.as_ref());
        put(map, "SigningPubKey", self.signing_public_key.as_ref());
        put(map, "TicketSequence", self.ticket_sequence.as_ref());
        put(map, "TxnSignature", self.txn_signature.as_ref());
        put(map, "NetworkID", self.network_id.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::wire::Naming;
    use crate::transaction::flags::{NoFlags, PaymentFlag};
    use serde_json::json;

    #[test]
    fn missing_account_is_reported() {
        let mut errors = ValidationErrors::new();
        CommonFields::default().check::<NoFlags>(&mut errors);
        assert_eq!(errors.get("account"), Some("`account` is required."));
    }

    #[test]
    fn undefined_flag_bits_are_reported() {
        let common = CommonFields {
            account: Required::Present("rA".to_string()),
            flags: Some(0x8002_0000),
            ..CommonFields::default()
        };

        let mut errors = ValidationErrors::new();
        common.check::<PaymentFlag>(&mut errors);
        assert!(errors.is_empty());

        let mut errors = ValidationErrors::new();
        common.check::<NoFlags>(&mut errors);
        assert!(errors.contains("flags"));
    }

    #[test]
    fn non_hex_memo_is_reported() {
        let common = CommonFields {
            account: Required::Present("rA".to_string()),
            memos: Some(vec![
                Memo::from_text("fine"),
                Memo {
                    memo_data: Some("ABC".to_string()),
                    ..Memo::default()
                },
            ]),
            ..CommonFields::default()
        };
        let mut errors = ValidationErrors::new();
        common.check::<NoFlags>(&mut errors);
        let message = errors.get("memos").unwrap();
        assert!(message.starts_with("memo 1 `MemoData`"), "{}", message);
    }

    #[test]
    fn read_then_write_is_lossless() {
        let wire = json!({
            "Account": "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn",
            "Fee": "12",
            "Sequence": 5,
            "Flags": 2147483648u32,
            "Memos": [{"Memo": {"MemoData": "72656E74"}}],
            "NetworkID": 1025
        });
        let map = wire.as_object().unwrap();
        let mut reader = FieldReader::new(map, Naming::Wire, |_| None);
        let common = CommonFields::read(&mut reader).unwrap();
        reader.finish().unwrap();

        let mut out = Map::new();
        common.write(&mut out);
        assert_eq!(Value::Object(out), wire);
        assert!(common.has_bits(0x8000_0000));
        assert_eq!(common.fee().map(Drops::value), Some(12));
    }

    #[test]
    fn field_table_matches_wire_keys() {
        assert_eq!(COMMON_FIELDS.len(), 13);
        assert!(COMMON_FIELDS
            .iter()
            .any(|spec| spec.name == "signing_public_key" && spec.wire_name == "SigningPubKey"));
    }
}
