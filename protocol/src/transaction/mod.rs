//! # Transaction Module
//!
//! Typed ledger transactions: one immutable value type per transaction kind,
//! each with a builder, a validator and a lossless wire codec.
//!
//! ## Architecture
//!
//! ```text
//! types.rs           — TransactionType, the closed set of kinds
//! flags.rs           — per-kind flag registries and flag normalization
//! field.rs           — FieldSpec, per-field metadata
//! common.rs          — CommonFields, shared by every kind
//! validation.rs      — ValidationErrors and the Validate trait
//! macros.rs          — define_transaction!, which expands a field table
//! payment.rs ...     — one module per transaction family
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — `Payment::builder()...build()`, or `from_fields` with
//!    snake_case names. Only unknown names (fields or flags) fail here.
//! 2. **Validate** — [`Validate::get_errors`] returns field → message; an
//!    empty mapping means the transaction is well-formed.
//! 3. **Serialize** — [`TransactionModel::to_wire`] renders the canonical
//!    JSON for the external signer.
//! 4. **Sign** — the signer's output is attached with `with_signature`,
//!    which returns a new value.
//!
//! ## Design Decisions
//!
//! - Required fields are [`Required`](crate::models::Required) slots, so an
//!   incomplete transaction is representable and validation reports every
//!   missing field by name instead of the builder failing on the first.
//! - Flags are normalized to a `u32` mask at construction. Names never
//!   survive past the boundary.
//! - [`Transaction`] is a closed enum. Adding a kind without a validator
//!   does not compile.

#[macro_use]
mod macros;

pub mod account;
pub mod check;
pub mod common;
pub mod deposit_preauth;
pub mod escrow;
pub mod field;
pub mod flags;
pub mod offer;
pub mod payment;
pub mod payment_channel;
pub mod signer_list;
pub mod ticket;
pub mod trust_set;
pub mod types;
pub mod validation;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{ConstructionError, DeserializationError};

pub use account::{AccountDelete, AccountSet, SetRegularKey};
pub use check::{CheckCancel, CheckCash, CheckCreate};
pub use common::{CommonFields, COMMON_FIELDS};
pub use deposit_preauth::DepositPreauth;
pub use escrow::{EscrowCancel, EscrowCreate, EscrowFinish};
pub use field::FieldSpec;
pub use flags::{
    AccountSetAsfFlag, AccountSetFlag, FlagsInput, GlobalFlag, NoFlags, OfferCreateFlag,
    PaymentChannelClaimFlag, PaymentFlag, TransactionFlag, TrustSetFlag,
};
pub use offer::{OfferCancel, OfferCreate};
pub use payment::Payment;
pub use payment_channel::{PaymentChannelClaim, PaymentChannelCreate, PaymentChannelFund};
pub use signer_list::SignerListSet;
pub use ticket::TicketCreate;
pub use trust_set::TrustSet;
pub use types::TransactionType;
pub use validation::{Validate, ValidationErrors};

// ---------------------------------------------------------------------------
// TransactionModel
// ---------------------------------------------------------------------------

/// What every transaction kind provides. Implemented by `define_transaction!`.
pub trait TransactionModel: Sized + Clone {
    /// The kind's fixed tag.
    const TRANSACTION_TYPE: TransactionType;

    /// The kind's flag registry ([`NoFlags`] when it has none).
    type Flag: TransactionFlag;

    /// The kind-specific field table (see [`COMMON_FIELDS`] for the rest).
    fn fields() -> &'static [FieldSpec];

    fn common(&self) -> &CommonFields;

    /// The tag the value carries. Always [`Self::TRANSACTION_TYPE`] unless
    /// it was decoded from a mislabeled wire object.
    fn transaction_type(&self) -> TransactionType;

    /// Sentinel checks for `account` and every required field, the type tag
    /// check and the flag-bit check.
    fn base_errors(&self) -> ValidationErrors;

    /// A copy carrying the given signature and signing key.
    fn with_signature(&self, txn_signature: String, signing_public_key: String) -> Self;

    /// The canonical wire object.
    fn to_wire(&self) -> Map<String, Value>;

    /// Parses a canonical wire object. The schema is closed.
    fn from_wire(map: &Map<String, Value>) -> Result<Self, DeserializationError>;

    /// Builds from snake_case field names. `flags` may be a mask or a list
    /// of flag names, and `null` means absent.
    fn from_fields(fields: &Map<String, Value>) -> Result<Self, ConstructionError>;

    /// True iff `flag`'s registry applies to this kind and its bits are set.
    fn has_flag<F: TransactionFlag>(&self, flag: F) -> bool {
        F::applies_to(Self::TRANSACTION_TYPE) && self.common().has_bits(flag.bits())
    }

    /// Names of the flags set on this transaction.
    fn flag_names(&self) -> Vec<&'static str> {
        flags::decode_flags::<Self::Flag>(self.common().flags().unwrap_or(0))
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

macro_rules! transactions {
    ($($variant:ident,)*) => {
        /// Any transaction, as a closed tagged union.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Transaction {
            $($variant($variant),)*
        }

        $(
            impl From<$variant> for Transaction {
                fn from(tx: $variant) -> Self {
                    Transaction::$variant(tx)
                }
            }
        )*

        impl Transaction {
            pub fn transaction_type(&self) -> TransactionType {
                match self {
                    $(Transaction::$variant(tx) => tx.transaction_type(),)*
                }
            }

            pub fn common(&self) -> &CommonFields {
                match self {
                    $(Transaction::$variant(tx) => tx.common(),)*
                }
            }

            /// Runs the kind's validator.
            pub fn get_errors(&self) -> ValidationErrors {
                match self {
                    $(Transaction::$variant(tx) => Validate::get_errors(tx),)*
                }
            }

            /// True iff `flag`'s registry applies to this kind and its bits
            /// are set. A flag from another kind's registry is never set,
            /// even when it shares bits with one of this kind's flags.
            pub fn has_flag<F: TransactionFlag>(&self, flag: F) -> bool {
                match self {
                    $(Transaction::$variant(tx) => tx.has_flag(flag),)*
                }
            }

            pub fn flag_names(&self) -> Vec<&'static str> {
                match self {
                    $(Transaction::$variant(tx) => tx.flag_names(),)*
                }
            }

            pub fn to_wire(&self) -> Map<String, Value> {
                match self {
                    $(Transaction::$variant(tx) => tx.to_wire(),)*
                }
            }

            pub fn with_signature(&self, txn_signature: String, signing_public_key: String) -> Self {
                match self {
                    $(Transaction::$variant(tx) => {
                        Transaction::$variant(tx.with_signature(txn_signature, signing_public_key))
                    })*
                }
            }

            /// Parses a wire object, dispatching on its `TransactionType`.
            pub fn from_wire(map: &Map<String, Value>) -> Result<Self, DeserializationError> {
                let tag = map
                    .get("TransactionType")
                    .ok_or(DeserializationError::MissingTransactionType)?;
                let name = tag.as_str().ok_or_else(|| {
                    DeserializationError::invalid("TransactionType", tag, "expected a string")
                })?;
                let tx_type: TransactionType = name
                    .parse()
                    .map_err(|_| DeserializationError::UnknownTransactionType(name.to_string()))?;
                match tx_type {
                    $(TransactionType::$variant => $variant::from_wire(map).map(Transaction::$variant),)*
                }
            }

            /// Builds a transaction of kind `tx_type` from snake_case names.
            pub fn from_fields(
                tx_type: TransactionType,
                fields: &Map<String, Value>,
            ) -> Result<Self, ConstructionError> {
                match tx_type {
                    $(TransactionType::$variant => {
                        $variant::from_fields(fields).map(Transaction::$variant)
                    })*
                }
            }

            /// The kind-specific field table for `tx_type`.
            pub fn field_specs(tx_type: TransactionType) -> &'static [FieldSpec] {
                match tx_type {
                    $(TransactionType::$variant => $variant::fields(),)*
                }
            }

            /// `(name, bits)` for every flag `tx_type` accepts, global flags last.
            pub fn flag_registry(tx_type: TransactionType) -> Vec<(&'static str, u32)> {
                match tx_type {
                    $(TransactionType::$variant => {
                        flags::registry_entries::<<$variant as TransactionModel>::Flag>()
                    })*
                }
            }

            /// Resolves flag names for `tx_type` into a mask.
            pub fn encode_flags(
                tx_type: TransactionType,
                names: &[String],
            ) -> Result<u32, ConstructionError> {
                let input = FlagsInput::Names(names.to_vec());
                match tx_type {
                    $(TransactionType::$variant => {
                        flags::normalize_flags::<<$variant as TransactionModel>::Flag>(tx_type, &input)
                    })*
                }
            }

            /// Names of the flags of `tx_type` set in `mask`.
            pub fn decode_flags(tx_type: TransactionType, mask: u32) -> Vec<&'static str> {
                match tx_type {
                    $(TransactionType::$variant => {
                        flags::decode_flags::<<$variant as TransactionModel>::Flag>(mask)
                    })*
                }
            }
        }
    };
}

transactions! {
    AccountDelete,
    AccountSet,
    CheckCancel,
    CheckCash,
    CheckCreate,
    DepositPreauth,
    EscrowCancel,
    EscrowCreate,
    EscrowFinish,
    OfferCancel,
    OfferCreate,
    Payment,
    PaymentChannelClaim,
    PaymentChannelCreate,
    PaymentChannelFund,
    SetRegularKey,
    SignerListSet,
    TicketCreate,
    TrustSet,
}

impl Transaction {
    /// The sending account.
    pub fn account(&self) -> Option<&str> {
        self.common().account()
    }

    pub fn is_valid(&self) -> bool {
        self.get_errors().is_empty()
    }

    /// Parses any JSON value, failing unless it is a wire object.
    pub fn from_json(value: &Value) -> Result<Self, DeserializationError> {
        match value {
            Value::Object(map) => Self::from_wire(map),
            other => Err(DeserializationError::NotAnObject {
                found: json_kind(other).to_string(),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for Transaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Transaction::from_json(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use serde_json::json;

    const ALICE: &str = "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn";
    const BOB: &str = "ra5nK24KXen9AHvsdFTKHSANinZseWnPcX";

    fn payment_wire() -> Value {
        json!({
            "TransactionType": "Payment",
            "Account": ALICE,
            "Destination": BOB,
            "Amount": "1000000",
            "Fee": "12",
            "Sequence": 2,
            "Flags": 131072
        })
    }

    #[test]
    fn wire_round_trip_dispatches_on_type() {
        let wire = payment_wire();
        let tx = Transaction::from_json(&wire).unwrap();
        assert_eq!(tx.transaction_type(), TransactionType::Payment);
        assert_eq!(tx.account(), Some(ALICE));
        assert_eq!(Value::Object(tx.to_wire()), wire);
        assert_eq!(tx.flag_names(), vec!["tfPartialPayment"]);
    }

    #[test]
    fn from_json_rejects_non_objects_and_bad_tags() {
        assert_eq!(
            Transaction::from_json(&json!([1, 2])).unwrap_err(),
            DeserializationError::NotAnObject {
                found: "an array".to_string()
            }
        );
        assert_eq!(
            Transaction::from_json(&json!({"Account": ALICE})).unwrap_err(),
            DeserializationError::MissingTransactionType
        );
        assert_eq!(
            Transaction::from_json(&json!({"TransactionType": "Transfer"})).unwrap_err(),
            DeserializationError::UnknownTransactionType("Transfer".to_string())
        );
    }

    #[test]
    fn unknown_wire_key_is_rejected() {
        let mut wire = payment_wire();
        wire["Colour"] = json!("blue");
        assert_eq!(
            Transaction::from_json(&wire).unwrap_err(),
            DeserializationError::UnknownField {
                field: "Colour".to_string()
            }
        );
    }

    #[test]
    fn mislabeled_variant_fails_validation() {
        let mut wire = payment_wire();
        wire["TransactionType"] = json!("OfferCreate");
        let map = wire.as_object().unwrap();
        // Decoding the object as a Payment keeps the foreign tag around.
        let payment = Payment::from_wire(map).unwrap();
        assert!(payment.get_errors().contains("transaction_type"));
    }

    #[test]
    fn has_flag_ignores_other_registries() {
        // 0x00020000 is tfPartialPayment here and tfImmediateOrCancel on offers.
        let tx = Transaction::from_json(&payment_wire()).unwrap();
        assert!(tx.has_flag(PaymentFlag::PartialPayment));
        assert!(!tx.has_flag(OfferCreateFlag::ImmediateOrCancel));
    }

    #[test]
    fn named_fields_build_the_same_value() {
        let fields = json!({
            "account": ALICE,
            "destination": BOB,
            "amount": "1000000",
            "fee": "12",
            "sequence": 2,
            "flags": ["tfPartialPayment"],
            "invoice_id": null
        });
        let named =
            Transaction::from_fields(TransactionType::Payment, fields.as_object().unwrap()).unwrap();
        let wire = Transaction::from_json(&payment_wire()).unwrap();
        assert_eq!(named, wire);
    }

    #[test]
    fn named_fields_reject_unknown_names() {
        let fields = json!({"account": ALICE, "colour": "blue"});
        let err = Transaction::from_fields(TransactionType::CheckCancel, fields.as_object().unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            ConstructionError::UnknownField {
                transaction_type: TransactionType::CheckCancel,
                field: "colour".to_string(),
            }
        );

        let fields = json!({"account": ALICE, "transaction_type": "Payment"});
        let err = Transaction::from_fields(TransactionType::Payment, fields.as_object().unwrap())
            .unwrap_err();
        assert!(matches!(err, ConstructionError::UnknownField { .. }));

        let fields = json!({"account": ALICE, "flags": ["tfSell"]});
        let err = Transaction::from_fields(TransactionType::Payment, fields.as_object().unwrap())
            .unwrap_err();
        assert!(matches!(err, ConstructionError::UnknownFlag { .. }));
    }

    #[test]
    fn named_fields_report_malformed_values() {
        let fields = json!({"account": ALICE, "amount": 5});
        let err = Transaction::from_fields(TransactionType::Payment, fields.as_object().unwrap())
            .unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidValue { ref field, .. } if field == "amount"));
    }

    #[test]
    fn every_kind_round_trips_its_registry() {
        for tx_type in TransactionType::ALL {
            let names: Vec<String> = Transaction::flag_registry(*tx_type)
                .into_iter()
                .map(|(name, _)| name.to_string())
                .collect();
            let mask = Transaction::encode_flags(*tx_type, &names).unwrap();
            assert_eq!(Transaction::decode_flags(*tx_type, mask), names);
            assert!(!Transaction::field_specs(*tx_type).is_empty());
        }
    }

    #[test]
    fn signature_attaches_to_a_copy() {
        let tx: Transaction = Payment::builder()
            .account(ALICE)
            .destination(BOB)
            .amount(Amount::xrp(1))
            .build()
            .unwrap()
            .into();
        let signed = tx.with_signature("3045".to_string(), "ED01".to_string());
        assert_eq!(signed.common().txn_signature(), Some("3045"));
        assert_eq!(signed.common().signing_public_key(), Some("ED01"));
        assert_eq!(tx.common().txn_signature(), None);
    }

    #[test]
    fn serde_goes_through_the_wire_codec() {
        let tx: Transaction = serde_json::from_value(payment_wire()).unwrap();
        assert_eq!(serde_json::to_value(&tx).unwrap(), payment_wire());
        assert!(serde_json::from_value::<Transaction>(json!({"TransactionType": 1})).is_err());
    }
}
