//! Variant definitions.
//!
//! `define_transaction!` expands one field table into the variant struct,
//! its builder, its field specification, the base validation pass and both
//! codecs, so those can never disagree about which fields exist.

macro_rules! slot_type {
    (required $ty:ty) => { $crate::models::Required<$ty> };
    (optional $ty:ty) => { Option<$ty> };
}

macro_rules! is_required {
    (required) => {
        true
    };
    (optional) => {
        false
    };
}

macro_rules! define_transaction {
    (
        $(#[$meta:meta])*
        pub struct $name:ident, builder $builder:ident, flags $flag:ty {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $kind:ident $ty:ty => $wire:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            common: $crate::transaction::common::CommonFields,
            transaction_type: $crate::transaction::types::TransactionType,
            $($field: slot_type!($kind $ty),)*
        }

        impl $name {
            /// The variant-specific fields.
            pub const FIELDS: &'static [$crate::transaction::field::FieldSpec] = &[
                $($crate::transaction::field::FieldSpec::new(
                    stringify!($field),
                    $wire,
                    stringify!($ty),
                    is_required!($kind),
                ),)*
            ];

            pub fn builder() -> $builder {
                $builder::default()
            }

            /// A builder holding a copy of every field, for making a
            /// corrected copy.
            pub fn to_builder(&self) -> $builder {
                $builder {
                    common: self.common.clone(),
                    flags: self.common.flags.map($crate::transaction::flags::FlagsInput::Mask),
                    $($field: $crate::models::required::FieldSlot::get(&self.$field).cloned(),)*
                }
            }

            /// The sending account.
            pub fn account(&self) -> Option<&str> {
                self.common.account()
            }

            /// The normalized flag mask.
            pub fn flags(&self) -> Option<u32> {
                self.common.flags
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$ty> {
                    $crate::models::required::FieldSlot::get(&self.$field)
                }
            )*

            fn read_fields(
                mut reader: $crate::models::wire::FieldReader<'_>,
            ) -> Result<Self, $crate::error::DeserializationError> {
                let transaction_type =
                    reader.take_transaction_type($crate::transaction::types::TransactionType::$name)?;
                let common = $crate::transaction::common::CommonFields::read(&mut reader)?;
                $(
                    let $field = $crate::models::required::FieldSlot::from_option(
                        reader.take::<$ty>(stringify!($field), $wire)?,
                    );
                )*
                reader.finish()?;
                Ok(Self {
                    common,
                    transaction_type,
                    $($field,)*
                })
            }
        }

        impl $crate::transaction::TransactionModel for $name {
            const TRANSACTION_TYPE: $crate::transaction::types::TransactionType =
                $crate::transaction::types::TransactionType::$name;

            type Flag = $flag;

            fn fields() -> &'static [$crate::transaction::field::FieldSpec] {
                Self::FIELDS
            }

            fn common(&self) -> &$crate::transaction::common::CommonFields {
                &self.common
            }

            fn transaction_type(&self) -> $crate::transaction::types::TransactionType {
                self.transaction_type
            }

            fn base_errors(&self) -> $crate::transaction::validation::ValidationErrors {
                let mut errors = $crate::transaction::validation::ValidationErrors::new();
                self.common.check::<$flag>(&mut errors);
                $(
                    if $crate::models::required::FieldSlot::is_missing(&self.$field) {
                        errors.insert(
                            stringify!($field),
                            concat!("`", stringify!($field), "` is required."),
                        );
                    }
                )*
                if self.transaction_type != Self::TRANSACTION_TYPE {
                    errors.insert(
                        "transaction_type",
                        format!(
                            "expected {}, found {}",
                            Self::TRANSACTION_TYPE,
                            self.transaction_type
                        ),
                    );
                }
                errors
            }

            fn with_signature(&self, txn_signature: String, signing_public_key: String) -> Self {
                let mut signed = self.clone();
                signed.common.txn_signature = Some(txn_signature);
                signed.common.signing_public_key = Some(signing_public_key);
                signed
            }

            fn to_wire(&self) -> serde_json::Map<String, serde_json::Value> {
                let mut map = serde_json::Map::new();
                self.common.write(&mut map);
                map.insert(
                    "TransactionType".to_string(),
                    serde_json::Value::String(self.transaction_type.to_string()),
                );
                $(
                    $crate::models::wire::put(
                        &mut map,
                        $wire,
                        $crate::models::required::FieldSlot::get(&self.$field),
                    );
                )*
                map
            }

            fn from_wire(
                map: &serde_json::Map<String, serde_json::Value>,
            ) -> Result<Self, $crate::error::DeserializationError> {
                Self::read_fields($crate::models::wire::FieldReader::new(
                    map,
                    $crate::models::wire::Naming::Wire,
                    $crate::transaction::flags::resolve_flag_name::<$flag>,
                ))
            }

            fn from_fields(
                fields: &serde_json::Map<String, serde_json::Value>,
            ) -> Result<Self, $crate::error::ConstructionError> {
                Self::read_fields($crate::models::wire::FieldReader::new(
                    fields,
                    $crate::models::wire::Naming::Internal,
                    $crate::transaction::flags::resolve_flag_name::<$flag>,
                ))
                .map_err(|err| {
                    $crate::error::ConstructionError::from_field_error(
                        <Self as $crate::transaction::TransactionModel>::TRANSACTION_TYPE,
                        err,
                    )
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(
                    &<Self as $crate::transaction::TransactionModel>::to_wire(self),
                    serializer,
                )
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            common: $crate::transaction::common::CommonFields,
            flags: Option<$crate::transaction::flags::FlagsInput>,
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn account(mut self, account: impl $crate::models::IntoFieldValue<String>) -> Self {
                let account = $crate::models::IntoFieldValue::<String>::into_field_value(account);
                self.common.account = $crate::models::Required::Present(account);
                self
            }

            pub fn fee(mut self, fee: $crate::models::Drops) -> Self {
                self.common.fee = Some(fee);
                self
            }

            pub fn sequence(mut self, sequence: u32) -> Self {
                self.common.sequence = Some(sequence);
                self
            }

            pub fn account_txn_id(mut self, hash: $crate::models::Hash256) -> Self {
                self.common.account_txn_id = Some(hash);
                self
            }

            /// Sets the flags from a mask, a flag, or a list of flag names.
            /// Names are resolved by [`build`](Self::build).
            pub fn flags(mut self, flags: impl Into<$crate::transaction::flags::FlagsInput>) -> Self {
                self.flags = Some(flags.into());
                self
            }

            pub fn last_ledger_sequence(mut self, ledger: u32) -> Self {
                self.common.last_ledger_sequence = Some(ledger);
                self
            }

            pub fn memos(mut self, memos: Vec<$crate::models::Memo>) -> Self {
                self.common.memos = Some(memos);
                self
            }

            /// Appends one memo.
            pub fn memo(mut self, memo: $crate::models::Memo) -> Self {
                self.common.memos.get_or_insert_with(Vec::new).push(memo);
                self
            }

            pub fn signers(mut self, signers: Vec<$crate::models::Signer>) -> Self {
                self.common.signers = Some(signers);
                self
            }

            pub fn source_tag(mut self, tag: u32) -> Self {
                self.common.source_tag = Some(tag);
                self
            }

            pub fn signing_public_key(mut self, key: impl $crate::models::IntoFieldValue<String>) -> Self {
                let key = $crate::models::IntoFieldValue::<String>::into_field_value(key);
                self.common.signing_public_key = Some(key);
                self
            }

            pub fn ticket_sequence(mut self, ticket: u32) -> Self {
                self.common.ticket_sequence = Some(ticket);
                self
            }

            pub fn txn_signature(mut self, signature: impl $crate::models::IntoFieldValue<String>) -> Self {
                let signature = $crate::models::IntoFieldValue::<String>::into_field_value(signature);
                self.common.txn_signature = Some(signature);
                self
            }

            pub fn network_id(mut self, network_id: u32) -> Self {
                self.common.network_id = Some(network_id);
                self
            }

            $(
                pub fn $field(mut self, value: impl $crate::models::IntoFieldValue<$ty>) -> Self {
                    self.$field = Some($crate::models::IntoFieldValue::<$ty>::into_field_value(value));
                    self
                }
            )*

            /// Freezes the builder. Only flag names can fail here; missing
            /// required fields are left for validation to report.
            pub fn build(self) -> Result<$name, $crate::error::ConstructionError> {
                use $crate::transaction::types::TransactionType;

                let mut common = self.common;
                common.flags = match &self.flags {
                    Some(input) => Some($crate::transaction::flags::normalize_flags::<$flag>(
                        TransactionType::$name,
                        input,
                    )?),
                    None => None,
                };
                Ok($name {
                    common,
                    transaction_type: TransactionType::$name,
                    $($field: $crate::models::required::FieldSlot::from_option(self.$field),)*
                })
            }
        }
    };
}
