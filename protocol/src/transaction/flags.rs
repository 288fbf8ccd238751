//! Flag registries.
//!
//! Each variant that has switches gets a closed enum of its flags. A flag
//! only means something for the variant(s) its registry applies to: the
//! same bit (`0x00020000`) is `tfPartialPayment` on a Payment and
//! `tfImmediateOrCancel` on an OfferCreate. `tfFullyCanonicalSig` is global.
//!
//! Flags are normalized to a `u32` mask when a transaction is built, so a
//! transaction constructed from names and one constructed from the
//! equivalent mask are indistinguishable afterwards.

use std::fmt;

use serde_json::Value;

use super::types::TransactionType;
use crate::error::{ConstructionError, DeserializationError};
use crate::models::wire::WireValue;

/// A variant-scoped bit flag.
pub trait TransactionFlag: Copy + Eq + fmt::Debug + 'static {
    /// Every flag in the registry.
    const ALL: &'static [Self];

    /// The flag's bit mask.
    fn bits(self) -> u32;

    /// The flag's ledger name, e.g. `tfPartialPayment`.
    fn name(self) -> &'static str;

    /// Looks a flag up by its ledger name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|flag| flag.name() == name)
    }

    /// Whether the registry means anything for `tx_type`.
    fn applies_to(tx_type: TransactionType) -> bool;
}

macro_rules! transaction_flags {
    (
        $(#[$meta:meta])*
        pub enum $name:ident for [$($ty:ident),+] {
            $($(#[$vmeta:meta])* $variant:ident = ($wire:literal, $bits:expr),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl TransactionFlag for $name {
            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn bits(self) -> u32 {
                match self {
                    $($name::$variant => $bits,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            fn applies_to(tx_type: TransactionType) -> bool {
                matches!(tx_type, $(TransactionType::$ty)|+)
            }
        }

        impl From<$name> for FlagsInput {
            fn from(flag: $name) -> Self {
                FlagsInput::Mask(flag.bits())
            }
        }

        impl From<Vec<$name>> for FlagsInput {
            fn from(flags: Vec<$name>) -> Self {
                FlagsInput::Mask(flags.iter().fold(0, |mask, flag| mask | flag.bits()))
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Registries
// ---------------------------------------------------------------------------

transaction_flags! {
    /// Flags for [`Payment`](super::Payment).
    pub enum PaymentFlag for [Payment] {
        /// Do not use the default path; only use the supplied paths.
        NoDirectRipple = ("tfNoDirectRipple", 0x0001_0000),
        /// Deliver as much as possible up to `amount` instead of failing.
        PartialPayment = ("tfPartialPayment", 0x0002_0000),
        /// Only take paths at or better than the `amount`/`send_max` ratio.
        LimitQuality = ("tfLimitQuality", 0x0004_0000),
    }
}

transaction_flags! {
    /// Flags for [`OfferCreate`](super::OfferCreate).
    pub enum OfferCreateFlag for [OfferCreate] {
        Passive = ("tfPassive", 0x0001_0000),
        ImmediateOrCancel = ("tfImmediateOrCancel", 0x0002_0000),
        FillOrKill = ("tfFillOrKill", 0x0004_0000),
        Sell = ("tfSell", 0x0008_0000),
    }
}

transaction_flags! {
    /// Flags for [`PaymentChannelClaim`](super::PaymentChannelClaim).
    pub enum PaymentChannelClaimFlag for [PaymentChannelClaim] {
        /// Clear the channel's expiration time.
        Renew = ("tfRenew", 0x0001_0000),
        /// Request the channel be closed.
        Close = ("tfClose", 0x0002_0000),
    }
}

transaction_flags! {
    /// Flags for [`TrustSet`](super::TrustSet).
    pub enum TrustSetFlag for [TrustSet] {
        SetfAuth = ("tfSetfAuth", 0x0001_0000),
        SetNoRipple = ("tfSetNoRipple", 0x0002_0000),
        ClearNoRipple = ("tfClearNoRipple", 0x0004_0000),
        SetFreeze = ("tfSetFreeze", 0x0010_0000),
        ClearFreeze = ("tfClearFreeze", 0x0020_0000),
    }
}

transaction_flags! {
    /// Flags for [`AccountSet`](super::AccountSet). Most of these have an
    /// `asf` counterpart in [`AccountSetAsfFlag`], which is preferred.
    pub enum AccountSetFlag for [AccountSet] {
        RequireDestTag = ("tfRequireDestTag", 0x0001_0000),
        OptionalDestTag = ("tfOptionalDestTag", 0x0002_0000),
        RequireAuth = ("tfRequireAuth", 0x0004_0000),
        OptionalAuth = ("tfOptionalAuth", 0x0008_0000),
        DisallowXrp = ("tfDisallowXRP", 0x0010_0000),
        AllowXrp = ("tfAllowXRP", 0x0020_0000),
    }
}

/// Flags valid on every transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalFlag {
    /// Require a fully-canonical signature.
    FullyCanonicalSig,
}

impl TransactionFlag for GlobalFlag {
    const ALL: &'static [Self] = &[GlobalFlag::FullyCanonicalSig];

    fn bits(self) -> u32 {
        match self {
            GlobalFlag::FullyCanonicalSig => 0x8000_0000,
        }
    }

    fn name(self) -> &'static str {
        match self {
            GlobalFlag::FullyCanonicalSig => "tfFullyCanonicalSig",
        }
    }

    fn applies_to(_: TransactionType) -> bool {
        true
    }
}

impl From<GlobalFlag> for FlagsInput {
    fn from(flag: GlobalFlag) -> Self {
        FlagsInput::Mask(flag.bits())
    }
}

/// The empty registry, for variants without type-specific flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoFlags {}

impl TransactionFlag for NoFlags {
    const ALL: &'static [Self] = &[];

    fn bits(self) -> u32 {
        match self {}
    }

    fn name(self) -> &'static str {
        match self {}
    }

    fn applies_to(_: TransactionType) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// AccountSetAsfFlag
// ---------------------------------------------------------------------------

/// Account settings toggled through AccountSet's `set_flag`/`clear_flag`.
/// These are plain values on the wire, not bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountSetAsfFlag {
    RequireDest = 1,
    RequireAuth = 2,
    DisallowXrp = 3,
    DisableMaster = 4,
    AccountTxnId = 5,
    NoFreeze = 6,
    GlobalFreeze = 7,
    DefaultRipple = 8,
    DepositAuth = 9,
}

impl AccountSetAsfFlag {
    pub const ALL: &'static [Self] = &[
        AccountSetAsfFlag::RequireDest,
        AccountSetAsfFlag::RequireAuth,
        AccountSetAsfFlag::DisallowXrp,
        AccountSetAsfFlag::DisableMaster,
        AccountSetAsfFlag::AccountTxnId,
        AccountSetAsfFlag::NoFreeze,
        AccountSetAsfFlag::GlobalFreeze,
        AccountSetAsfFlag::DefaultRipple,
        AccountSetAsfFlag::DepositAuth,
    ];

    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|flag| flag.value() == value)
    }

    pub fn name(self) -> &'static str {
        match self {
            AccountSetAsfFlag::RequireDest => "asfRequireDest",
            AccountSetAsfFlag::RequireAuth => "asfRequireAuth",
            AccountSetAsfFlag::DisallowXrp => "asfDisallowXRP",
            AccountSetAsfFlag::DisableMaster => "asfDisableMaster",
            AccountSetAsfFlag::AccountTxnId => "asfAccountTxnID",
            AccountSetAsfFlag::NoFreeze => "asfNoFreeze",
            AccountSetAsfFlag::GlobalFreeze => "asfGlobalFreeze",
            AccountSetAsfFlag::DefaultRipple => "asfDefaultRipple",
            AccountSetAsfFlag::DepositAuth => "asfDepositAuth",
        }
    }
}

impl WireValue for AccountSetAsfFlag {
    fn to_wire(&self) -> Value {
        Value::from(self.value())
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self, DeserializationError> {
        let raw = u32::from_wire(field, value)?;
        Self::from_value(raw).ok_or_else(|| {
            DeserializationError::invalid(field, value, format!("unknown account setting {}", raw))
        })
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Flags as a caller may supply them: a raw mask or a list of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagsInput {
    Mask(u32),
    Names(Vec<String>),
}

impl From<u32> for FlagsInput {
    fn from(mask: u32) -> Self {
        FlagsInput::Mask(mask)
    }
}

impl From<Vec<String>> for FlagsInput {
    fn from(names: Vec<String>) -> Self {
        FlagsInput::Names(names)
    }
}

impl From<Vec<&str>> for FlagsInput {
    fn from(names: Vec<&str>) -> Self {
        FlagsInput::Names(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FlagsInput {
    fn from(names: [&str; N]) -> Self {
        FlagsInput::Names(names.iter().map(|name| name.to_string()).collect())
    }
}

/// Resolves a flag name against registry `F`, then the global flags.
pub fn resolve_flag_name<F: TransactionFlag>(name: &str) -> Option<u32> {
    F::from_name(name)
        .map(F::bits)
        .or_else(|| GlobalFlag::from_name(name).map(GlobalFlag::bits))
}

/// Folds `input` into a mask for a variant whose registry is `F`.
pub fn normalize_flags<F: TransactionFlag>(
    tx_type: TransactionType,
    input: &FlagsInput,
) -> Result<u32, ConstructionError> {
    match input {
        FlagsInput::Mask(mask) => Ok(*mask),
        FlagsInput::Names(names) => names.iter().try_fold(0u32, |mask, name| {
            resolve_flag_name::<F>(name)
                .map(|bits| mask | bits)
                .ok_or_else(|| ConstructionError::UnknownFlag {
                    transaction_type: tx_type,
                    flag: name.clone(),
                })
        }),
    }
}

/// Every bit that registry `F` (plus the global flags) defines.
pub fn allowed_mask<F: TransactionFlag>() -> u32 {
    registry_entries::<F>()
        .iter()
        .fold(0, |mask, (_, bits)| mask | bits)
}

/// Names of the flags set in `mask`, type-specific flags first.
pub fn decode_flags<F: TransactionFlag>(mask: u32) -> Vec<&'static str> {
    registry_entries::<F>()
        .into_iter()
        .filter(|(_, bits)| mask & bits == *bits)
        .map(|(name, _)| name)
        .collect()
}

/// `(name, bits)` for registry `F` followed by the global flags.
pub fn registry_entries<F: TransactionFlag>() -> Vec<(&'static str, u32)> {
    F::ALL
        .iter()
        .map(|flag| (flag.name(), flag.bits()))
        .chain(GlobalFlag::ALL.iter().map(|flag| (flag.name(), flag.bits())))
        .collect()
}
