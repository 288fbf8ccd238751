//! The transaction type tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Returned when a string names no known transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transaction type `{0}`")]
pub struct UnknownTransactionType(pub String);

macro_rules! transaction_types {
    ($($(#[$doc:meta])* $variant:ident,)*) => {
        /// Discriminant for the operation a transaction represents. The
        /// variant name is also the `TransactionType` string on the wire.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum TransactionType {
            $($(#[$doc])* $variant,)*
        }

        impl TransactionType {
            /// Every supported type, in alphabetical order.
            pub const ALL: &'static [TransactionType] = &[$(TransactionType::$variant,)*];

            /// The wire name of the type.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(TransactionType::$variant => stringify!($variant),)*
                }
            }
        }

        impl FromStr for TransactionType {
            type Err = UnknownTransactionType;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(TransactionType::$variant),)*
                    other => Err(UnknownTransactionType(other.to_string())),
                }
            }
        }
    };
}

transaction_types! {
    /// Delete the sending account, sending its remaining XRP to a destination.
    AccountDelete,
    /// Change account settings.
    AccountSet,
    /// Cancel an unredeemed check.
    CheckCancel,
    /// Redeem a check.
    CheckCash,
    /// Create a deferred payment the destination can cash later.
    CheckCreate,
    /// Preauthorize (or revoke) an account to send payments to this one.
    DepositPreauth,
    /// Return escrowed XRP to its sender.
    EscrowCancel,
    /// Lock XRP until a time or crypto-condition is met.
    EscrowCreate,
    /// Deliver escrowed XRP to its recipient.
    EscrowFinish,
    /// Withdraw an offer from the decentralized exchange.
    OfferCancel,
    /// Place an offer on the decentralized exchange.
    OfferCreate,
    /// Transfer value from one account to another.
    Payment,
    /// Claim XRP from a payment channel, adjust its expiration, or close it.
    PaymentChannelClaim,
    /// Open a unidirectional XRP payment channel.
    PaymentChannelCreate,
    /// Add XRP to an open payment channel.
    PaymentChannelFund,
    /// Assign, change or remove the account's regular key pair.
    SetRegularKey,
    /// Create, replace or remove the account's multi-signing list.
    SignerListSet,
    /// Set aside sequence numbers as tickets.
    TicketCreate,
    /// Create or modify a trust line.
    TrustSet,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
