//! Payment channels: unidirectional XRP streams settled off-ledger by
//! signed claims.

use super::flags::{NoFlags, PaymentChannelClaimFlag};
use super::validation::{Validate, ValidationErrors};
use super::TransactionModel;
use crate::models::{Amount, Hash256};

fn xrp_only(amount: Option<&Amount>) -> bool {
    amount.map_or(true, Amount::is_xrp)
}

define_transaction! {
    /// Opens a channel and funds it. The sender is the channel's source.
    pub struct PaymentChannelCreate, builder PaymentChannelCreateBuilder, flags NoFlags {
        /// XRP to set aside in the channel.
        amount: required Amount => "Amount",
        /// The account that can receive XRP from the channel.
        destination: required String => "Destination",
        /// Seconds the source must wait between requesting a close and closing.
        settle_delay: required u32 => "SettleDelay",
        /// Hex public key the source will sign claims with.
        public_key: required String => "PublicKey",
        /// Immutable Ripple-epoch expiration of the channel.
        cancel_after: optional u32 => "CancelAfter",
        destination_tag: optional u32 => "DestinationTag",
    }
}

impl Validate for PaymentChannelCreate {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if !xrp_only(self.amount()) {
            errors.insert("amount", "A payment channel can only hold XRP.");
        } else if self.account().is_some()
            && self.account() == self.destination().map(String::as_str)
        {
            errors.insert(
                "destination",
                "A payment channel cannot have the same source and destination.",
            );
        }
        errors
    }
}

define_transaction! {
    /// Adds XRP to an open channel and optionally extends its expiration.
    pub struct PaymentChannelFund, builder PaymentChannelFundBuilder, flags NoFlags {
        /// ID of the channel to fund.
        channel: required Hash256 => "Channel",
        amount: required Amount => "Amount",
        /// New Ripple-epoch expiration for the channel.
        expiration: optional u32 => "Expiration",
    }
}

impl Validate for PaymentChannelFund {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if !xrp_only(self.amount()) {
            errors.insert("amount", "A payment channel can only hold XRP.");
        }
        errors
    }
}

define_transaction! {
    /// Claims XRP from a channel, adjusts its expiration, or closes it.
    pub struct PaymentChannelClaim, builder PaymentChannelClaimBuilder, flags PaymentChannelClaimFlag {
        channel: required Hash256 => "Channel",
        /// Total XRP delivered by the channel after this claim.
        balance: optional Amount => "Balance",
        /// The amount authorized by `signature`.
        amount: optional Amount => "Amount",
        /// Hex signature of the claim.
        signature: optional String => "Signature",
        /// Hex public key that signed the claim.
        public_key: optional String => "PublicKey",
    }
}

impl Validate for PaymentChannelClaim {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if self.has_flag(PaymentChannelClaimFlag::Renew) && self.has_flag(PaymentChannelClaimFlag::Close)
        {
            errors.insert("flags", "`tfRenew` and `tfClose` cannot both be set.");
        } else if self.signature.is_some()
            && (self.public_key.is_none() || self.balance.is_none())
        {
            errors.insert(
                "signature",
                "A claim `signature` requires `public_key` and `balance`.",
            );
        }
        errors
    }
}
