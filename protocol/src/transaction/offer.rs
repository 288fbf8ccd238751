//! Offers on the decentralized exchange.

use super::flags::{NoFlags, OfferCreateFlag};
use super::validation::{Validate, ValidationErrors};
use super::TransactionModel;
use crate::models::Amount;

define_transaction! {
    /// Places an offer to exchange `taker_pays` for `taker_gets`.
    pub struct OfferCreate, builder OfferCreateBuilder, flags OfferCreateFlag {
        /// What the offer creator gives up.
        taker_gets: required Amount => "TakerGets",
        /// What the offer creator wants in return.
        taker_pays: required Amount => "TakerPays",
        expiration: optional u32 => "Expiration",
        /// An existing offer to cancel first.
        offer_sequence: optional u32 => "OfferSequence",
    }
}

impl Validate for OfferCreate {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if self.has_flag(OfferCreateFlag::ImmediateOrCancel)
            && self.has_flag(OfferCreateFlag::FillOrKill)
        {
            errors.insert(
                "flags",
                "`tfImmediateOrCancel` and `tfFillOrKill` cannot both be set.",
            );
        }
        errors
    }
}

define_transaction! {
    /// Removes an offer from the exchange.
    pub struct OfferCancel, builder OfferCancelBuilder, flags NoFlags {
        /// Sequence number of the OfferCreate to cancel.
        offer_sequence: required u32 => "OfferSequence",
    }
}

impl Validate for OfferCancel {}
