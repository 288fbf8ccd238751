//! TrustSet.

use super::flags::TrustSetFlag;
use super::validation::{Validate, ValidationErrors};
use super::TransactionModel;
use crate::models::Amount;

define_transaction! {
    /// Creates or modifies a trust line to an issuer.
    pub struct TrustSet, builder TrustSetBuilder, flags TrustSetFlag {
        /// The currency, issuer and maximum amount to trust.
        limit_amount: required Amount => "LimitAmount",
        /// Incoming balances are valued at this ratio per 1_000_000_000.
        quality_in: optional u32 => "QualityIn",
        /// Outgoing balances are valued at this ratio per 1_000_000_000.
        quality_out: optional u32 => "QualityOut",
    }
}

impl Validate for TrustSet {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        match self.limit_amount() {
            Some(Amount::Xrp(_)) => {
                errors.insert("limit_amount", "A trust line cannot be set for XRP.");
            }
            Some(Amount::Issued(issued)) if self.account() == Some(issued.issuer()) => {
                errors.insert("limit_amount", "An account cannot trust itself.");
            }
            _ => {}
        }
        errors
    }
}
