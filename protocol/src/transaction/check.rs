//! Checks: deferred payments the destination cashes later.

use super::flags::NoFlags;
use super::validation::{Validate, ValidationErrors};
use super::TransactionModel;
use crate::models::{Amount, Hash256};

define_transaction! {
    /// Creates a check. The sender of this transaction is the check's sender.
    pub struct CheckCreate, builder CheckCreateBuilder, flags NoFlags {
        /// The account that can cash the check.
        destination: required String => "Destination",
        /// The most the check may debit the sender, including transfer fees.
        send_max: required Amount => "SendMax",
        destination_tag: optional u32 => "DestinationTag",
        /// Ripple-epoch seconds after which the check can no longer be cashed.
        expiration: optional u32 => "Expiration",
        invoice_id: optional Hash256 => "InvoiceID",
    }
}

impl Validate for CheckCreate {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if self.account().is_some() && self.account() == self.destination().map(String::as_str) {
            errors.insert("destination", "A check cannot be written to its own sender.");
        }
        errors
    }
}

define_transaction! {
    /// Redeems a check, for an exact amount or for at least `deliver_min`.
    pub struct CheckCash, builder CheckCashBuilder, flags NoFlags {
        /// ID of the check ledger object to cash.
        check_id: required Hash256 => "CheckID",
        /// Cash exactly this much.
        amount: optional Amount => "Amount",
        /// Cash as much as possible, but no less than this.
        deliver_min: optional Amount => "DeliverMin",
    }
}

impl Validate for CheckCash {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if self.amount.is_some() == self.deliver_min.is_some() {
            errors.insert(
                "amount",
                "Exactly one of `amount` and `deliver_min` must be set.",
            );
        }
        errors
    }
}

define_transaction! {
    /// Cancels an unredeemed check.
    pub struct CheckCancel, builder CheckCancelBuilder, flags NoFlags {
        check_id: required Hash256 => "CheckID",
    }
}

impl Validate for CheckCancel {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const ALICE: &str = "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn";
    const BOB: &str = "ra5nK24KXen9AHvsdFTKHSANinZseWnPcX";
    const CHECK_ID: &str = "838766BA2B995C00744175F69A1B11E32C3DBC40E64801A4056FCBD657F57334";

    fn check_id() -> Hash256 {
        CHECK_ID.parse().unwrap()
    }

    #[test]
    fn check_create_to_self_is_invalid() {
        let builder = CheckCreate::builder()
            .account(ALICE)
            .destination(BOB)
            .send_max(Amount::xrp(100_000_000))
            .expiration(570_113_521);
        assert!(builder.clone().build().unwrap().is_valid());

        let errors = builder.destination(ALICE).build().unwrap().get_errors();
        assert!(errors.contains("destination"));
    }

    #[test_case(Some(Amount::xrp(100)), None, true ; "exact amount")]
    #[test_case(None, Some(Amount::xrp(100)), true ; "minimum amount")]
    #[test_case(None, None, false ; "neither")]
    #[test_case(Some(Amount::xrp(100)), Some(Amount::xrp(90)), false ; "both")]
    fn check_cash_needs_exactly_one_amount(
        amount: Option<Amount>,
        deliver_min: Option<Amount>,
        valid: bool,
    ) {
        let mut builder = CheckCash::builder().account(BOB).check_id(check_id());
        if let Some(amount) = amount {
            builder = builder.amount(amount);
        }
        if let Some(min) = deliver_min {
            builder = builder.deliver_min(min);
        }
        let errors = builder.build().unwrap().get_errors();
        assert_eq!(errors.is_empty(), valid);
        assert_eq!(errors.contains("amount"), !valid);
    }

    #[test]
    fn check_cancel_needs_check_id() {
        let missing = CheckCancel::builder().account(ALICE).build().unwrap();
        assert_eq!(
            missing.get_errors().get("check_id"),
            Some("`check_id` is required.")
        );
        let tx = missing.to_builder().check_id(check_id()).build().unwrap();
        assert!(tx.is_valid());
        assert_eq!(tx.check_id().map(Hash256::as_str), Some(CHECK_ID));
    }
}
