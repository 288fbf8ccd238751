//! Escrow: lock XRP until a time or crypto-condition, then finish or cancel.

use super::flags::NoFlags;
use super::validation::{Validate, ValidationErrors};
use super::TransactionModel;
use crate::models::Amount;

define_transaction! {
    /// Sequesters XRP until the escrow process either finishes or is canceled.
    pub struct EscrowCreate, builder EscrowCreateBuilder, flags NoFlags {
        /// XRP to escrow. Issued currencies cannot be escrowed.
        amount: required Amount => "Amount",
        /// The account that receives the XRP when the escrow finishes.
        destination: required String => "Destination",
        destination_tag: optional u32 => "DestinationTag",
        /// Ripple-epoch seconds after which the escrow expires.
        cancel_after: optional u32 => "CancelAfter",
        /// Ripple-epoch seconds after which the escrow can be finished.
        finish_after: optional u32 => "FinishAfter",
        /// Hex PREIMAGE-SHA-256 crypto-condition.
        condition: optional String => "Condition",
    }
}

impl Validate for EscrowCreate {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();

        if self.amount().map_or(false, |amount| !amount.is_xrp()) {
            errors.insert("amount", "An escrow can only hold XRP.");
        } else if self.finish_after.is_none() && self.condition.is_none() {
            errors.insert(
                "finish_after",
                "Either `finish_after` or `condition` must be specified.",
            );
        } else if let (Some(cancel), Some(finish)) = (self.cancel_after, self.finish_after) {
            if cancel <= finish {
                errors.insert(
                    "cancel_after",
                    "The `finish_after` time must be before the `cancel_after` time.",
                );
            }
        }
        errors
    }
}

define_transaction! {
    /// Delivers escrowed XRP to its recipient.
    pub struct EscrowFinish, builder EscrowFinishBuilder, flags NoFlags {
        /// The account that funded the escrow.
        owner: required String => "Owner",
        /// Sequence (or ticket) of the EscrowCreate that made the escrow.
        offer_sequence: required u32 => "OfferSequence",
        condition: optional String => "Condition",
        /// Hex PREIMAGE-SHA-256 fulfillment matching `condition`.
        fulfillment: optional String => "Fulfillment",
    }
}

impl Validate for EscrowFinish {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if self.condition.is_some() != self.fulfillment.is_some() {
            errors.insert(
                "fulfillment",
                "`condition` and `fulfillment` must be provided together.",
            );
        }
        errors
    }
}

define_transaction! {
    /// Returns escrowed XRP to its sender after the escrow has expired.
    pub struct EscrowCancel, builder EscrowCancelBuilder, flags NoFlags {
        owner: required String => "Owner",
        offer_sequence: required u32 => "OfferSequence",
    }
}

impl Validate for EscrowCancel {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const ALICE: &str = "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn";
    const BOB: &str = "ra5nK24KXen9AHvsdFTKHSANinZseWnPcX";
    const CONDITION: &str = "A0258020E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855810100";
    const FULFILLMENT: &str = "A0028000";

    fn escrow() -> EscrowCreateBuilder {
        EscrowCreate::builder()
            .account(ALICE)
            .destination(BOB)
            .amount(Amount::xrp(10_000))
    }

    #[test_case(escrow().finish_after(100), None ; "finish_after only")]
    #[test_case(escrow().condition(CONDITION), None ; "condition only")]
    #[test_case(escrow().finish_after(100).cancel_after(200), None ; "ordered window")]
    #[test_case(escrow(), Some("finish_after") ; "no release condition")]
    #[test_case(escrow().finish_after(200).cancel_after(200), Some("cancel_after") ; "equal window")]
    #[test_case(escrow().finish_after(300).cancel_after(200), Some("cancel_after") ; "inverted window")]
    fn escrow_create_rules(builder: EscrowCreateBuilder, expected: Option<&str>) {
        let errors = builder.build().unwrap().get_errors();
        match expected {
            None => assert!(errors.is_empty(), "unexpected errors: {}", errors),
            Some(field) => {
                assert!(errors.contains(field));
                assert_eq!(errors.len(), 1);
            }
        }
    }

    #[test]
    fn escrow_create_rejects_issued_currency_first() {
        let tx = escrow()
            .amount(Amount::issued("USD", BOB, "1").unwrap())
            .build()
            .unwrap();
        let errors = tx.get_errors();
        assert!(errors.contains("amount"));
        assert!(!errors.contains("finish_after"));
    }

    #[test_case(Some(CONDITION), Some(FULFILLMENT), true ; "both")]
    #[test_case(None, None, true ; "neither")]
    #[test_case(Some(CONDITION), None, false ; "condition without fulfillment")]
    #[test_case(None, Some(FULFILLMENT), false ; "fulfillment without condition")]
    fn escrow_finish_pairs_condition_and_fulfillment(
        condition: Option<&str>,
        fulfillment: Option<&str>,
        valid: bool,
    ) {
        let mut builder = EscrowFinish::builder()
            .account(BOB)
            .owner(ALICE)
            .offer_sequence(7);
        if let Some(condition) = condition {
            builder = builder.condition(condition);
        }
        if let Some(fulfillment) = fulfillment {
            builder = builder.fulfillment(fulfillment);
        }
        assert_eq!(builder.build().unwrap().is_valid(), valid);
    }

    #[test]
    fn escrow_cancel_requires_owner_and_sequence() {
        let errors = EscrowCancel::builder().account(ALICE).build().unwrap().get_errors();
        assert!(errors.contains("owner"));
        assert!(errors.contains("offer_sequence"));

        let tx = EscrowCancel::builder()
            .account(ALICE)
            .owner(ALICE)
            .offer_sequence(3)
            .build()
            .unwrap();
        assert!(tx.is_valid());
    }
}
