//! Payment.

use super::flags::PaymentFlag;
use super::validation::{Validate, ValidationErrors};
use super::TransactionModel;
use crate::models::{Amount, Hash256, Path, PathStep};

define_transaction! {
    /// Transfers value from one account to another: XRP directly, or issued
    /// currency (possibly converted along the way) through paths.
    pub struct Payment, builder PaymentBuilder, flags PaymentFlag {
        /// The amount to deliver. With `tfPartialPayment` this is a maximum.
        amount: required Amount => "Amount",
        /// The receiving account.
        destination: required String => "Destination",
        destination_tag: optional u32 => "DestinationTag",
        /// An arbitrary 256-bit identifier for the payment.
        invoice_id: optional Hash256 => "InvoiceID",
        /// Cross-currency paths. Never allowed for XRP-to-XRP payments.
        paths: optional Vec<Path> => "Paths",
        /// The most the sender is willing to spend, including fees.
        send_max: optional Amount => "SendMax",
        /// The least a partial payment may deliver.
        deliver_min: optional Amount => "DeliverMin",
    }
}

impl Payment {
    fn is_to_self(&self) -> bool {
        match (self.account(), self.destination()) {
            (Some(account), Some(destination)) => account == destination,
            _ => false,
        }
    }

    fn has_empty_path_step(&self) -> bool {
        self.paths
            .iter()
            .flatten()
            .flatten()
            .any(PathStep::is_empty)
    }

    /// The payment rules, in precedence order. Later rules assume every
    /// earlier condition was false, so only the first match is reported.
    fn payment_error(&self) -> Option<(&'static str, &'static str)> {
        let xrp_amount = self.amount().map_or(false, Amount::is_xrp);
        let partial = self.has_flag(PaymentFlag::PartialPayment);

        if xrp_amount && self.send_max.is_none() {
            if self.paths.is_some() {
                return Some(("paths", "An XRP-to-XRP payment cannot contain paths."));
            }
            if self.is_to_self() {
                return Some((
                    "destination",
                    "An XRP payment transaction cannot have the same sender and destination.",
                ));
            }
            return None;
        }
        if partial && self.send_max.is_none() {
            return Some(("send_max", "A partial payment must have a `send_max` value."));
        }
        if self.deliver_min.is_some() && !partial {
            return Some((
                "deliver_min",
                "A non-partial payment cannot have a `deliver_min` field.",
            ));
        }
        if xrp_amount && self.send_max.as_ref().map_or(false, Amount::is_xrp) && !partial {
            return Some((
                "send_max",
                "A non-partial payment cannot have both `amount` and `send_max` be XRP.",
            ));
        }
        if self.is_to_self() && self.send_max.is_none() {
            return Some(("send_max", "A currency conversion requires a `send_max` value."));
        }
        None
    }
}

impl Validate for Payment {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if self.has_empty_path_step() {
            errors.insert(
                "paths",
                "Every path step needs an `account`, a `currency` or an `issuer`.",
            );
        }
        if let Some((field, message)) = self.payment_error() {
            errors.insert(field, message);
        }
        errors
    }
}
