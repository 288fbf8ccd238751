//! DepositPreauth.

use super::flags::NoFlags;
use super::validation::{Validate, ValidationErrors};
use super::TransactionModel;

define_transaction! {
    /// Preauthorizes an account to send payments to this one (when Deposit
    /// Authorization is on), or revokes that preauthorization.
    pub struct DepositPreauth, builder DepositPreauthBuilder, flags NoFlags {
        /// Account to preauthorize.
        authorize: optional String => "Authorize",
        /// Account whose preauthorization is revoked.
        unauthorize: optional String => "Unauthorize",
    }
}

impl Validate for DepositPreauth {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        match (self.authorize(), self.unauthorize()) {
            (None, None) | (Some(_), Some(_)) => {
                errors.insert(
                    "authorize",
                    "Exactly one of `authorize` and `unauthorize` must be set.",
                );
            }
            (Some(target), None) | (None, Some(target)) => {
                if self.account() == Some(target.as_str()) {
                    errors.insert("authorize", "An account cannot preauthorize itself.");
                }
            }
        }
        errors
    }
}
