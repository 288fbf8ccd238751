//! Account-level transactions: settings, regular key, deletion.

use super::flags::{AccountSetAsfFlag, AccountSetFlag, NoFlags};
use super::validation::{Validate, ValidationErrors};
use super::TransactionModel;
use crate::config::{
    DISABLE_TICK_SIZE, DISABLE_TRANSFER_RATE, MAX_TICK_SIZE, MAX_TRANSFER_RATE, MIN_TICK_SIZE,
    MIN_TRANSFER_RATE,
};

fn same_as_account(account: Option<&str>, other: Option<&String>) -> bool {
    match (account, other) {
        (Some(account), Some(other)) => account == other,
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// AccountSet
// ---------------------------------------------------------------------------

define_transaction! {
    /// Modifies the properties of an account in the ledger.
    pub struct AccountSet, builder AccountSetBuilder, flags AccountSetFlag {
        /// Setting to disable.
        clear_flag: optional AccountSetAsfFlag => "ClearFlag",
        /// Hex-encoded lowercase domain name.
        domain: optional String => "Domain",
        /// Hex MD5 hash of an email address, for avatars.
        email_hash: optional String => "EmailHash",
        /// Hex public key for sending encrypted messages to this account.
        message_key: optional String => "MessageKey",
        /// Setting to enable.
        set_flag: optional AccountSetAsfFlag => "SetFlag",
        /// Fee charged on transfers of this account's issued currencies, in
        /// billionths (1_000_000_000 means no fee).
        transfer_rate: optional u32 => "TransferRate",
        /// Tick size for offers involving this account's currencies.
        tick_size: optional u8 => "TickSize",
    }
}

impl Validate for AccountSet {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();

        if let Some(&tick_size) = self.tick_size() {
            if tick_size != DISABLE_TICK_SIZE
                && !(MIN_TICK_SIZE..=MAX_TICK_SIZE).contains(&tick_size)
            {
                errors.insert(
                    "tick_size",
                    format!(
                        "`tick_size` must be {} or between {} and {}.",
                        DISABLE_TICK_SIZE, MIN_TICK_SIZE, MAX_TICK_SIZE
                    ),
                );
            }
        }
        if let Some(&rate) = self.transfer_rate() {
            if rate != DISABLE_TRANSFER_RATE
                && !(MIN_TRANSFER_RATE..=MAX_TRANSFER_RATE).contains(&rate)
            {
                errors.insert(
                    "transfer_rate",
                    format!(
                        "`transfer_rate` must be {} or between {} and {}.",
                        DISABLE_TRANSFER_RATE, MIN_TRANSFER_RATE, MAX_TRANSFER_RATE
                    ),
                );
            }
        }
        if let Some(domain) = self.domain() {
            if domain.to_lowercase() != *domain {
                errors.insert("domain", "`domain` must be lowercase.");
            }
        }
        if self.clear_flag.is_some() && self.clear_flag == self.set_flag {
            errors.insert("clear_flag", "`clear_flag` must not equal `set_flag`.");
        }
        errors
    }
}

// ---------------------------------------------------------------------------
// SetRegularKey
// ---------------------------------------------------------------------------

define_transaction! {
    /// Assigns, changes or (when `regular_key` is absent) removes the
    /// account's regular key pair.
    pub struct SetRegularKey, builder SetRegularKeyBuilder, flags NoFlags {
        /// Address of the new regular key.
        regular_key: optional String => "RegularKey",
    }
}

impl Validate for SetRegularKey {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if same_as_account(self.account(), self.regular_key()) {
            errors.insert(
                "regular_key",
                "The regular key cannot be the account's own master key.",
            );
        }
        errors
    }
}

// ---------------------------------------------------------------------------
// AccountDelete
// ---------------------------------------------------------------------------

define_transaction! {
    /// Deletes the sending account, delivering its remaining XRP.
    pub struct AccountDelete, builder AccountDeleteBuilder, flags NoFlags {
        /// The account that receives the remaining XRP.
        destination: required String => "Destination",
        destination_tag: optional u32 => "DestinationTag",
    }
}

impl Validate for AccountDelete {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if same_as_account(self.account(), self.destination()) {
            errors.insert(
                "destination",
                "An account cannot be deleted into itself.",
            );
        }
        errors
    }
}
