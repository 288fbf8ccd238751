//! TicketCreate.

use super::flags::NoFlags;
use super::validation::{Validate, ValidationErrors};
use super::TransactionModel;
use crate::config::{MAX_TICKET_COUNT, MIN_TICKET_COUNT};

define_transaction! {
    /// Sets aside one or more sequence numbers as tickets.
    pub struct TicketCreate, builder TicketCreateBuilder, flags NoFlags {
        /// How many tickets to create.
        ticket_count: required u32 => "TicketCount",
    }
}

impl Validate for TicketCreate {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if let Some(count) = self.ticket_count() {
            if !(MIN_TICKET_COUNT..=MAX_TICKET_COUNT).contains(count) {
                errors.insert(
                    "ticket_count",
                    format!(
                        "`ticket_count` must be between {} and {}.",
                        MIN_TICKET_COUNT, MAX_TICKET_COUNT
                    ),
                );
            }
        }
        errors
    }
}
