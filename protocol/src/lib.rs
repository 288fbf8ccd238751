// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # XRPL Models — Core Library
//!
//! Typed XRP Ledger transactions. Every transaction kind the ledger speaks
//! (payments, escrows, checks, payment channels, offers, trust lines,
//! account settings, signer lists, tickets) is an immutable value with a
//! builder, a validator that reports problems per field, and a lossless
//! mapping to the canonical JSON the ledger understands.
//!
//! ## Architecture
//!
//! - **config** — Protocol constants: drops, epochs, network ids, field bounds.
//! - **models** — Amounts, hashes, memos, paths and the wire codec trait.
//! - **transaction** — The transaction kinds, flags, validation and codecs.
//! - **client** — Signer and submitter traits, and the glue around them.
//! - **utils** — Ripple-epoch time conversion.
//! - **error** — Construction and deserialization errors.
//!
//! ## Example
//!
//! ```
//! use xrpl_models::prelude::*;
//!
//! let payment = Payment::builder()
//!     .account("rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn")
//!     .destination("ra5nK24KXen9AHvsdFTKHSANinZseWnPcX")
//!     .amount(Amount::xrp(1_000_000))
//!     .build()
//!     .unwrap();
//! assert!(payment.is_valid());
//!
//! let wire = payment.to_wire();
//! assert_eq!(wire["TransactionType"], "Payment");
//! assert_eq!(Payment::from_wire(&wire).unwrap(), payment);
//! ```
//!
//! ## Design Philosophy
//!
//! 1. Invalid is an answer, not an exception: validation returns a mapping.
//! 2. The schema is closed. Unknown keys are errors, never dropped.
//! 3. No floating point anywhere near money.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transaction;
pub mod utils;

/// The types most callers need.
pub mod prelude {
    pub use crate::client::{
        sign_transaction, submit_transaction, ClientError, RequestFailure, SignerOutput,
        Submitter, TransactionSigner,
    };
    pub use crate::error::{ConstructionError, DeserializationError};
    pub use crate::models::{
        Amount, Drops, Hash256, IssuedCurrencyAmount, Memo, Path, PathStep, Required, Signer,
        SignerEntry, WireValue,
    };
    pub use crate::transaction::*;
}
