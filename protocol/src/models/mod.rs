//! # Models
//!
//! The value types transactions are made of, each with its canonical JSON
//! wire form.
//!
//! ```text
//! required.rs — Required<T>, the "never supplied" sentinel
//! amounts.rs  — Drops, IssuedCurrencyAmount, Amount
//! hash.rs     — Hash256
//! memo.rs     — Memo, Signer, SignerEntry (wrapped array elements)
//! path.rs     — PathStep, Path
//! wire.rs     — WireValue codec trait and the closed-schema field reader
//! ```

pub mod amounts;
pub mod hash;
pub mod memo;
pub mod path;
pub mod required;
pub mod wire;

pub use amounts::{Amount, AmountError, Drops, IssuedCurrencyAmount};
pub use hash::{Hash256, HashError};
pub use memo::{Memo, Signer, SignerEntry};
pub use path::{Path, PathStep};
pub use required::{IntoFieldValue, Required};
pub use wire::WireValue;
