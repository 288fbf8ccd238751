//! # Protocol Constants
//!
//! Every protocol-level number the models check against lives here. These
//! values are fixed by the XRP Ledger itself, not by this crate, so changing
//! one without a matching amendment on the network only makes us reject
//! transactions the ledger would accept (or worse, the other way around).

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// The native currency code. Never valid inside an issued-currency amount.
pub const XRP_CURRENCY_CODE: &str = "XRP";

/// One XRP is one million drops. Drops are the only unit on the wire.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// Number of decimal places in an XRP value.
pub const XRP_DECIMALS: usize = 6;

/// Total XRP supply expressed in drops (100 billion XRP). No amount, fee or
/// balance may exceed it.
pub const MAX_DROPS: u64 = 100_000_000_000 * DROPS_PER_XRP;

/// Length of a standard currency code (`USD`, `EUR`, ...).
pub const ISO_CURRENCY_CODE_LENGTH: usize = 3;

/// Length of a non-standard currency code, as hex.
pub const HEX_CURRENCY_CODE_LENGTH: usize = 40;

/// Length of a 256-bit hash rendered as hex (`CheckID`, `Channel`, ...).
pub const HASH256_HEX_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Seconds between the Unix epoch and the Ripple epoch (2000-01-01T00:00:00Z).
/// Every time field on the ledger counts from the latter.
pub const RIPPLE_EPOCH_OFFSET: i64 = 946_684_800;

// ---------------------------------------------------------------------------
// Network Identifiers
// ---------------------------------------------------------------------------

/// Mainnet.
pub const NETWORK_ID_MAINNET: u32 = 0;

/// The public testnet.
pub const NETWORK_ID_TESTNET: u32 = 1;

/// The public devnet. Reset without notice.
pub const NETWORK_ID_DEVNET: u32 = 2;

/// Networks with an id above this value must carry `NetworkID` on every
/// transaction; networks at or below it must omit the field.
pub const NETWORK_ID_REQUIRED_ABOVE: u32 = 1024;

// ---------------------------------------------------------------------------
// Field Bounds
// ---------------------------------------------------------------------------

/// `TickSize` of zero disables the setting; otherwise it must sit in
/// `MIN_TICK_SIZE..=MAX_TICK_SIZE`.
pub const DISABLE_TICK_SIZE: u8 = 0;
pub const MIN_TICK_SIZE: u8 = 3;
pub const MAX_TICK_SIZE: u8 = 15;

/// `TransferRate` of zero clears the fee; otherwise it is a billionths
/// multiplier between 1.0 and 2.0.
pub const DISABLE_TRANSFER_RATE: u32 = 0;
pub const MIN_TRANSFER_RATE: u32 = 1_000_000_000;
pub const MAX_TRANSFER_RATE: u32 = 2_000_000_000;

/// A `TicketCreate` may mint between 1 and 250 tickets at once.
pub const MIN_TICKET_COUNT: u32 = 1;
pub const MAX_TICKET_COUNT: u32 = 250;

/// A signer list holds between 1 and 8 entries.
pub const MIN_SIGNER_ENTRIES: usize = 1;
pub const MAX_SIGNER_ENTRIES: usize = 8;

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// Returns a friendly name for a network ID, mainly for logging.
pub fn network_name(network_id: u32) -> String {
    match network_id {
        NETWORK_ID_MAINNET => "mainnet".to_string(),
        NETWORK_ID_TESTNET => "testnet".to_string(),
        NETWORK_ID_DEVNET => "devnet".to_string(),
        other => format!("network({})", other),
    }
}

/// Returns `true` if transactions for `network_id` must carry `NetworkID`.
pub fn network_id_required(network_id: u32) -> bool {
    network_id > NETWORK_ID_REQUIRED_ABOVE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_drops_matches_total_supply() {
        assert_eq!(MAX_DROPS, 100_000_000_000_000_000);
        assert_eq!(10u64.pow(XRP_DECIMALS as u32), DROPS_PER_XRP);
    }

    #[test]
    fn test_network_name_formatting() {
        assert_eq!(network_name(NETWORK_ID_MAINNET), "mainnet");
        assert_eq!(network_name(NETWORK_ID_DEVNET), "devnet");
        assert_eq!(network_name(21_338), "network(21338)");
    }

    #[test]
    fn test_network_id_requirement_boundary() {
        assert!(!network_id_required(NETWORK_ID_MAINNET));
        assert!(!network_id_required(1024));
        assert!(network_id_required(1025));
    }

    #[test]
    fn test_bounds_sanity() {
        assert!(MIN_TICK_SIZE < MAX_TICK_SIZE);
        assert!(MIN_TRANSFER_RATE < MAX_TRANSFER_RATE);
        assert!(MIN_TICKET_COUNT <= MAX_TICKET_COUNT);
        assert!(MIN_SIGNER_ENTRIES <= MAX_SIGNER_ENTRIES);
    }
}
