//! # Client Interfaces
//!
//! The collaborators around the core, as traits: whatever signs a
//! transaction and whatever submits it to a ledger. The crate ships no
//! implementations; wallets and transports plug in here.
//!
//! [`sign_transaction`] and [`submit_transaction`] are the glue. Both refuse
//! to hand an invalid transaction to a collaborator.

pub mod error;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::transaction::Transaction;

pub use error::{ClientError, RequestFailure};

/// What a signer hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerOutput {
    /// Hex signature over the transaction.
    pub txn_signature: String,
    /// Hex public key the signature verifies against.
    pub signing_public_key: String,
    /// The binary-encoded signed transaction, if the signer produces one.
    pub tx_blob: Option<String>,
}

/// Signs the canonical wire form of a transaction.
pub trait TransactionSigner {
    fn sign(&self, unsigned: &Map<String, Value>) -> Result<SignerOutput, ClientError>;
}

/// Sends a signed transaction blob to a ledger and returns the RPC result.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, tx_blob: &str) -> Result<Value, ClientError>;
}

/// Validates `tx`, signs its wire form and returns a copy carrying the
/// signature. The signer is never called for an invalid transaction.
pub fn sign_transaction<S: TransactionSigner + ?Sized>(
    tx: &Transaction,
    signer: &S,
) -> Result<(Transaction, SignerOutput), ClientError> {
    tx.get_errors().into_result()?;

    let output = signer.sign(&tx.to_wire())?;
    debug!(
        transaction_type = %tx.transaction_type(),
        account = tx.account().unwrap_or_default(),
        "transaction signed"
    );
    let signed = tx.with_signature(
        output.txn_signature.clone(),
        output.signing_public_key.clone(),
    );
    Ok((signed, output))
}

/// Submits a signed blob. An RPC result carrying `error` becomes
/// [`ClientError::Request`].
pub async fn submit_transaction<T: Submitter + ?Sized>(
    tx_blob: &str,
    submitter: &T,
) -> Result<Value, ClientError> {
    let result = submitter.submit(tx_blob).await?;
    if let Some(failure) = RequestFailure::from_result(&result) {
        warn!(error = %failure.error, message = %failure.error_message, "submission rejected");
        return Err(failure.into());
    }
    let engine_result = result
        .get("engine_result")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    debug!(engine_result, "transaction submitted");
    Ok(result)
}
