//! SignerListSet.

use std::collections::HashSet;

use super::flags::NoFlags;
use super::validation::{Validate, ValidationErrors};
use super::TransactionModel;
use crate::config::{MAX_SIGNER_ENTRIES, MIN_SIGNER_ENTRIES};
use crate::models::SignerEntry;

define_transaction! {
    /// Creates, replaces or (with a quorum of 0 and no entries) removes the
    /// account's multi-signing list.
    pub struct SignerListSet, builder SignerListSetBuilder, flags NoFlags {
        /// Combined signer weight needed to authorize a transaction.
        signer_quorum: required u32 => "SignerQuorum",
        signer_entries: optional Vec<SignerEntry> => "SignerEntries",
    }
}

impl SignerListSet {
    fn signer_list_error(&self) -> Option<(&'static str, String)> {
        let quorum = *self.signer_quorum()?;
        let entries = self.signer_entries();

        let entries = match (quorum, entries) {
            (0, None) => return None,
            (0, Some(_)) => {
                return Some((
                    "signer_entries",
                    "`signer_entries` must be omitted when deleting the signer list.".to_string(),
                ))
            }
            (_, None) => {
                return Some((
                    "signer_quorum",
                    "A non-zero `signer_quorum` requires `signer_entries`.".to_string(),
                ))
            }
            (_, Some(entries)) => entries,
        };

        if !(MIN_SIGNER_ENTRIES..=MAX_SIGNER_ENTRIES).contains(&entries.len()) {
            return Some((
                "signer_entries",
                format!(
                    "`signer_entries` must have between {} and {} entries.",
                    MIN_SIGNER_ENTRIES, MAX_SIGNER_ENTRIES
                ),
            ));
        }
        if let Some(account) = self.account() {
            if entries.iter().any(|entry| entry.account == account) {
                return Some((
                    "signer_entries",
                    "The account cannot be a member of its own signer list.".to_string(),
                ));
            }
        }
        let mut seen = HashSet::new();
        if !entries.iter().all(|entry| seen.insert(entry.account.as_str())) {
            return Some((
                "signer_entries",
                "Each account may appear in `signer_entries` only once.".to_string(),
            ));
        }
        let total_weight: u32 = entries.iter().map(|entry| u32::from(entry.signer_weight)).sum();
        if quorum > total_weight {
            return Some((
                "signer_quorum",
                format!(
                    "`signer_quorum` ({}) exceeds the total signer weight ({}).",
                    quorum, total_weight
                ),
            ));
        }
        None
    }
}

impl Validate for SignerListSet {
    fn get_errors(&self) -> ValidationErrors {
        let mut errors = self.base_errors();
        if let Some((field, message)) = self.signer_list_error() {
            errors.insert(field, message);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const ALICE: &str = "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn";
    const SIGNERS: [&str; 3] = [
        "rsA2LpzuawewSBQXkiju3YQTMzW13pAAdW",
        "rUpy3eEg8rqjqfUoLeBnZkscbKbFsKXC3v",
        "raKEEVSGnKSD9Zyvxu4z6Pqpm4ABH8FS6n",
    ];

    fn entries(count: usize, weight: u16) -> Vec<SignerEntry> {
        SIGNERS
            .iter()
            .cycle()
            .take(count)
            .enumerate()
            .map(|(i, account)| {
                // Past the fixture list, make the address unique.
                let account = if i < SIGNERS.len() {
                    account.to_string()
                } else {
                    format!("{}{}", account, i)
                };
                SignerEntry::new(account, weight)
            })
            .collect()
    }

    fn list(quorum: u32, signer_entries: Option<Vec<SignerEntry>>) -> SignerListSet {
        let mut builder = SignerListSet::builder().account(ALICE).signer_quorum(quorum);
        if let Some(signer_entries) = signer_entries {
            builder = builder.signer_entries(signer_entries);
        }
        builder.build().unwrap()
    }

    #[test_case(3, Some(entries(3, 1)), None ; "quorum equals weight")]
    #[test_case(0, None, None ; "delete list")]
    #[test_case(0, Some(entries(2, 1)), Some("signer_entries") ; "delete with entries")]
    #[test_case(1, None, Some("signer_quorum") ; "quorum without entries")]
    #[test_case(1, Some(vec![]), Some("signer_entries") ; "empty entries")]
    #[test_case(1, Some(entries(9, 1)), Some("signer_entries") ; "too many entries")]
    #[test_case(4, Some(entries(3, 1)), Some("signer_quorum") ; "quorum above weight")]
    fn signer_list_rules(quorum: u32, signer_entries: Option<Vec<SignerEntry>>, expected: Option<&str>) {
        let errors = list(quorum, signer_entries).get_errors();
        match expected {
            None => assert!(errors.is_empty(), "unexpected errors: {}", errors),
            Some(field) => {
                assert!(errors.contains(field), "expected {} in {}", field, errors);
                assert_eq!(errors.len(), 1);
            }
        }
    }

    #[test]
    fn own_account_and_duplicates_are_rejected() {
        let mut with_self = entries(2, 1);
        with_self.push(SignerEntry::new(ALICE, 1));
        assert!(list(1, Some(with_self)).get_errors().contains("signer_entries"));

        let mut duplicated = entries(2, 1);
        duplicated.push(SignerEntry::new(SIGNERS[0], 1));
        let errors = list(1, Some(duplicated)).get_errors();
        assert!(errors.get("signer_entries").unwrap().contains("only once"));
    }

    #[test]
    fn missing_quorum_is_the_only_error() {
        let tx = SignerListSet::builder()
            .account(ALICE)
            .signer_entries(entries(2, 1))
            .build()
            .unwrap();
        let errors = tx.get_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("signer_quorum"));
    }
}
