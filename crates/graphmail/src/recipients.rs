//! Recipient list cleaning and cross-list deduplication.

use crate::error::{Error, Result};

/// Cleaned To/Cc/Bcc lists with the cross-list invariant applied.
///
/// After construction via [`Recipients::cleaned`] the three lists are
/// pairwise disjoint (case-insensitively), with priority to > cc > bcc:
/// an address in `to` never reappears in `cc` or `bcc`, and one in `cc`
/// never reappears in `bcc`. Order of first appearance is preserved.
#[derive(Debug, Clone)]
pub struct Recipients {
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
}

impl Recipients {
    /// Cleans each list and removes cross-list duplicates.
    ///
    /// Per list: blank entries dropped, surrounding whitespace trimmed,
    /// case-insensitive duplicates collapsed to the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if no usable `to` address remains.
    pub fn cleaned<S: AsRef<str>>(to: &[S], cc: &[S], bcc: &[S]) -> Result<Self> {
        let to = clean_list(to);
        if to.is_empty() {
            return Err(Error::Validation(
                "At least one 'to' address is required".to_string(),
            ));
        }

        let mut cc = clean_list(cc);
        cc.retain(|addr| !contains_ignore_case(&to, addr));

        let mut bcc = clean_list(bcc);
        bcc.retain(|addr| !contains_ignore_case(&to, addr) && !contains_ignore_case(&cc, addr));

        Ok(Self { to, cc, bcc })
    }

    /// Takes the lists as given, without cleaning or deduplication.
    pub(crate) fn raw(to: Vec<String>, cc: Vec<String>, bcc: Vec<String>) -> Self {
        Self { to, cc, bcc }
    }

    /// Returns the `to` addresses.
    #[must_use]
    pub fn to(&self) -> &[String] {
        &self.to
    }

    /// Returns the `cc` addresses.
    #[must_use]
    pub fn cc(&self) -> &[String] {
        &self.cc
    }

    /// Returns the `bcc` addresses.
    #[must_use]
    pub fn bcc(&self) -> &[String] {
        &self.bcc
    }
}

/// Drops blank entries, trims the rest, and collapses case-insensitive
/// duplicates to their first occurrence.
fn clean_list<S: AsRef<str>>(src: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for addr in src {
        let trimmed = addr.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if !contains_ignore_case(&out, trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

fn contains_ignore_case(list: &[String], addr: &str) -> bool {
    list.iter().any(|a| a.eq_ignore_ascii_case(addr))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clean_drops_blank_and_trims() {
        let cleaned = clean_list(&["  a@x.com  ", "", "   ", "b@x.com"]);
        assert_eq!(cleaned, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_clean_dedup_case_insensitive_first_wins() {
        let cleaned = clean_list(&["A@X.com", "a@x.com", "b@x.com", "B@X.COM"]);
        assert_eq!(cleaned, vec!["A@X.com", "b@x.com"]);
    }

    #[test]
    fn test_empty_to_is_validation_error() {
        let err = Recipients::cleaned::<&str>(&[], &["cc@x.com"], &[]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_all_blank_to_is_validation_error() {
        let err = Recipients::cleaned(&["", "   "], &[], &[]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_cc_loses_addresses_already_in_to() {
        let recipients =
            Recipients::cleaned(&["A@X.com"], &["a@x.com", "c@x.com"], &[]).unwrap();
        assert_eq!(recipients.to(), ["A@X.com"]);
        assert_eq!(recipients.cc(), ["c@x.com"]);
    }

    #[test]
    fn test_bcc_loses_addresses_in_to_and_cc() {
        let recipients = Recipients::cleaned(
            &["to@x.com"],
            &["cc@x.com"],
            &["TO@x.com", "CC@X.COM", "bcc@x.com"],
        )
        .unwrap();
        assert_eq!(recipients.bcc(), ["bcc@x.com"]);
    }

    #[test]
    fn test_order_of_first_appearance_preserved() {
        let recipients = Recipients::cleaned(
            &["c@x.com", "a@x.com", "C@x.com", "b@x.com"],
            &[],
            &[],
        )
        .unwrap();
        assert_eq!(recipients.to(), ["c@x.com", "a@x.com", "b@x.com"]);
    }

    fn lower_set(list: &[String]) -> std::collections::HashSet<String> {
        list.iter().map(|a| a.to_ascii_lowercase()).collect()
    }

    proptest! {
        #[test]
        fn prop_cleaned_lists_are_pairwise_disjoint(
            to in proptest::collection::vec("[a-cA-C]@[x-zX-Z]\\.com", 1..8),
            cc in proptest::collection::vec("[a-cA-C]@[x-zX-Z]\\.com", 0..8),
            bcc in proptest::collection::vec("[a-cA-C]@[x-zX-Z]\\.com", 0..8),
        ) {
            let recipients = Recipients::cleaned(&to, &cc, &bcc).unwrap();

            let to_set = lower_set(recipients.to());
            let cc_set = lower_set(recipients.cc());
            let bcc_set = lower_set(recipients.bcc());

            prop_assert!(to_set.is_disjoint(&cc_set));
            prop_assert!(to_set.is_disjoint(&bcc_set));
            prop_assert!(cc_set.is_disjoint(&bcc_set));

            // No list holds internal case-insensitive duplicates.
            prop_assert_eq!(to_set.len(), recipients.to().len());
            prop_assert_eq!(cc_set.len(), recipients.cc().len());
            prop_assert_eq!(bcc_set.len(), recipients.bcc().len());
        }
    }
}
