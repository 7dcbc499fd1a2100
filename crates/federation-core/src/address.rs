//! Email-shaped address grammar
//!
//! Handles name remote accounts as `user@domain`. The grammar accepts a dot-atom
//! or quoted local part, and a dotted domain name, a bracketed literal, or
//! `localhost`.

use once_cell::sync::Lazy;
use regex::Regex;

static LOCAL_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^(?:[-!#$%&'*+/=?^_`{}|~0-9A-Z]+(?:\.[-!#$%&'*+/=?^_`{}|~0-9A-Z]+)*|"(?:[\x01-\x08\x0B\x0C\x0E-\x1F!#-\[\]-\x7F]|\\[\x01-\x09\x0B\x0C\x0E-\x7F])*")$"#,
    )
    .expect("local part grammar compiles")
});

static DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+[A-Z0-9][A-Z0-9-]{0,61}[A-Z0-9]\.?$",
    )
    .expect("domain grammar compiles")
});

static DOMAIN_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\[[0-9A-F:.]+\]$").expect("domain literal grammar compiles"));

/// Domains accepted without a dot
const DOMAIN_ALLOWLIST: &[&str] = &["localhost"];

/// Check that `value` is an email-shaped address
pub fn is_valid_address(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    if !LOCAL_PART.is_match(local) {
        return false;
    }

    DOMAIN_ALLOWLIST.contains(&domain)
        || DOMAIN.is_match(domain)
        || DOMAIN_LITERAL.is_match(domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_handles() {
        assert!(is_valid_address("alice@example.org"));
        assert!(is_valid_address("alice@alice.diaspora.example.org"));
        assert!(is_valid_address("bob.bobertson+tag@example.com"));
        assert!(is_valid_address("admin@localhost"));
        assert!(is_valid_address("\"odd..name\"@example.com"));
        assert!(!is_valid_address("odd..name@example.com"));
        assert!(is_valid_address("user@[127.0.0.1]"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_valid_address("not-an-email"));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("@example.org"));
        assert!(!is_valid_address("alice@"));
        assert!(!is_valid_address("alice@example"));
        assert!(!is_valid_address("al ice@example.org"));
        assert!(!is_valid_address("alice..b@example.org"));
        assert!(!is_valid_address("alice@-example.org"));
    }

    proptest! {
        #[test]
        fn prop_no_at_sign_never_valid(s in "[a-z0-9.]{0,40}") {
            prop_assert!(!is_valid_address(&s));
        }

        #[test]
        fn prop_simple_handles_valid(
            user in "[a-z][a-z0-9]{0,15}",
            host in "[a-z][a-z0-9]{0,15}",
            tld in "[a-z]{2,6}",
        ) {
            let handle = format!("{}@{}.{}", user, host, tld);
            prop_assert!(is_valid_address(&handle));
        }
    }
}
