//! Text format predicates backing the `Validator` format checks.
//!
//! Each predicate is total: malformed input yields `false`, never an error.

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;
use url::Url;

const MAX_DOMAIN_LEN: usize = 253;

static ALPHANUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\pL|\pN|\s)+$").expect("valid alphanumeric regex"));
static BASE64_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$")
        .expect("valid base64 regex")
});
static LOWERCASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\p{Ll}|\s)+$").expect("valid lowercase regex"));
static UPPERCASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\p{Lu}|\s)+$").expect("valid uppercase regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"|\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])$",
    ))
    .expect("valid email regex")
});
static GUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:[0-9A-Fa-f]{32}",
        r"|[{(]?[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}[})]?",
        r"|\{0x[0-9A-Fa-f]{8},0x[0-9A-Fa-f]{4},0x[0-9A-Fa-f]{4},\{(?:0x[0-9A-Fa-f]{2},){7}0x[0-9A-Fa-f]{2}\}\})$",
    ))
    .expect("valid guid regex")
});
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}\.?$")
        .expect("valid domain regex")
});

/// Letters, digits and whitespace only (any script). Empty is rejected.
pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_RE.is_match(value)
}

/// Padded standard-alphabet base64.
pub fn is_base64(value: &str) -> bool {
    BASE64_RE.is_match(value)
}

/// Lowercase letters and whitespace only.
pub fn is_lowercase(value: &str) -> bool {
    LOWERCASE_RE.is_match(value)
}

/// Uppercase letters and whitespace only.
pub fn is_uppercase(value: &str) -> bool {
    UPPERCASE_RE.is_match(value)
}

/// Lowercase local part and domain, or a bracketed IPv4 literal domain.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// 32 hex digits, hyphenated (optionally braced), or the `{0x..,{0x..}}` form.
pub fn is_guid(value: &str) -> bool {
    GUID_RE.is_match(value)
}

/// Multi-label DNS name with an alphabetic top-level label.
pub fn is_domain(value: &str) -> bool {
    value.len() <= MAX_DOMAIN_LEN && DOMAIN_RE.is_match(value)
}

pub fn is_ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

pub fn is_hostname(value: &str) -> bool {
    is_domain(value) || is_ip(value)
}

/// Absolute URL (scheme required).
pub fn is_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// ISO-8601 timestamp with offset, e.g. `2022-01-01T10:00:00+01:00`.
pub fn is_std_date(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
}

/// Digits-only number passing the Luhn checksum.
pub fn is_credit_card(value: &str) -> bool {
    if value.len() < 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = value
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(position, digit)| {
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_accepts_any_script_and_spaces() {
        assert!(is_alphanumeric("Abc 123"));
        assert!(is_alphanumeric("ação 二"));
        assert!(!is_alphanumeric("abc-123"));
        assert!(!is_alphanumeric(""));
    }

    #[test]
    fn casing_checks_ignore_whitespace() {
        assert!(is_lowercase("hello world"));
        assert!(!is_lowercase("Hello"));
        assert!(is_uppercase("HELLO WORLD"));
        assert!(!is_uppercase("HELLO1"));
    }

    #[test]
    fn base64_requires_padding_blocks() {
        assert!(is_base64("aGVsbG8="));
        assert!(is_base64("aGk="));
        assert!(is_base64("aGVsbG8gd29ybGQh"));
        assert!(!is_base64("aGVsbG8"));
        assert!(!is_base64(""));
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("jane.doe@example.com"));
        assert!(is_email("ops+alerts@[10.0.0.1]"));
        assert!(!is_email("jane.doe@"));
        assert!(!is_email("no-at-sign.example.com"));
    }

    #[test]
    fn guid_forms() {
        assert!(is_guid("6F9619FF-8B86-D011-B42D-00C04FC964FF"));
        assert!(is_guid("{6F9619FF-8B86-D011-B42D-00C04FC964FF}"));
        assert!(is_guid("6F9619FF8B86D011B42D00C04FC964FF"));
        assert!(is_guid(
            "{0x6f9619ff,0x8b86,0xd011,{0xb4,0x2d,0x00,0xc0,0x4f,0xc9,0x64,0xff}}"
        ));
        assert!(!is_guid("6F9619FF-8B86-D011-B42D"));
        assert!(!is_guid("prefix 6F9619FF8B86D011B42D00C04FC964FF"));
    }

    #[test]
    fn domains_hostnames_and_ips() {
        assert!(is_domain("example.com"));
        assert!(is_domain("sub.Example.co.uk."));
        assert!(!is_domain("localhost"));
        assert!(!is_domain("-bad.example.com"));
        assert!(!is_domain("example.c0m"));

        assert!(is_ip("192.168.1.10"));
        assert!(is_ip("::1"));
        assert!(!is_ip("256.1.1.1"));

        assert!(is_hostname("example.com"));
        assert!(is_hostname("10.0.0.1"));
        assert!(!is_hostname("not a host"));
    }

    #[test]
    fn urls_need_a_scheme() {
        assert!(is_url("https://example.com/path?q=1"));
        assert!(is_url("mailto:someone@example.com"));
        assert!(!is_url("example.com/path"));
    }

    #[test]
    fn std_dates_are_rfc3339() {
        assert!(is_std_date("2022-01-01T10:00:00Z"));
        assert!(is_std_date("2022-01-01T10:00:00+01:00"));
        assert!(!is_std_date("2022-01-01"));
    }

    #[test]
    fn luhn_checksum() {
        assert!(is_credit_card("4111111111111111"));
        assert!(is_credit_card("79927398713"));
        assert!(!is_credit_card("79927398710"));
        assert!(!is_credit_card("4111 1111 1111 1111"));
        assert!(!is_credit_card(""));
    }
}
