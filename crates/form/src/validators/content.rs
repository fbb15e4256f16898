//! Synchronous content validators.
//!
//! Text checks run against the string form of the value, so a number or an
//! array is checked as it would print.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::{BaseOptions, EqualOptions, PasswordOptions};
use crate::predicates::is_empty;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});

// ============================================================================
// EMPTINESS
// ============================================================================

crate::validator! {
    /// Rejects values [`is_empty`] classifies as empty.
    pub NotEmpty => "isEmpty";
    options(opts: BaseOptions);
    rule(value) { !is_empty(value) }
    message { "This field is required".to_owned() }
    fn not_empty();
}

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Checks the local-part@domain shape. The domain is either a dotted
    /// DNS name with an alphabetic TLD or a bracketed IPv4 literal.
    pub Email => "email";
    options(opts: BaseOptions);
    rule(value) { EMAIL_REGEX.is_match(&value.to_string()) }
    message { "Please enter a valid email address".to_owned() }
    fn email();
}

// ============================================================================
// PASSWORD
// ============================================================================

crate::validator! {
    /// Requires `min..=max` UTF-16 code units (no line breaks), at least one
    /// ASCII letter and at least one ASCII digit, in any position.
    pub Password => "password";
    options(opts: PasswordOptions);
    rule(value) { password_matches(&value.to_string(), opts.min, opts.max) }
    message {
        format!(
            "Password must be {} to {} characters long and contain both letters and digits",
            opts.min, opts.max
        )
    }
    fn password();
}

fn password_matches(text: &str, min: usize, max: usize) -> bool {
    if text.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
        return false;
    }
    let len = text.encode_utf16().count();
    (min..=max).contains(&len)
        && text.chars().any(|c| c.is_ascii_alphabetic())
        && text.chars().any(|c| c.is_ascii_digit())
}

// ============================================================================
// EQUALITY
// ============================================================================

crate::validator! {
    /// Requires the value to equal `options.equal`. Compound values compare
    /// structurally; `NaN` never matches.
    pub Equal => "equal";
    options(opts: EqualOptions);
    rule(value) { *value == opts.equal }
    message { "Values do not match".to_owned() }
    fn equal();
}
