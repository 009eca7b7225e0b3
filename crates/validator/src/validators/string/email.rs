//! Address syntax for the `Email` rule.
//!
//! A string is an email address when it is, verbatim, a bare addr-spec:
//! a dot-atom local part, `@`, and either a dot-atom domain or a bracketed
//! IP literal. Display names, angle brackets, quoted local parts, comments
//! and surrounding whitespace are all rejected. Non-ASCII characters are
//! accepted as atom text.

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;

const ATOM: &str = r"(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]|[^\x00-\x7F])+";

static ADDR_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    let dot_atom = format!(r"{ATOM}(?:\.{ATOM})*");
    Regex::new(&format!(
        r"^{dot_atom}@(?:{dot_atom}|\[(?P<literal>[\x21-\x5A\x5E-\x7E]*)\])$"
    ))
    .expect("address pattern is valid")
});

/// Returns `true` when `input` is exactly one bare email address.
pub fn is_email(input: &str) -> bool {
    let Some(captures) = ADDR_SPEC.captures(input) else {
        return false;
    };
    match captures.name("literal") {
        Some(literal) => literal.as_str().parse::<IpAddr>().is_ok(),
        None => true,
    }
}
