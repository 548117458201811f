//! Mailto field extraction
//!
//! Best-effort slicing of a `mailto:` payload into an address and named
//! header fields. This is not a URI parser and does not validate
//! addresses; malformed input degrades to empty strings.

use std::collections::HashMap;

/// Transport prefix stripped from the payload
pub const MAILTO_PREFIX: &str = "mailto:";

/// The standard header fields offered to mail clients
pub const STANDARD_FIELDS: [&str; 4] = ["subject", "cc", "bcc", "body"];

// An `&` or `=` written between two encoded spaces belongs to a value
// ("Tom%20&%20Jerry"), not to the query structure.
const SPACED_AMPERSAND: &str = "%20&%20";
const SPACED_AMPERSAND_ESCAPED: &str = "%20%26%20";
const SPACED_EQUALS: &str = "%20=%20";
const SPACED_EQUALS_ESCAPED: &str = "%20%3D%20";

/// Drop a leading `mailto:` (any case) and surrounding whitespace
pub fn strip_transport(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.get(..MAILTO_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(MAILTO_PREFIX) => trimmed[MAILTO_PREFIX.len()..].trim(),
        _ => trimmed,
    }
}

/// Split a payload at its first `?` into address and query
pub fn split_scheme(raw: &str) -> (&str, &str) {
    split_payload(strip_transport(raw))
}

// Same split for a payload whose prefix is already gone.
fn split_payload(scheme: &str) -> (&str, &str) {
    let scheme = scheme.trim();
    match scheme.split_once('?') {
        Some((address, query)) => (address.trim(), query.trim()),
        None => (scheme, ""),
    }
}

/// Percent-decode, replacing invalid UTF-8 rather than failing
pub fn decode(value: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(value.as_bytes())).into_owned()
}

/// Raw `(key, value)` terms of a query, in order
///
/// Terms without `=` are dropped. Each term splits at its first `=`, so a
/// value may itself contain `=`.
fn terms(query: &str) -> Vec<(String, String)> {
    if query.is_empty() {
        return Vec::new();
    }
    query
        .replace(SPACED_AMPERSAND, SPACED_AMPERSAND_ESCAPED)
        .split('&')
        .filter_map(|term| {
            let term = term.replace(SPACED_EQUALS, SPACED_EQUALS_ESCAPED);
            let (key, value) = term.split_once('=')?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Decoded value of the first `name` term in `query`, or `""`
pub fn extract_field(query: &str, name: &str) -> String {
    terms(query)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| decode(&value))
        .unwrap_or_default()
}

/// Decoded address part of a payload, or `""` when blank
pub fn get_address(raw: &str) -> String {
    let (address, _) = split_scheme(raw);
    decode_address(address)
}

fn decode_address(address: &str) -> String {
    decode(address).trim().to_string()
}

/// Address and fields recovered from one payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    address: String,
    fields: HashMap<String, String>,
}

impl ParsedFields {
    /// Parse a payload that may still carry its `mailto:` prefix
    pub fn parse(raw: &str) -> Self {
        Self::from_scheme(strip_transport(raw))
    }

    /// Parse a payload whose prefix was already removed
    ///
    /// Nothing else is stripped, so `mailto:mailto:x` and its raw scheme
    /// `mailto:x` agree on the address.
    pub fn from_scheme(scheme: &str) -> Self {
        let (address, query) = split_payload(scheme);
        let mut fields = HashMap::new();
        for (key, value) in terms(query) {
            fields.entry(key).or_insert_with(|| decode(&value));
        }
        Self {
            address: decode_address(address),
            fields,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn has_address(&self) -> bool {
        !self.address.is_empty()
    }

    /// Field value, `""` when absent
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn subject(&self) -> &str {
        self.get("subject")
    }

    pub fn cc(&self) -> &str {
        self.get("cc")
    }

    pub fn bcc(&self) -> &str {
        self.get("bcc")
    }

    pub fn body(&self) -> &str {
        self.get("body")
    }

    /// Names of every field present
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
