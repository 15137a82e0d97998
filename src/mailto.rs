// SPDX-License-Identifier: PMPL-1.0-or-later

//! `mailto:` links for memory submissions

/// Percent-encode `input` the way `encodeURIComponent` does: everything
/// except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is escaped as UTF-8
/// bytes.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Build `mailto:<recipient>?subject=<subject>&body=<body>` with every part
/// encoded. Empty parts stay in the link as empty values.
pub fn build(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        encode_component(recipient),
        encode_component(subject),
        encode_component(body)
    )
}
