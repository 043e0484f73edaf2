/// Percent-encodes `value` for substitution into a URI.
///
/// Every byte outside the RFC 3986 unreserved set (`A-Za-z0-9-._~`) is
/// encoded, operating on the UTF-8 byte sequence. Characters present in
/// `safe` are then restored to their literal form. The restoration is sound
/// because `%` itself always encodes to `%25`, so an encoded safe character
/// can only appear where one was encoded.
pub fn encode(value: &str, safe: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for ch in safe.chars() {
        let literal = ch.to_string();
        let quoted = urlencoding::encode(&literal);
        if quoted.as_ref() != literal {
            encoded = encoded.replace(quoted.as_ref(), &literal);
        }
    }
    encoded
}
