//! GraphQL literal rendering for hand-built documents.
//!
//! Documents sent to the database embed field values directly in the request
//! text. Every embedded value must be rendered as a literal token, never
//! spliced in raw: a field value containing a quote or a brace must not be
//! able to alter the document structure. This is a correctness and security
//! contract, not a style preference.

/// Renders a string as a quoted, escaped GraphQL string literal.
///
/// GraphQL string literals share JSON's syntax, so the JSON encoder is the
/// escaping function.
pub fn string_literal(value: &str) -> String {
    serde_json::to_string(value).expect("string serialization is infallible")
}

/// Renders a float as a bare GraphQL numeric literal.
///
/// Non-finite values render as `null`, which the remote schema rejects
/// loudly rather than storing a junk number.
pub fn float_literal(value: f64) -> String {
    serde_json::to_string(&value).expect("float serialization is infallible")
}
