#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("duplicate field in {table} table: {name}")]
    DuplicateField { table: &'static str, name: String },

    #[error("empty field name in {table} table at index {index}")]
    EmptyFieldName { table: &'static str, index: usize },

    #[error("currency table not sorted at index {index}: {code}")]
    UnsortedCurrencyTable { index: usize, code: String },

    #[error("malformed currency code in table: {code:?}")]
    MalformedCurrencyCode { code: String },

    #[error("duplicate violation kind in rule table: {kind}")]
    DuplicateRuleKind { kind: String },
}
