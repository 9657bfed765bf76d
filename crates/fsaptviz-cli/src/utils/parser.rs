use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Value for '{key}' cannot be empty.")]
    EmptyValue { key: String },
}

/// Splits a `KEY=VALUE` override on its first `=`, trimming both sides.
pub fn parse_key_value(kv_pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = kv_pair
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(kv_pair.to_string()))?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(kv_pair.to_string()));
    }
    if value.is_empty() {
        return Err(ParseError::EmptyValue {
            key: key.to_string(),
        });
    }
    Ok((key, value))
}
