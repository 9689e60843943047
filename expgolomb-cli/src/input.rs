use bytes::Bytes;
use tracing::debug;

use crate::config::{InputSource, REFERENCE_SEQUENCE};
use crate::error::AppError;

/// Parses hex tokens such as `"3F 9D"`, `"0x3f,0x9d"` or `"3f:9d:10"`.
///
/// Every token must have an even number of digits.
pub fn parse_hex<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u8>, hex::FromHexError> {
    let mut bytes = Vec::new();

    for token in tokens
        .iter()
        .flat_map(|arg| arg.as_ref().split(|c: char| c.is_whitespace() || c == ',' || c == ':'))
        .filter(|token| !token.is_empty())
    {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        bytes.extend(hex::decode(digits)?);
    }

    Ok(bytes)
}

impl InputSource {
    /// Loads the bytes this source points at.
    pub fn load(&self) -> Result<Bytes, AppError> {
        let data = match self {
            InputSource::Hex(tokens) => Bytes::from(parse_hex(tokens)?),
            InputSource::File(path) => Bytes::from(std::fs::read(path)?),
            InputSource::Reference => Bytes::from_static(REFERENCE_SEQUENCE),
        };

        debug!(bytes = data.len(), "loaded input");

        Ok(data)
    }
}
