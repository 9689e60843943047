use bytes::Bytes;
use bytes_util::{BitCursor, BitCursorError};
use expgolomb::BitCursorExpGolombExt;
use serde::Serialize;
use tracing::debug;

/// Values decoded from one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DecodedValues {
    Unsigned(Vec<u64>),
    Signed(Vec<i64>),
}

impl DecodedValues {
    pub fn count(&self) -> usize {
        match self {
            DecodedValues::Unsigned(values) => values.len(),
            DecodedValues::Signed(values) => values.len(),
        }
    }

    /// Formats every value on its own line
    pub fn to_lines(&self) -> String {
        let lines: Vec<String> = match self {
            DecodedValues::Unsigned(values) => values.iter().map(u64::to_string).collect(),
            DecodedValues::Signed(values) => values.iter().map(i64::to_string).collect(),
        };

        lines.join("\n")
    }
}

/// Result of decoding a whole input until end of stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub signed: bool,
    pub values: DecodedValues,
    /// Bits in the input
    pub total_bits: usize,
    /// Bits consumed by an unterminated code at the end of the input
    pub trailing_bits: usize,
}

/// Decodes Exp-Golomb values from `data` until the first end of stream.
pub fn decode(data: Bytes, signed: bool) -> Result<DecodeReport, BitCursorError> {
    let mut cursor = BitCursor::new(data);
    let total_bits = cursor.remaining_bits();

    let (values, complete_bits) = if signed {
        let (values, complete_bits) =
            read_until_end(&mut cursor, BitCursor::read_signed_exp_golomb)?;
        (DecodedValues::Signed(values), complete_bits)
    } else {
        let (values, complete_bits) = read_until_end(&mut cursor, BitCursor::read_exp_golomb)?;
        (DecodedValues::Unsigned(values), complete_bits)
    };

    Ok(DecodeReport {
        signed,
        values,
        total_bits,
        trailing_bits: cursor.consumed_bits() - complete_bits,
    })
}

/// Returns the decoded values and the bit position after the last complete code.
fn read_until_end<T: std::fmt::Debug>(
    cursor: &mut BitCursor,
    read: impl Fn(&mut BitCursor) -> Result<T, BitCursorError>,
) -> Result<(Vec<T>, usize), BitCursorError> {
    let mut values = Vec::new();
    let mut complete_bits = 0;

    loop {
        match read(cursor) {
            Ok(value) => {
                debug!(?value, bit = complete_bits, "decoded value");
                values.push(value);
                complete_bits = cursor.consumed_bits();
            }
            Err(BitCursorError::EndOfStream) => break,
            Err(err) => return Err(err),
        }
    }

    Ok((values, complete_bits))
}
