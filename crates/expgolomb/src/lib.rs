//! Decoding of exponential-golomb values.
//!
//! This crate extends the [`BitCursor`] from the [`bytes-util`](bytes_util)
//! crate with functionality for reading unsigned (UE) and signed (SE)
//! Exp-Golomb encoded numbers, as found in H.264/H.265 parameter sets.
//!
//! ```rust
//! # fn test() -> Result<(), bytes_util::BitCursorError> {
//! use bytes_util::BitCursor;
//! use expgolomb::BitCursorExpGolombExt;
//!
//! // 1 010 011 00100 followed by zero padding
//! let mut cursor = BitCursor::new(vec![0b1010_0110u8, 0b0100_0000]);
//!
//! assert_eq!(cursor.read_exp_golomb()?, 0);
//! assert_eq!(cursor.read_exp_golomb()?, 1);
//! assert_eq!(cursor.read_signed_exp_golomb()?, -1);
//! assert_eq!(cursor.read_exp_golomb()?, 3);
//! assert!(cursor.read_exp_golomb().unwrap_err().is_end_of_stream());
//! # Ok(())
//! # }
//! # test().expect("failed to run test");
//! ```
//!
//! ## License
//!
//! This project is licensed under the [MIT](./LICENSE.MIT) or
//! [Apache-2.0](./LICENSE.Apache-2.0) license. You can choose between one of
//! them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

use bytes_util::{BitCursor, BitCursorError};
use tracing::{debug, trace};

mod iter;

pub use iter::{ExpGolombValues, decode_exp_golomb, decode_signed_exp_golomb};

/// Extension trait for reading Exp-Golomb encoded numbers from a bit cursor
///
/// See: <https://en.wikipedia.org/wiki/Exponential-Golomb_coding>
///
/// - [`BitCursor`]
pub trait BitCursorExpGolombExt {
    /// Reads an unsigned Exp-Golomb encoded number
    fn read_exp_golomb(&mut self) -> Result<u64, BitCursorError>;

    /// Reads a signed Exp-Golomb encoded number
    ///
    /// Odd codes map to positive values, even codes to zero or negative ones:
    /// 0, 1, -1, 2, -2, ...
    fn read_signed_exp_golomb(&mut self) -> Result<i64, BitCursorError> {
        let code = self.read_exp_golomb()?;

        // Only reachable with u64::MAX, which a 64-bit code never produces.
        let magnitude =
            i64::try_from(code.div_ceil(2)).map_err(|_| BitCursorError::WidthOverflow {
                requested: u64::BITS,
                max: i64::BITS - 1,
            })?;

        if code % 2 == 0 {
            Ok(-magnitude)
        } else {
            Ok(magnitude)
        }
    }

    /// Returns an iterator decoding unsigned values until the stream runs out.
    fn exp_golomb_values(&mut self) -> ExpGolombValues<'_, Self, u64>
    where
        Self: Sized,
    {
        ExpGolombValues::new(self, Self::read_exp_golomb)
    }

    /// Returns an iterator decoding signed values until the stream runs out.
    fn signed_exp_golomb_values(&mut self) -> ExpGolombValues<'_, Self, i64>
    where
        Self: Sized,
    {
        ExpGolombValues::new(self, Self::read_signed_exp_golomb)
    }
}

impl BitCursorExpGolombExt for BitCursor {
    fn read_exp_golomb(&mut self) -> Result<u64, BitCursorError> {
        let mut leading_zeros: u32 = 0;
        while !self.read_bit()? {
            leading_zeros = leading_zeros.saturating_add(1);
        }

        // The terminating 1 plus the suffix would not fit in a u64.
        if leading_zeros >= u64::BITS {
            debug!(leading_zeros, "exp-golomb code wider than 64 bits");
            return Err(BitCursorError::WidthOverflow {
                requested: leading_zeros.saturating_add(1),
                max: u64::BITS,
            });
        }

        let suffix = self.read_bits_as_uint(leading_zeros)?;
        let code = ((1u64 << leading_zeros) | suffix) - 1;

        trace!(leading_zeros, code, "decoded exp-golomb code");

        Ok(code)
    }
}

/// Returns the number of bits that a signed Exp-Golomb encoded number would take up.
///
/// See: <https://en.wikipedia.org/wiki/Exponential-Golomb_coding>
pub fn size_of_signed_exp_golomb(number: i64) -> u64 {
    let code = if number <= 0 {
        u128::from(number.unsigned_abs()) * 2
    } else {
        u128::from(number.unsigned_abs()) * 2 - 1
    };

    size_of_code(code)
}

/// Returns the number of bits that an Exp-Golomb encoded number would take up.
///
/// See: <https://en.wikipedia.org/wiki/Exponential-Golomb_coding>
pub fn size_of_exp_golomb(number: u64) -> u64 {
    size_of_code(u128::from(number))
}

fn size_of_code(code: u128) -> u64 {
    let significant_bits = u64::from(u128::BITS - (code + 1).leading_zeros());
    significant_bits * 2 - 1
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use bytes_util::{BitCursor, BitCursorError};

    use crate::{BitCursorExpGolombExt, size_of_exp_golomb, size_of_signed_exp_golomb};

    /// Packs a string of `0`/`1` (spaces ignored) into bytes, zero padded.
    fn pack_bits(pattern: &str) -> Vec<u8> {
        let bits: Vec<bool> = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c == '1')
            .collect();

        bits.chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | (u8::from(bit) << (7 - i)))
            })
            .collect()
    }

    #[test]
    fn test_exp_glob_decode() {
        let data = pack_bits("1 010 011 00100 00101 00110 00111");
        let mut cursor = BitCursor::new(data);

        let remaining_bits = cursor.remaining_bits();
        let cases = [(0, 1), (1, 4), (2, 7), (3, 12), (4, 17), (5, 22), (6, 27)];

        for (expected, consumed) in cases {
            assert_eq!(cursor.read_exp_golomb().unwrap(), expected);
            assert_eq!(cursor.remaining_bits(), remaining_bits - consumed);
        }

        // Zero padding up to the byte boundary is an unterminated prefix.
        assert_eq!(cursor.read_exp_golomb(), Err(BitCursorError::EndOfStream));
        assert_eq!(cursor.remaining_bits(), 0);
    }

    #[test]
    fn test_signed_exp_glob_decode() {
        let data = pack_bits("1 010 011 00100 00101 00110 00111");
        let mut cursor = BitCursor::new(data);

        let remaining_bits = cursor.remaining_bits();
        let cases = [
            (0, 1),
            (1, 4),
            (-1, 7),
            (2, 12),
            (-2, 17),
            (3, 22),
            (-3, 27),
        ];

        for (expected, consumed) in cases {
            assert_eq!(cursor.read_signed_exp_golomb().unwrap(), expected);
            assert_eq!(cursor.remaining_bits(), remaining_bits - consumed);
        }
    }

    #[test]
    fn test_reference_stream() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();

        // 00111 1 1 1 | 1 00111 01 | 0 00100 00
        let mut cursor = BitCursor::new(vec![0x3Fu8, 0x9D, 0x10]);

        let mut values = Vec::new();
        let error = loop {
            match cursor.read_exp_golomb() {
                Ok(value) => values.push(value),
                Err(err) => break err,
            }
        };

        assert_eq!(values, vec![6, 0, 0, 0, 0, 6, 1, 3]);
        assert_eq!(error, BitCursorError::EndOfStream);
        // The two trailing zero bits were consumed by the failed prefix scan.
        assert_eq!(cursor.remaining_bits(), 0);
        assert_eq!(cursor.read_exp_golomb(), Err(BitCursorError::EndOfStream));
    }

    #[test]
    fn test_reference_stream_signed() {
        let mut cursor = BitCursor::new(vec![0x3Fu8, 0x9D, 0x10]);

        let values: Vec<i64> = cursor
            .signed_exp_golomb_values()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(values, vec![-3, 0, 0, 0, 0, -3, 1, 2]);
    }

    #[test]
    fn test_unterminated_prefix() {
        let mut cursor = BitCursor::new(vec![0u8; 4]);
        assert_eq!(cursor.read_exp_golomb(), Err(BitCursorError::EndOfStream));
        assert_eq!(cursor.remaining_bits(), 0);

        let mut cursor = BitCursor::new(Vec::<u8>::new());
        assert_eq!(cursor.read_exp_golomb(), Err(BitCursorError::EndOfStream));
        assert_eq!(
            cursor.read_signed_exp_golomb(),
            Err(BitCursorError::EndOfStream)
        );
    }

    #[test]
    fn test_truncated_suffix() {
        // Seven leading zeros need seven more bits after the terminating one.
        let mut cursor = BitCursor::new(vec![0b0000_0001u8]);
        assert_eq!(cursor.read_exp_golomb(), Err(BitCursorError::EndOfStream));
        assert_eq!(cursor.remaining_bits(), 0);

        // 0001 followed by nothing, after four bits of other data.
        let mut cursor = BitCursor::new(vec![0b1111_0001u8]);
        assert_eq!(cursor.read_bits_as_uint(4).unwrap(), 0b1111);
        assert_eq!(cursor.read_exp_golomb(), Err(BitCursorError::EndOfStream));
        assert_eq!(cursor.consumed_bits(), 8);

        // Same code with its suffix present: 0001 100 -> 0b1100 - 1.
        let mut cursor = BitCursor::new(vec![0b1111_0001u8, 0b1000_0000]);
        assert_eq!(cursor.read_bits_as_uint(4).unwrap(), 0b1111);
        assert_eq!(cursor.read_exp_golomb().unwrap(), 11);
        assert_eq!(cursor.consumed_bits(), 11);
    }

    #[test]
    fn test_max_width_code() {
        let pattern = format!("{}1{}", "0".repeat(63), "1".repeat(63));
        let mut cursor = BitCursor::new(pack_bits(&pattern));
        assert_eq!(cursor.read_exp_golomb().unwrap(), u64::MAX - 1);
        assert_eq!(cursor.consumed_bits(), 127);

        let mut cursor = BitCursor::new(pack_bits(&pattern));
        assert_eq!(cursor.read_signed_exp_golomb().unwrap(), -i64::MAX);

        let pattern = format!("{}1{}", "0".repeat(63), "1".repeat(62) + "0");
        let mut cursor = BitCursor::new(pack_bits(&pattern));
        assert_eq!(cursor.read_signed_exp_golomb().unwrap(), i64::MAX);
    }

    #[test]
    fn test_width_overflow() {
        let pattern = format!("{}1{}", "0".repeat(64), "1".repeat(64));
        let mut cursor = BitCursor::new(pack_bits(&pattern));

        assert_eq!(
            cursor.read_exp_golomb(),
            Err(BitCursorError::WidthOverflow {
                requested: 65,
                max: 64
            })
        );
        // Only the prefix and its terminating one are consumed.
        assert_eq!(cursor.consumed_bits(), 65);
    }

    #[test]
    fn test_expg_sizes() {
        assert_eq!(1, size_of_exp_golomb(0)); // 0b1
        assert_eq!(3, size_of_exp_golomb(1)); // 0b010
        assert_eq!(3, size_of_exp_golomb(2)); // 0b011
        assert_eq!(5, size_of_exp_golomb(3)); // 0b00100
        assert_eq!(5, size_of_exp_golomb(4)); // 0b00101
        assert_eq!(5, size_of_exp_golomb(5)); // 0b00110
        assert_eq!(5, size_of_exp_golomb(6)); // 0b00111
        assert_eq!(127, size_of_exp_golomb(u64::MAX - 1));
        assert_eq!(129, size_of_exp_golomb(u64::MAX));

        assert_eq!(1, size_of_signed_exp_golomb(0)); // 0b1
        assert_eq!(3, size_of_signed_exp_golomb(1)); // 0b010
        assert_eq!(3, size_of_signed_exp_golomb(-1)); // 0b011
        assert_eq!(5, size_of_signed_exp_golomb(2)); // 0b00100
        assert_eq!(5, size_of_signed_exp_golomb(-2)); // 0b00101
        assert_eq!(5, size_of_signed_exp_golomb(3)); // 0b00110
        assert_eq!(5, size_of_signed_exp_golomb(-3)); // 0b00111
        assert_eq!(127, size_of_signed_exp_golomb(i64::MAX));
        assert_eq!(129, size_of_signed_exp_golomb(i64::MIN));
    }

    #[test]
    fn test_sizes_match_consumed_bits() {
        let data = pack_bits("1 010 011 00100 00101 00110 00111 0001000");
        let mut cursor = BitCursor::new(data);

        for _ in 0..8 {
            let before = cursor.consumed_bits();
            let value = cursor.read_exp_golomb().unwrap();
            assert_eq!(
                (cursor.consumed_bits() - before) as u64,
                size_of_exp_golomb(value)
            );
        }
    }
}
