use bytes::Bytes;
use tracing::{debug, trace};

use crate::BitCursorError;

/// Widest value [`BitCursor::read_bits_as_uint`] can return.
const MAX_UINT_WIDTH: u32 = u64::BITS;

/// A forward-only cursor that reads individual bits from an immutable buffer.
///
/// Bits are read most significant bit first within each byte. The cursor owns
/// its buffer and never mutates it; reading only moves the position. There is
/// no seek, peek or rewind.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct BitCursor {
    data: Bytes,
    byte_pos: usize,
    bit_pos: u8,
}

impl BitCursor {
    /// Create a new cursor over the given bytes.
    ///
    /// This is zero copy for [`Bytes`], [`Vec<u8>`] and `&'static [u8]`.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    /// Create a new cursor from a borrowed slice, copying it.
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    /// Reads a single bit
    pub fn read_bit(&mut self) -> Result<bool, BitCursorError> {
        let Some(&byte) = self.data.get(self.byte_pos) else {
            trace!(
                consumed_bits = self.consumed_bits(),
                "bit cursor reached end of stream"
            );
            return Err(BitCursorError::EndOfStream);
        };

        let bit = (byte >> (7 - self.bit_pos)) & 1;

        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.bit_pos = 0;
            self.byte_pos += 1;
        }

        Ok(bit == 1)
    }

    /// Reads `count` bits in the order they appear in the stream.
    ///
    /// Bits consumed before an [`BitCursorError::EndOfStream`] stay consumed,
    /// the partial result is dropped.
    pub fn read_bits(&mut self, count: usize) -> Result<Vec<bool>, BitCursorError> {
        (0..count).map(|_| self.read_bit()).collect()
    }

    /// Reads `count` bits as a big-endian unsigned integer.
    ///
    /// Fails with [`BitCursorError::WidthOverflow`] without consuming anything
    /// if `count` is larger than 64.
    pub fn read_bits_as_uint(&mut self, count: u32) -> Result<u64, BitCursorError> {
        if count > MAX_UINT_WIDTH {
            debug!(
                requested = count,
                max = MAX_UINT_WIDTH,
                "unsigned read wider than the result type"
            );
            return Err(BitCursorError::WidthOverflow {
                requested: count,
                max: MAX_UINT_WIDTH,
            });
        }

        let bits = self.read_bits(count as usize)?;

        Ok(fold_msb_first(&bits))
    }

    /// Reads 8 bits as a byte. The cursor does not have to be aligned.
    pub fn read_byte(&mut self) -> Result<u8, BitCursorError> {
        self.read_bits_as_uint(8).map(|byte| byte as u8)
    }

    /// Reads `count` bytes, see [`BitCursor::read_byte`].
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>, BitCursorError> {
        (0..count).map(|_| self.read_byte()).collect()
    }
}

impl BitCursor {
    /// Returns the number of bits that can still be read
    #[inline(always)]
    #[must_use]
    pub fn remaining_bits(&self) -> usize {
        (self.data.len() - self.byte_pos) * 8 - self.bit_pos as usize
    }

    /// Returns the number of bits read so far
    #[inline(always)]
    #[must_use]
    pub const fn consumed_bits(&self) -> usize {
        self.byte_pos * 8 + self.bit_pos as usize
    }

    /// Returns `true` if every bit has been read
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.byte_pos >= self.data.len()
    }

    /// Returns the current bit position within the current byte (0-7)
    #[inline(always)]
    #[must_use]
    pub const fn bit_pos(&self) -> u8 {
        self.bit_pos
    }

    /// Checks if the cursor is aligned to the byte boundary
    #[inline(always)]
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.bit_pos == 0
    }

    /// Returns the whole underlying buffer, including bytes already read
    #[inline(always)]
    #[must_use]
    pub const fn get_ref(&self) -> &Bytes {
        &self.data
    }

    /// Returns the underlying buffer
    #[inline(always)]
    #[must_use]
    pub fn into_inner(self) -> Bytes {
        self.data
    }
}

impl From<Bytes> for BitCursor {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for BitCursor {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&'static [u8]> for BitCursor {
    fn from(data: &'static [u8]) -> Self {
        Self::new(data)
    }
}

fn fold_msb_first(bits: &[bool]) -> u64 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | u64::from(bit))
}
