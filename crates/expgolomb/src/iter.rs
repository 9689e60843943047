use std::iter::FusedIterator;

use bytes_util::{BitCursor, BitCursorError};

use crate::BitCursorExpGolombExt;

/// Iterator that decodes Exp-Golomb values until the stream runs out.
///
/// Created by [`BitCursorExpGolombExt::exp_golomb_values`] and
/// [`BitCursorExpGolombExt::signed_exp_golomb_values`].
///
/// [`BitCursorError::EndOfStream`] ends the iteration. Any other error is
/// yielded once, after which the iterator is exhausted.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ExpGolombValues<'a, R, T> {
    reader: &'a mut R,
    read: fn(&mut R) -> Result<T, BitCursorError>,
    done: bool,
}

impl<'a, R, T> ExpGolombValues<'a, R, T> {
    pub(crate) fn new(reader: &'a mut R, read: fn(&mut R) -> Result<T, BitCursorError>) -> Self {
        Self {
            reader,
            read,
            done: false,
        }
    }
}

impl<R, T> Iterator for ExpGolombValues<'_, R, T> {
    type Item = Result<T, BitCursorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match (self.read)(&mut *self.reader) {
            Ok(value) => Some(Ok(value)),
            Err(BitCursorError::EndOfStream) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<R, T> FusedIterator for ExpGolombValues<'_, R, T> {}

/// Decodes every unsigned Exp-Golomb value in `data`.
///
/// Trailing bits that do not form a complete code are ignored.
pub fn decode_exp_golomb(data: impl Into<BitCursor>) -> Result<Vec<u64>, BitCursorError> {
    let mut cursor: BitCursor = data.into();
    cursor.exp_golomb_values().collect()
}

/// Decodes every signed Exp-Golomb value in `data`.
///
/// Trailing bits that do not form a complete code are ignored.
pub fn decode_signed_exp_golomb(data: impl Into<BitCursor>) -> Result<Vec<i64>, BitCursorError> {
    let mut cursor: BitCursor = data.into();
    cursor.signed_exp_golomb_values().collect()
}
