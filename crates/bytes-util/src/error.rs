use std::io;

/// Errors that can occur when reading from a [`BitCursor`](crate::BitCursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BitCursorError {
    /// There are not enough bits left to satisfy the read.
    ///
    /// Decode loops treat this as the regular "no more data" signal.
    #[error("end of stream: no bits remaining")]
    EndOfStream,
    /// The requested value is wider than the integer type that holds it.
    #[error("requested width of {requested} bits exceeds the maximum of {max}")]
    WidthOverflow {
        /// Number of bits the read would need.
        requested: u32,
        /// Number of bits the result type can hold.
        max: u32,
    },
}

impl BitCursorError {
    /// Returns `true` for [`BitCursorError::EndOfStream`].
    #[inline(always)]
    #[must_use]
    pub const fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}

impl From<BitCursorError> for io::Error {
    fn from(err: BitCursorError) -> Self {
        let kind = match err {
            BitCursorError::EndOfStream => io::ErrorKind::UnexpectedEof,
            BitCursorError::WidthOverflow { .. } => io::ErrorKind::InvalidInput,
        };

        io::Error::new(kind, err)
    }
}
