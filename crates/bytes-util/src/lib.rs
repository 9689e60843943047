//! A forward-only bit cursor over an immutable byte buffer.
//!
//! [`BitCursor`] reads single bits, fixed width bit groups and whole bytes,
//! most significant bit first. It is the building block for bitstream
//! parsers such as the Exp-Golomb decoder in the `expgolomb` crate.
//!
//! ```rust
//! use bytes_util::{BitCursor, BitCursorError};
//!
//! let mut cursor = BitCursor::new(vec![0b1010_0101u8]);
//!
//! assert!(cursor.read_bit()?);
//! assert_eq!(cursor.read_bits_as_uint(3)?, 0b010);
//! assert_eq!(cursor.remaining_bits(), 4);
//! assert_eq!(cursor.read_byte(), Err(BitCursorError::EndOfStream));
//! # Ok::<(), BitCursorError>(())
//! ```
//!
//! ## License
//!
//! This project is licensed under the [MIT](./LICENSE.MIT) or [Apache-2.0](./LICENSE.Apache-2.0) license.
//! You can choose between one of them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod bit_cursor;
mod error;

pub use bit_cursor::BitCursor;
pub use error::BitCursorError;
