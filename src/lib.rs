//! # CRC
//! Table-driven [CRC](https://en.wikipedia.org/wiki/Cyclic_redundancy_check) checksums for 8, 16 and
//! 32 bit registers. The polynomial, the bit order (forward or reflected) and the seed are configurable,
//! and every width ships a catalog of well-known named polynomials.

//! ## Example
//! ```
//! extern crate crc_rs as crc;
//! use crc::{Config, Crc16, Crc16Type, Crc32, Endianness};
//!
//! fn main() {
//!     // CRC-16/ARC: the default 16-bit engine.
//!     let mut crc16 = Crc16::new();
//!     crc16.add_bytes(b"123456789");
//!     assert_eq!(crc16.value(), 0xbb3d);
//!     assert_eq!(crc16.to_string(), "bb3d");
//!
//!     // Bytes can also be fed one at a time.
//!     crc16.reset();
//!     for byte in b"123456789" {
//!         crc16.add_byte(*byte);
//!     }
//!     assert_eq!(crc16.value(), 0xbb3d);
//!     assert_eq!(crc16.byte_count(), 9);
//!
//!     // CRC-32/ISO-HDLC needs an all-ones seed and output mask.
//!     let mut crc32 = Crc32::with_config(Config::default().with_seed(0xffff_ffff));
//!     crc32.add_bytes(b"123456789");
//!     assert_eq!(crc32.finalize(0xffff_ffff), 0xcbf4_3926);
//!
//!     // Named standards resolve at construction time.
//!     let xmodem = Crc16::with_standard(Crc16Type::Ccitt, Endianness::Forward, 0);
//!     assert_eq!(xmodem.polynomial(), 0x2021);
//!     assert!(Crc16::from_name("no-such-crc", Endianness::Reflected, 0).is_err());
//! }
//! ```

extern crate log;

use std::fmt;

pub mod bitwise;
pub mod catalog;
pub mod config;
pub mod crc;
pub mod table;
pub mod width;

pub use crate::catalog::{Crc16Type, Crc32Type, Crc8Type, Standard};
pub use crate::config::{Config, Endianness};
pub use crate::crc::{Crc, Crc16, Crc32, Crc8};
pub use crate::width::Width;

/// Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A name could not be resolved into a configuration value. The value describes what was rejected.
    InvalidConfiguration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for Error {}
