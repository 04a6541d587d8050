use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitXor, Shl, Shr};

use crate::catalog::{Crc16Type, Crc32Type, Crc8Type, Standard};

/// Unsigned register type of a CRC engine.
///
/// The table-driven algorithm is identical for every width; only the shift amounts
/// and masks derived from `WIDTH` differ. A table always has 256 entries whatever the width.
pub trait Width:
    Copy
    + Default
    + Eq
    + Hash
    + fmt::Debug
    + fmt::LowerHex
    + fmt::UpperHex
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + 'static
{
    /// Number of bits in the register.
    const WIDTH: u32;
    /// Number of hex digits needed to render a full register.
    const HEX_DIGITS: usize;
    const ZERO: Self;
    const LOW_BIT: Self;
    /// `1 << (WIDTH - 1)`
    const TOP_BIT: Self;
    /// Polynomial used when none is given, in reflected form.
    const DEFAULT_POLYNOMIAL: Self;

    /// Catalog of named polynomials for this width.
    type Standard: Standard<Width = Self>;

    /// Places `byte` in the lowest byte of the register.
    fn from_byte(byte: u8) -> Self;

    /// Lowest byte of the register.
    fn low_byte(self) -> u8;

    /// Shifts the register left by one whole byte. An 8-bit register shifts out completely.
    fn shift_in_byte(self) -> Self;

    /// Shifts the register right by one whole byte. An 8-bit register shifts out completely.
    fn shift_out_byte(self) -> Self;

    /// Reverses the bit order within the register: bit 0 <-> bit WIDTH-1, bit 1 <-> bit WIDTH-2, ...
    fn reverse(self) -> Self;

    /// Places `byte` in the highest byte of the register.
    #[inline]
    fn from_top_byte(byte: u8) -> Self {
        Self::from_byte(byte) << (Self::WIDTH - 8)
    }

    /// Highest byte of the register.
    #[inline]
    fn top_byte(self) -> u8 {
        (self >> (Self::WIDTH - 8)).low_byte()
    }
}

macro_rules! impl_width {
    ($ty:ty, $standard:ty, $default:expr) => {
        impl Width for $ty {
            const WIDTH: u32 = <$ty>::BITS;
            const HEX_DIGITS: usize = (<$ty>::BITS / 4) as usize;
            const ZERO: Self = 0;
            const LOW_BIT: Self = 1;
            const TOP_BIT: Self = 1 << (<$ty>::BITS - 1);
            const DEFAULT_POLYNOMIAL: Self = $default;

            type Standard = $standard;

            #[inline]
            fn from_byte(byte: u8) -> Self {
                Self::from(byte)
            }

            #[inline]
            fn low_byte(self) -> u8 {
                self as u8
            }

            #[inline]
            fn shift_in_byte(self) -> Self {
                self.checked_shl(8).unwrap_or(0)
            }

            #[inline]
            fn shift_out_byte(self) -> Self {
                self.checked_shr(8).unwrap_or(0)
            }

            #[inline]
            fn reverse(self) -> Self {
                self.reverse_bits()
            }
        }
    };
}

// CCITT
impl_width!(u8, Crc8Type, 0xe0);
// IBM
impl_width!(u16, Crc16Type, 0xa001);
// ISO 3309
impl_width!(u32, Crc32Type, 0xedb8_8320);
