//! Lookup table generation and the table-driven byte step.

use crate::config::Endianness;
use crate::width::Width;

/// Per-byte transform of a polynomial: 256 entries whatever the register width.
pub type Table<W> = [W; 256];

/// Builds the lookup table for `polynomial` processed in `endianness` bit order.
///
/// `polynomial` must already be in the representation matching `endianness`.
pub fn generate<W: Width>(polynomial: W, endianness: Endianness) -> Table<W> {
    let mut table = [W::ZERO; 256];
    for (index, entry) in table.iter_mut().enumerate() {
        let byte = index as u8;
        *entry = match endianness {
            Endianness::Forward => forward_entry(polynomial, byte),
            Endianness::Reflected => reflected_entry(polynomial, byte),
        };
    }
    table
}

fn forward_entry<W: Width>(polynomial: W, byte: u8) -> W {
    let mut value = W::from_top_byte(byte);
    for _ in 0..8 {
        if value & W::TOP_BIT != W::ZERO {
            value = (value << 1) ^ polynomial;
        } else {
            value = value << 1;
        }
    }
    value
}

fn reflected_entry<W: Width>(polynomial: W, byte: u8) -> W {
    let mut value = W::from_byte(byte);
    for _ in 0..8 {
        if value & W::LOW_BIT != W::ZERO {
            value = (value >> 1) ^ polynomial;
        } else {
            value = value >> 1;
        }
    }
    value
}

/// Feeds one byte into `crc`, returning the new register value.
///
/// For an 8-bit register both bit orders reduce to `table[crc ^ byte]`: the whole register
/// is shifted out and the top byte and low byte are the same byte.
#[inline]
pub fn update<W: Width>(crc: W, table: &Table<W>, byte: u8, endianness: Endianness) -> W {
    match endianness {
        Endianness::Forward => crc.shift_in_byte() ^ table[usize::from(crc.top_byte() ^ byte)],
        Endianness::Reflected => crc.shift_out_byte() ^ table[usize::from(crc.low_byte() ^ byte)],
    }
}
