use std::fmt;

use log::{debug, trace};

use crate::catalog::Standard;
use crate::config::{Config, Endianness};
use crate::table::{self, Table};
use crate::width::Width;
use crate::Error;

/// Table-driven CRC engine for one register width.
///
/// The lookup table always matches the current polynomial and bit order. Every setter that
/// actually changes a value restarts the computation: the register goes back to the seed and
/// the byte count to zero. Setting a value equal to the current one does nothing.
#[derive(Clone)]
pub struct Crc<W: Width> {
    polynomial: W,
    endianness: Endianness,
    seed: W,
    /// Running register value
    crc: W,
    /// Bytes consumed since the last reset
    byte_count: u64,
    table: Table<W>,
}

pub type Crc8 = Crc<u8>;
pub type Crc16 = Crc<u16>;
pub type Crc32 = Crc<u32>;

impl<W: Width> Crc<W> {
    /// Engine with the width's default polynomial, reflected bit order and a zero seed.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Reflected engine with a zero seed.
    pub fn with_polynomial(polynomial: W) -> Self {
        Self::with_config(Config::new(polynomial))
    }

    pub fn with_config(config: Config<W>) -> Self {
        Crc {
            polynomial: config.polynomial,
            endianness: config.endianness,
            seed: config.seed,
            crc: config.seed,
            byte_count: 0,
            table: table::generate(config.polynomial, config.endianness),
        }
    }

    /// Engine for a catalog standard. A forward engine stores the bit-reversed catalog constant.
    pub fn with_standard<S: Standard<Width = W>>(standard: S, endianness: Endianness, seed: W) -> Self {
        Self::with_config(Config::from_standard(standard, endianness).with_seed(seed))
    }

    /// Engine for a catalog standard looked up by name.
    /// # Arguments
    /// * `name` - Catalog name of the standard, e.g. `"ISO_3309"`.
    /// * `endianness` - Bit order of the engine.
    /// * `seed` - Initial register value.
    pub fn from_name(name: &str, endianness: Endianness, seed: W) -> Result<Self, Error> {
        let config = Config::from_name(name, endianness)?.with_seed(seed);
        Ok(Self::with_config(config))
    }

    pub fn config(&self) -> Config<W> {
        Config {
            polynomial: self.polynomial,
            endianness: self.endianness,
            seed: self.seed,
        }
    }

    /// Applies several settings at once. The table is regenerated at most once, and only if
    /// the polynomial or the bit order changed; any change restarts the computation.
    pub fn configure(&mut self, config: Config<W>) {
        let current = self.config();
        if config == current {
            return;
        }
        debug!(
            "reconfigure crc-{}: polynomial=0x{:x}, endianness={}, seed=0x{:x}",
            W::WIDTH, config.polynomial, config.endianness, config.seed
        );
        self.seed = config.seed;
        if config.polynomial != current.polynomial || config.endianness != current.endianness {
            self.polynomial = config.polynomial;
            self.endianness = config.endianness;
            self.rebuild_table();
        }
        self.reset();
    }

    pub fn polynomial(&self) -> W {
        self.polynomial
    }

    /// Stores a polynomial already in the representation of the current bit order.
    pub fn set_polynomial(&mut self, polynomial: W) {
        if self.polynomial != polynomial {
            debug!("crc-{}: polynomial 0x{:x} -> 0x{:x}", W::WIDTH, self.polynomial, polynomial);
            self.polynomial = polynomial;
            self.rebuild_table();
            self.reset();
        }
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Changes the bit order only; the polynomial is reinterpreted, not converted.
    /// Use [`Crc::flip_endianness`] to keep the same standard.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        if self.endianness != endianness {
            debug!("crc-{}: endianness {} -> {}", W::WIDTH, self.endianness, endianness);
            self.endianness = endianness;
            self.rebuild_table();
            self.reset();
        }
    }

    pub fn seed(&self) -> W {
        self.seed
    }

    /// The table does not depend on the seed, so only the register and byte count are reset.
    pub fn set_seed(&mut self, seed: W) {
        if self.seed != seed {
            debug!("crc-{}: seed 0x{:x} -> 0x{:x}", W::WIDTH, self.seed, seed);
            self.seed = seed;
            self.reset();
        }
    }

    /// Switches the bit order and converts the polynomial into the matching representation.
    pub fn flip_endianness(&mut self) {
        let flipped = self.config().flipped();
        debug!(
            "crc-{}: flip endianness to {}, polynomial 0x{:x} -> 0x{:x}",
            W::WIDTH, flipped.endianness, self.polynomial, flipped.polynomial
        );
        self.polynomial = flipped.polynomial;
        self.endianness = flipped.endianness;
        self.rebuild_table();
        self.reset();
    }

    /// Current register value.
    pub fn value(&self) -> W {
        self.crc
    }

    /// Register value XORed with an output mask. The register itself is left untouched.
    pub fn finalize(&self, xor_out: W) -> W {
        self.crc ^ xor_out
    }

    pub fn byte_count(&self) -> u64 {
        self.byte_count
    }

    pub fn table(&self) -> &Table<W> {
        &self.table
    }

    /// Rewinds to the seed without changing the configuration.
    pub fn reset(&mut self) {
        self.crc = self.seed;
        self.byte_count = 0;
    }

    pub fn add_byte(&mut self, byte: u8) {
        self.crc = table::update(self.crc, &self.table, byte, self.endianness);
        self.byte_count = self.byte_count.wrapping_add(1);
    }

    pub fn add_bytes(&mut self, data: &[u8]) {
        trace!("crc-{}: add {} bytes", W::WIDTH, data.len());
        for &byte in data {
            self.add_byte(byte);
        }
    }

    fn rebuild_table(&mut self) {
        trace!(
            "crc-{}: regenerate table, polynomial=0x{:x}, endianness={}",
            W::WIDTH, self.polynomial, self.endianness
        );
        self.table = table::generate(self.polynomial, self.endianness);
    }
}

impl<W: Width> Default for Crc<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Width> Extend<u8> for Crc<W> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.add_byte(byte);
        }
    }
}

impl<'a, W: Width> Extend<&'a u8> for Crc<W> {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<W: Width> fmt::Debug for Crc<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crc")
            .field("width", &W::WIDTH)
            .field("polynomial", &format_args!("0x{:0width$x}", self.polynomial, width = W::HEX_DIGITS))
            .field("endianness", &self.endianness)
            .field("seed", &format_args!("0x{:0width$x}", self.seed, width = W::HEX_DIGITS))
            .field("crc", &format_args!("0x{:0width$x}", self.crc, width = W::HEX_DIGITS))
            .field("byte_count", &self.byte_count)
            .finish()
    }
}

/// Lowercase hex of the register, zero-padded to the width: 2, 4 or 8 digits.
impl<W: Width> fmt::Display for Crc<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", self.crc, width = W::HEX_DIGITS)
    }
}

impl<W: Width> fmt::LowerHex for Crc<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.crc, f)
    }
}

impl<W: Width> fmt::UpperHex for Crc<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.crc, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Crc16Type;

    #[test]
    fn seed_change_keeps_table() {
        let mut crc = Crc16::with_standard(Crc16Type::Ibm, Endianness::Reflected, 0);
        let before = *crc.table();
        crc.set_seed(0xffff);
        assert_eq!(crc.table(), &before);
        assert_eq!(crc.value(), 0xffff);
    }

    #[test]
    fn configure_with_same_config_is_a_no_op() {
        let mut crc = Crc16::new();
        crc.add_bytes(&[0x80, 0x00]);
        crc.configure(Config::default());
        assert_eq!(crc.value(), 0xc061);
        assert_eq!(crc.byte_count(), 2);
    }

    #[test]
    fn configure_regenerates_table_once() {
        let mut crc = Crc16::new();
        crc.add_byte(0x31);
        let forward = Config::new(0x1021).with_endianness(Endianness::Forward).with_seed(0xffff);
        crc.configure(forward);
        assert_eq!(crc.table(), &table::generate(0x1021u16, Endianness::Forward));
        assert_eq!(crc.value(), 0xffff);
        assert_eq!(crc.byte_count(), 0);
        crc.add_bytes(b"123456789");
        // CRC-16/IBM-3740
        assert_eq!(crc.value(), 0x29b1);
    }

    #[test]
    fn debug_omits_table() {
        let crc = Crc8::new();
        let text = format!("{:?}", crc);
        assert!(text.contains("polynomial: 0xe0"));
        assert!(text.contains("byte_count: 0"));
        assert!(!text.contains("table"));
    }
}
