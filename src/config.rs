use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::catalog::Standard;
use crate::width::Width;
use crate::Error;

/// Bit order in which the register consumes data.
///
/// This is the classic CRC forward/reflected distinction, not the byte order of multi-byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most significant bit first (non-reflected).
    Forward,
    /// Least significant bit first (reflected).
    Reflected,
}

impl Endianness {
    /// The other bit order.
    pub fn flipped(self) -> Self {
        match self {
            Endianness::Forward => Endianness::Reflected,
            Endianness::Reflected => Endianness::Forward,
        }
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Endianness::Reflected
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Forward => f.write_str("forward"),
            Endianness::Reflected => f.write_str("reflected"),
        }
    }
}

impl FromStr for Endianness {
    type Err = Error;

    /// Accepts the CRC terms as well as the big/little names used by older CRC libraries.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "forward" | "normal" | "msb" | "big" => Ok(Endianness::Forward),
            "reflected" | "reversed" | "lsb" | "little" => Ok(Endianness::Reflected),
            _ => {
                warn!("unknown bit order: {}", s);
                Err(Error::InvalidConfiguration(format!("unknown bit order: {}", s)))
            }
        }
    }
}

/// Polynomial, bit order and seed of a CRC engine.
///
/// `polynomial` is stored in the representation that matches `endianness`: the reflected form of a
/// standard is the bit reversal of its forward form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config<W: Width> {
    pub polynomial: W,
    pub endianness: Endianness,
    pub seed: W,
}

impl<W: Width> Config<W> {
    /// Reflected configuration with a zero seed.
    pub fn new(polynomial: W) -> Self {
        Config {
            polynomial: polynomial,
            endianness: Endianness::Reflected,
            seed: W::ZERO,
        }
    }

    /// Configuration for a catalog standard. Catalog polynomials are reflected, so asking for
    /// `Forward` stores the bit-reversed constant.
    pub fn from_standard<S: Standard<Width = W>>(standard: S, endianness: Endianness) -> Self {
        let polynomial = match endianness {
            Endianness::Reflected => standard.polynomial(),
            Endianness::Forward => standard.polynomial().reverse(),
        };
        Config {
            polynomial: polynomial,
            endianness: endianness,
            seed: W::ZERO,
        }
    }

    /// Like [`Config::from_standard`], resolving the standard by name.
    pub fn from_name(name: &str, endianness: Endianness) -> Result<Self, Error> {
        let standard = name.parse::<W::Standard>()?;
        Ok(Self::from_standard(standard, endianness))
    }

    /// Replaces the bit order without touching the polynomial.
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    pub fn with_seed(mut self, seed: W) -> Self {
        self.seed = seed;
        self
    }

    /// Switches the bit order and converts the polynomial into the other representation.
    /// Applying it twice gives back the original configuration.
    pub fn flipped(self) -> Self {
        Config {
            polynomial: self.polynomial.reverse(),
            endianness: self.endianness.flipped(),
            seed: self.seed,
        }
    }
}

impl<W: Width> Default for Config<W> {
    fn default() -> Self {
        Self::new(W::DEFAULT_POLYNOMIAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Crc16Type, Crc32Type};

    #[test]
    fn defaults_are_reflected_with_zero_seed() {
        let config = Config::<u16>::default();
        assert_eq!(config.polynomial, 0xa001);
        assert_eq!(config.endianness, Endianness::Reflected);
        assert_eq!(config.seed, 0);
        assert_eq!(Config::<u8>::default().polynomial, 0xe0);
        assert_eq!(Config::<u32>::default().polynomial, 0xedb8_8320);
    }

    #[test]
    fn forward_standard_is_bit_reversed() {
        let reflected = Config::from_standard(Crc32Type::Iso3309, Endianness::Reflected);
        let forward = Config::from_standard(Crc32Type::Iso3309, Endianness::Forward);
        assert_eq!(reflected.polynomial, 0xedb8_8320);
        assert_eq!(forward.polynomial, 0x04c1_1db7);
        assert_eq!(forward.endianness, Endianness::Forward);
        assert_eq!(reflected.flipped(), forward);
    }

    #[test]
    fn flipping_twice_is_identity() {
        let config = Config::from_standard(Crc16Type::Dnp, Endianness::Reflected).with_seed(0xffff);
        assert_eq!(config.flipped().flipped(), config);
        assert_eq!(config.flipped().seed, 0xffff);
    }

    #[test]
    fn unknown_name_is_rejected() {
        match Config::<u16>::from_name("Castagnoli", Endianness::Reflected) {
            Err(Error::InvalidConfiguration(_)) => {}
            Ok(_) => panic!("resolved a 32-bit standard as a 16-bit one"),
        }
    }

    #[test]
    fn endianness_parses_both_vocabularies() {
        assert_eq!("Big".parse::<Endianness>(), Ok(Endianness::Forward));
        assert_eq!("little".parse::<Endianness>(), Ok(Endianness::Reflected));
        assert_eq!("REFLECTED".parse::<Endianness>(), Ok(Endianness::Reflected));
        assert!("middle".parse::<Endianness>().is_err());
        assert_eq!(Endianness::Forward.to_string(), "forward");
    }
}
