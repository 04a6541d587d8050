//! Bit-at-a-time CRC register without a lookup table.
//!
//! Much slower than [`Crc`](crate::Crc) but obviously correct, so it serves as the oracle the
//! table-driven engine is checked against.

use crate::config::{Config, Endianness};
use crate::width::Width;

pub struct BitwiseCrc<W: Width> {
    crc: W,
    polynomial: W,
    // Forward or Reflected
    endianness: Endianness,
}

impl<W: Width> BitwiseCrc<W> {
    fn step_forward(&mut self, byte: u8) {
        self.crc = self.crc ^ W::from_top_byte(byte);

        for _ in 0..8 {
            if self.crc & W::TOP_BIT != W::ZERO {
                self.crc = (self.crc << 1) ^ self.polynomial;
            } else {
                self.crc = self.crc << 1;
            }
        }
    }

    fn step_reflected(&mut self, byte: u8) {
        self.crc = self.crc ^ W::from_byte(byte);
        for _ in 0..8 {
            if self.crc & W::LOW_BIT == W::LOW_BIT {
                self.crc = (self.crc >> 1) ^ self.polynomial;
            } else {
                self.crc = self.crc >> 1;
            }
        }
    }
}

impl<W: Width> BitwiseCrc<W> {
    pub fn new(config: Config<W>) -> Self {
        BitwiseCrc {
            crc: config.seed,
            polynomial: config.polynomial,
            endianness: config.endianness,
        }
    }

    pub fn step(&mut self, byte: u8) {
        match self.endianness {
            Endianness::Forward => self.step_forward(byte),
            Endianness::Reflected => self.step_reflected(byte),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.step(byte);
        }
    }

    pub fn value(&self) -> W {
        self.crc
    }

    /// One-shot register value of `data` under `config`.
    pub fn checksum(config: Config<W>, data: &[u8]) -> W {
        let mut crc = Self::new(config);
        crc.update(data);
        crc.value()
    }
}
