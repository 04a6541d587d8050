//! Well-known CRC polynomials per register width.
//!
//! All constants are given in reflected form, the default bit order of every engine.
//! [`Config::from_standard`](crate::Config::from_standard) converts them when a forward engine is requested.

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::width::Width;
use crate::Error;

/// A named polynomial of one register width.
pub trait Standard:
    Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = Error> + 'static
{
    type Width: Width;

    /// Every standard known for this width, in declaration order.
    const ALL: &'static [Self];

    /// The polynomial in reflected form.
    fn polynomial(self) -> Self::Width;

    /// Canonical name, e.g. `"ISO_3309"`.
    fn name(self) -> &'static str;
}

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident: $width:ty {
            $($variant:ident => $label:literal, $poly:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl Standard for $name {
            type Width = $width;

            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn polynomial(self) -> $width {
                match self {
                    $($name::$variant => $poly,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Error> {
                lookup(s)
            }
        }
    };
}

catalog! {
    /// 8-bit standards.
    Crc8Type: u8 {
        Autosar => "AUTOSAR", 0xf4;
        Bluetooth => "Bluetooth", 0xe5;
        Ccitt => "CCITT", 0xe0;
        Dallas => "Dallas", 0x8c;
        Darc => "DARC", 0x9c;
        Dvb => "DVB", 0xab;
        GsmB => "GSM_B", 0x92;
        Maxim => "Maxim", 0x8c;
        SaeJ1850 => "SAE_J1850", 0xb8;
        Wcdma => "WCDMA", 0xd9;
    }
}

catalog! {
    /// 16-bit standards.
    Crc16Type: u16 {
        Arinc => "ARINC", 0xd405;
        Ccitt => "CCITT", 0x8404;
        Cdma2000 => "CDMA2000", 0xe613;
        Chakravarty => "Chakravarty", 0xa8f4;
        Dect => "DECT", 0x91a0;
        Dnp => "DNP", 0xa6bc;
        Ibm => "IBM", 0xa001;
        OpenSafetyA => "OpenSafety_A", 0xac9a;
        OpenSafetyB => "OpenSafety_B", 0xdaae;
        Profibus => "Profibus", 0xf3b8;
        T10 => "T10", 0xedd1;
    }
}

catalog! {
    /// 32-bit standards.
    Crc32Type: u32 {
        Castagnoli => "Castagnoli", 0x82f6_3b78;
        Iso3309 => "ISO_3309", 0xedb8_8320;
        Koopman => "Koopman", 0xeb31_d82e;
        Koopman2 => "Koopman_2", 0x992c_1a4c;
        Q => "Q", 0xd582_8281;
    }
}

/// Names match case-insensitively, with `-` and `_` interchangeable.
fn same_name(canonical: &str, candidate: &str) -> bool {
    fn fold(byte: u8) -> u8 {
        match byte {
            b'-' => b'_',
            _ => byte.to_ascii_uppercase(),
        }
    }
    canonical.len() == candidate.len()
        && canonical
            .bytes()
            .zip(candidate.bytes())
            .all(|(a, b)| fold(a) == fold(b))
}

fn lookup<S: Standard>(name: &str) -> Result<S, Error> {
    match S::ALL.iter().copied().find(|s| same_name(s.name(), name)) {
        Some(standard) => Ok(standard),
        None => {
            warn!("no {}-bit CRC standard named {:?}", <S::Width as Width>::WIDTH, name);
            Err(Error::InvalidConfiguration(format!(
                "unknown {}-bit CRC standard: {}",
                <S::Width as Width>::WIDTH,
                name
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_constants() {
        assert_eq!(Crc8Type::Ccitt.polynomial(), 0xe0);
        assert_eq!(Crc8Type::Dallas.polynomial(), Crc8Type::Maxim.polynomial());
        assert_eq!(Crc16Type::Ibm.polynomial(), 0xa001);
        assert_eq!(Crc16Type::T10.polynomial(), 0xedd1);
        assert_eq!(Crc32Type::Castagnoli.polynomial(), 0x82f6_3b78);
        assert_eq!(Crc32Type::Q.polynomial(), 0xd582_8281);
        assert_eq!(Crc8Type::ALL.len(), 10);
        assert_eq!(Crc16Type::ALL.len(), 11);
        assert_eq!(Crc32Type::ALL.len(), 5);
    }

    #[test]
    fn defaults_come_from_the_catalog() {
        assert_eq!(<u8 as Width>::DEFAULT_POLYNOMIAL, Crc8Type::Ccitt.polynomial());
        assert_eq!(<u16 as Width>::DEFAULT_POLYNOMIAL, Crc16Type::Ibm.polynomial());
        assert_eq!(<u32 as Width>::DEFAULT_POLYNOMIAL, Crc32Type::Iso3309.polynomial());
    }

    #[test]
    fn names_round_trip() {
        for standard in Crc16Type::ALL {
            assert_eq!(standard.to_string().parse::<Crc16Type>(), Ok(*standard));
        }
        for standard in Crc32Type::ALL {
            assert_eq!(standard.name().parse::<Crc32Type>(), Ok(*standard));
        }
    }

    #[test]
    fn lookup_is_lenient_about_case_and_separator() {
        assert_eq!("iso-3309".parse::<Crc32Type>(), Ok(Crc32Type::Iso3309));
        assert_eq!("gsm_b".parse::<Crc8Type>(), Ok(Crc8Type::GsmB));
        assert_eq!("OPENSAFETY-B".parse::<Crc16Type>(), Ok(Crc16Type::OpenSafetyB));
    }

    #[test]
    fn unknown_names_fail() {
        assert!("".parse::<Crc8Type>().is_err());
        assert!("ISO_33090".parse::<Crc32Type>().is_err());
        match "IBM".parse::<Crc32Type>() {
            Err(Error::InvalidConfiguration(reason)) => assert!(reason.contains("32-bit")),
            Ok(_) => panic!("IBM is not a 32-bit standard"),
        }
    }
}
