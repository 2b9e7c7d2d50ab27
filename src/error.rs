use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The alphabet does not hold exactly one glyph per digit value.
    AlphabetLengthMismatch { radix: usize, length: usize },
    /// Radix 0 and 1 have no terminating positional representation.
    RadixTooSmall { radix: usize },
    NegativeValue { value: i128 },
}

impl Error {
    /// Returns true for errors caused by the radix/alphabet configuration rather than by the converted value.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::AlphabetLengthMismatch { .. } | Self::RadixTooSmall { .. })
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlphabetLengthMismatch { radix, length } => {
                write!(f, "Alphabet of {} characters does not match radix {}", length, radix)
            }
            Self::RadixTooSmall { radix } => write!(f, "Radix {} is too small (at least 2 required)", radix),
            Self::NegativeValue { value } => write!(f, "Negative value {} cannot be converted", value),
        }
    }
}
