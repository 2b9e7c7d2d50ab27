use crate::{
    alphabet::Alphabet,
    convert::{convert, convert_into, validate},
    error::Error,
    integer::Integer,
};
use serde::{Deserialize, Serialize};

/// A reusable radix, alphabet and bijective flag.
///
/// Presets are validated on construction and never change afterwards, so a preset can be shared freely and
/// `format` only fails for negative values.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PresetConfig", into = "PresetConfig")]
pub struct Preset {
    alphabet: Alphabet,
    radix: usize,
    bijective: bool,
}

/// Serialized form of a preset. `radix` defaults to the alphabet length.
#[derive(Serialize, Deserialize)]
struct PresetConfig {
    alphabet: String,
    #[serde(default)]
    radix: Option<usize>,
    #[serde(default)]
    bijective: bool,
}

impl TryFrom<PresetConfig> for Preset {
    type Error = Error;

    fn try_from(config: PresetConfig) -> Result<Self, Error> {
        let alphabet = Alphabet::from(config.alphabet);
        let radix = config.radix.unwrap_or(alphabet.len());
        Self::new(alphabet, radix, config.bijective)
    }
}

impl From<Preset> for PresetConfig {
    fn from(preset: Preset) -> Self {
        Self {
            alphabet: preset.alphabet.to_string(),
            radix: Some(preset.radix),
            bijective: preset.bijective,
        }
    }
}

impl Preset {
    pub fn new(alphabet: impl Into<Alphabet>, radix: usize, bijective: bool) -> Result<Self, Error> {
        let alphabet = alphabet.into();
        if let Err(error) = validate(radix, alphabet.len()) {
            log::debug!("Rejected preset with alphabet \"{}\": {}", alphabet, error);
            return Err(error);
        }
        Ok(Self {
            alphabet,
            radix,
            bijective,
        })
    }

    pub fn format(&self, value: impl Integer) -> Result<String, Error> {
        convert(value, self.radix, &self.alphabet, self.bijective)
    }

    pub fn format_into(&self, value: impl Integer, output: &mut String) -> Result<usize, Error> {
        convert_into(value, self.radix, &self.alphabet, self.bijective, output)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn radix(&self) -> usize {
        self.radix
    }

    pub fn is_bijective(&self) -> bool {
        self.bijective
    }
}

const DECIMAL_GLYPHS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const HEXADECIMAL_GLYPHS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

const LATIN_GLYPHS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W',
    'X', 'Y', 'Z',
];

pub const DECIMAL: Preset = Preset {
    alphabet: Alphabet::from_static(&DECIMAL_GLYPHS),
    radix: 10,
    bijective: false,
};

pub const HEXADECIMAL: Preset = Preset {
    alphabet: Alphabet::from_static(&HEXADECIMAL_GLYPHS),
    radix: 16,
    bijective: false,
};

/// Spreadsheet column names: A..Z, then AA, AB, ...
pub const SPREADSHEET_COLUMN: Preset = Preset {
    alphabet: Alphabet::from_static(&LATIN_GLYPHS),
    radix: 26,
    bijective: true,
};

#[cfg(test)]
mod tests {
    use super::{Preset, DECIMAL, HEXADECIMAL, SPREADSHEET_COLUMN};
    use crate::error::Error;
    use proptest::prelude::*;

    #[test]
    fn presets_are_valid() {
        for preset in [DECIMAL, HEXADECIMAL, SPREADSHEET_COLUMN] {
            assert_eq!(
                Preset::new(preset.alphabet().clone(), preset.radix(), preset.is_bijective()),
                Ok(preset)
            );
        }
    }

    #[test]
    fn decimal() {
        assert_eq!(DECIMAL.format(0), Ok("0".to_string()));
        assert_eq!(DECIMAL.format(7u8), Ok("7".to_string()));
        assert_eq!(DECIMAL.format(1101), Ok("1101".to_string()));
        assert_eq!(DECIMAL.format(-1), Err(Error::NegativeValue { value: -1 }));
    }

    #[test]
    fn hexadecimal() {
        assert_eq!(HEXADECIMAL.format(0), Ok("0".to_string()));
        assert_eq!(HEXADECIMAL.format(255), Ok("FF".to_string()));
        assert_eq!(HEXADECIMAL.format(0xDEADBEEFu32), Ok("DEADBEEF".to_string()));
        assert_eq!(HEXADECIMAL.format(4096), Ok("1000".to_string()));
    }

    #[test]
    fn spreadsheet_column() {
        assert_eq!(SPREADSHEET_COLUMN.format(0), Ok("".to_string()));
        assert_eq!(SPREADSHEET_COLUMN.format(1), Ok("A".to_string()));
        assert_eq!(SPREADSHEET_COLUMN.format(26), Ok("Z".to_string()));
        assert_eq!(SPREADSHEET_COLUMN.format(27), Ok("AA".to_string()));
        assert_eq!(SPREADSHEET_COLUMN.format(702), Ok("ZZ".to_string()));
        assert_eq!(SPREADSHEET_COLUMN.format(703), Ok("AAA".to_string()));
    }

    #[test]
    fn format_into() {
        let mut output = String::new();
        for column in 1..=3 {
            if column > 1 {
                output.push(',');
            }
            SPREADSHEET_COLUMN.format_into(column, &mut output).unwrap();
        }
        assert_eq!(output, "A,B,C");
    }

    #[test]
    fn new() {
        let preset = Preset::new("123456789X", 10, true).unwrap();
        assert_eq!(preset.format(110), Ok("XX".to_string()));
        assert_eq!(preset.radix(), 10);
        assert!(preset.is_bijective());
        assert_eq!(preset.alphabet().to_string(), "123456789X");

        assert_eq!(Preset::new("0123", 10, false), Err(Error::AlphabetLengthMismatch { radix: 10, length: 4 }));
        assert_eq!(Preset::new("A", 1, true), Err(Error::RadixTooSmall { radix: 1 }));
    }

    #[test]
    fn serialize() {
        let json = serde_json::to_value(&SPREADSHEET_COLUMN).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "alphabet": "ABCDEFGHIJKLMNOPQRSTUVWXYZ", "radix": 26, "bijective": true })
        );
    }

    #[test]
    fn deserialize() {
        let preset: Preset = serde_json::from_str(r#"{ "alphabet": "01234567" }"#).unwrap();
        assert_eq!(preset.radix(), 8);
        assert!(!preset.is_bijective());
        assert_eq!(preset.format(64), Ok("100".to_string()));

        let preset: Preset = serde_json::from_str(r#"{ "alphabet": "ABCDEFGHIJKLMNOPQRSTUVWXYZ", "bijective": true }"#).unwrap();
        assert_eq!(preset, SPREADSHEET_COLUMN);
    }

    #[test]
    fn deserialize_rejects_invalid_configuration() {
        let error = serde_json::from_str::<Preset>(r#"{ "alphabet": "0123", "radix": 10 }"#).unwrap_err();
        assert!(error.to_string().contains("Alphabet of 4 characters does not match radix 10"));

        let error = serde_json::from_str::<Preset>(r#"{ "alphabet": "0" }"#).unwrap_err();
        assert!(error.to_string().contains("Radix 1 is too small"));
    }

    proptest! {
        #[test]
        fn decimal_matches_std(value in any::<i64>()) {
            match DECIMAL.format(value) {
                Ok(numeral) => prop_assert_eq!(numeral, value.to_string()),
                Err(error) => {
                    prop_assert!(value < 0);
                    prop_assert_eq!(error, Error::NegativeValue { value: value as i128 });
                }
            }
        }

        #[test]
        fn hexadecimal_matches_std(value in any::<u64>()) {
            prop_assert_eq!(HEXADECIMAL.format(value).unwrap(), format!("{:X}", value));
        }

        #[test]
        fn serde_keeps_behavior(alphabet in "[a-z]{2,12}", bijective in any::<bool>(), value in any::<u32>()) {
            let preset = Preset::new(alphabet.as_str(), alphabet.len(), bijective).unwrap();
            let json = serde_json::to_string(&preset).unwrap();
            let restored: Preset = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(restored.format(value), preset.format(value));
        }
    }
}
