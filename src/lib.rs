//! Integer to string conversion in any radix with a caller supplied alphabet, including bijective (zero-less)
//! numeral systems such as spreadsheet column names.
//!
//! In a bijective system the glyphs stand for 1..=radix. Using `123456789X` as a base 10 alphabet, the result is a
//! normal decimal number where every `0` has been replaced with `X` after borrowing one from the place to its left,
//! so 302 becomes `2X2`:
//!
//! ```
//! use radix_numeral::{convert, SPREADSHEET_COLUMN};
//!
//! let alphabet: Vec<char> = "123456789X".chars().collect();
//! assert_eq!(convert(10, 10, &alphabet, true).unwrap(), "X");
//! assert_eq!(convert(20, 10, &alphabet, true).unwrap(), "1X");
//! assert_eq!(convert(302, 10, &alphabet, true).unwrap(), "2X2");
//!
//! assert_eq!(SPREADSHEET_COLUMN.format(27).unwrap(), "AA");
//! ```

pub mod alphabet;
pub mod convert;
pub mod error;
pub mod integer;
pub mod preset;

pub use self::{
    alphabet::Alphabet,
    convert::{convert, convert_into, validate},
    error::Error,
    integer::Integer,
    preset::{Preset, DECIMAL, HEXADECIMAL, SPREADSHEET_COLUMN},
};
