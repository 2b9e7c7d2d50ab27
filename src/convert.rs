use crate::{error::Error, integer::Integer};

/// Checks that `alphabet_len` glyphs can render every digit of `radix`.
pub fn validate(radix: usize, alphabet_len: usize) -> Result<(), Error> {
    if alphabet_len != radix {
        return Err(Error::AlphabetLengthMismatch {
            radix,
            length: alphabet_len,
        });
    }
    if radix < 2 {
        return Err(Error::RadixTooSmall { radix });
    }
    Ok(())
}

/// Appends the numeral for `value` to `output` and returns the number of glyphs written.
///
/// In bijective mode the alphabet's glyphs stand for 1..=radix, so there is no zero digit: zero renders as the empty
/// string and every place that would hold a zero borrows one from the next place instead. Nothing is written when an
/// error is returned.
pub fn convert_into(
    value: impl Integer,
    radix: usize,
    alphabet: impl AsRef<[char]>,
    bijective: bool,
    output: &mut String,
) -> Result<usize, Error> {
    let alphabet = alphabet.as_ref();
    let mut number = match validate(radix, alphabet.len()).and_then(|()| value.magnitude()) {
        Ok(number) => number,
        Err(error) => {
            log::debug!("Rejected conversion of {} in radix {}: {}", value, radix, error);
            return Err(error);
        }
    };
    let base = radix as u128;
    let mut digits = Vec::new();
    while number != 0 {
        let (mut quotient, mut remainder) = (number / base, number % base);
        if bijective && remainder == 0 {
            remainder = base;
            quotient -= 1;
        }
        let index = if bijective { remainder - 1 } else { remainder };
        digits.push(alphabet[index as usize]);
        number = quotient;
    }
    if digits.is_empty() && !bijective {
        digits.push(alphabet[0]);
    }
    output.extend(digits.iter().rev());
    log::trace!("Converted {} in radix {} (bijective: {}) to {} digits", value, radix, bijective, digits.len());
    Ok(digits.len())
}

/// Renders `value` as a numeral in `radix` using the glyphs of `alphabet`.
pub fn convert(value: impl Integer, radix: usize, alphabet: impl AsRef<[char]>, bijective: bool) -> Result<String, Error> {
    let mut output = String::new();
    convert_into(value, radix, alphabet, bijective, &mut output)?;
    Ok(output)
}
