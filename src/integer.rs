use crate::error::Error;
use std::fmt;

/// A primitive integer that can be rendered as a numeral.
pub trait Integer: Copy + fmt::Display {
    /// Returns the value as an unsigned magnitude, or `Error::NegativeValue` if it is below zero.
    fn magnitude(self) -> Result<u128, Error>;
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Integer for $ty {
                fn magnitude(self) -> Result<u128, Error> {
                    Ok(self as u128)
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl Integer for $ty {
                fn magnitude(self) -> Result<u128, Error> {
                    if self < 0 {
                        return Err(Error::NegativeValue { value: self as i128 });
                    }
                    Ok(self as u128)
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);
