use crate::and::AndExt;
use crate::character::minus;
use crate::cursors::CharCursor;
use crate::filter_map::FilterMapExt;
use crate::many::many1;
use crate::optional::OptionalExt;
use crate::parser::Parser;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, FromPrimitive, Zero};

use super::digits::digit;

/// Folds decimal digits into a `T`, most significant first
///
/// `step` combines the shifted accumulator with the next digit. Returns `None`
/// as soon as any intermediate value leaves the range of `T`.
fn accumulate<T, F>(digits: &[char], step: F) -> Option<T>
where
    T: Zero + FromPrimitive + CheckedMul,
    F: Fn(&T, &T) -> Option<T>,
{
    let ten = T::from_u8(10)?;
    digits.iter().try_fold(T::zero(), |acc, c| {
        let digit = T::from_u32(c.to_digit(10)?)?;
        step(&acc.checked_mul(&ten)?, &digit)
    })
}

/// Unsigned integer: one or more decimal digits
///
/// A numeral that does not fit in `T` does not match.
///
/// ```
/// use charcomb::grammar::uint;
/// use charcomb::run::Input;
/// use charcomb::Parser;
///
/// let input = Input::new("255");
/// assert_eq!(uint::<u8>().parse(input.cursor()).unwrap().0, 255);
///
/// let input = Input::new("256");
/// assert!(uint::<u8>().parse(input.cursor()).is_err());
/// ```
pub fn uint<'code, T>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = T>
where
    T: Zero + FromPrimitive + CheckedMul + CheckedAdd,
{
    many1(digit()).filter_map(|digits: Vec<char>| {
        accumulate(&digits, |acc: &T, digit: &T| acc.checked_add(digit))
    })
}

/// Signed integer: an optional `-` followed by one or more decimal digits
///
/// Negative numerals are accumulated downwards, so `T::MIN` parses even though
/// its magnitude is not representable. `-0` is zero.
pub fn int<'code, T>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = T>
where
    T: Zero + FromPrimitive + CheckedMul + CheckedAdd + CheckedSub,
{
    minus()
        .optional()
        .and(many1(digit()))
        .filter_map(|(sign, digits): (Option<char>, Vec<char>)| match sign {
            Some(_) => accumulate(&digits, |acc: &T, digit: &T| acc.checked_sub(digit)),
            None => accumulate(&digits, |acc: &T, digit: &T| acc.checked_add(digit)),
        })
}
