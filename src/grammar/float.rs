use crate::and::AndExt;
use crate::character::minus;
use crate::cursors::CharCursor;
use crate::filter_map::FilterMapExt;
use crate::optional::OptionalExt;
use crate::parser::Parser;
use num_traits::Float;
use std::str::FromStr;

use super::digits::floating_point_string;

/// Decimal floating point number such as `3.25` or `-0.5`
///
/// The text must have digits on both sides of the point. Values that round to
/// infinity in `T` do not match.
pub fn float<'code, T>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = T>
where
    T: Float + FromStr,
{
    minus()
        .optional()
        .and(floating_point_string())
        .filter_map(|(sign, text): (Option<char>, String)| {
            let magnitude = text.parse::<T>().ok()?;
            let value = if sign.is_some() { -magnitude } else { magnitude };
            value.is_finite().then_some(value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::run::Input;

    #[test]
    fn test_float() {
        let input = Input::new("123.456abc");
        let (value, cursor) = float::<f64>().parse(input.cursor()).unwrap();

        assert!((value - 123.456).abs() < f64::EPSILON);
        assert_eq!(cursor.first(), Some('a'));
    }

    #[test]
    fn test_negative_float() {
        let input = Input::new("-42.789xyz");
        let (value, cursor) = float::<f64>().parse(input.cursor()).unwrap();

        assert!((value + 42.789).abs() < f64::EPSILON);
        assert_eq!(cursor.first(), Some('x'));
    }

    #[test]
    fn test_negative_zero() {
        let input = Input::new("-0.0");
        let (value, _) = float::<f32>().parse(input.cursor()).unwrap();
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_float_requires_both_sides() {
        for text in ["123", "123.abc", ".456", "-456.", "-.5", "abc", ""] {
            let input = Input::new(text);
            assert!(float::<f64>().parse(input.cursor()).is_err(), "{:?}", text);
        }
    }

    #[test]
    fn test_float_overflow_is_no_match() {
        let text = format!("{}.0", "9".repeat(400));
        let input = Input::new(&text);
        assert!(float::<f64>().parse(input.cursor()).is_err());

        let input = Input::new("1000000000000000000000000000000000000000.0");
        assert!(float::<f32>().parse(input.cursor()).is_err());
        assert!(float::<f64>().parse(input.cursor()).is_ok());
    }
}
