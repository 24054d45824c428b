use crate::and::AndExt;
use crate::cursors::CharCursor;
use crate::literal::literal;
use crate::many::many1;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::tuple::AppendExt;

pub use crate::character::digit;

/// One or more decimal digits, collected into a string
///
/// Greedy: stops at the first non-digit and leaves it in the remainder.
pub fn numeric_string<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    many1(digit()).map(|digits: Vec<char>| digits.into_iter().collect::<String>())
}

/// Digits, a `.`, then digits again, e.g. `3.14`
///
/// Both sides of the point are required and no sign is accepted, so `1`, `1.`,
/// `.1` and `-1.1` do not match.
pub fn floating_point_string<'code>()
-> impl Parser<'code, Cursor = CharCursor<'code>, Output = String> {
    numeric_string()
        .and(literal("."))
        .append(numeric_string())
        .map(|(whole, point, fraction)| format!("{whole}{point}{fraction}"))
}
