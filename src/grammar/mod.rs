//! Token grammars for decimal numerals

use crate::cursors::CharCursor;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;

pub mod digits;
pub mod float;
pub mod integer;

pub use digits::{digit, floating_point_string, numeric_string};
pub use float::float;
pub use integer::{int, uint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    F64(f64),
}

/// Parser that matches either a float or an integer
///
/// The float form is tried first so `2.5` is not read as the integer `2`.
pub fn number<'code>() -> impl Parser<'code, Cursor = CharCursor<'code>, Output = Number> {
    float::<f64>()
        .map(Number::F64)
        .or(int::<i64>().map(Number::I64))
}
