use crate::cursor::Cursor;
use crate::cursors::CharCursor;
use crate::error::NoMatch;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact text one character at a time
///
/// Fails on the first mismatching character or at end of input; the caller's
/// cursor is untouched in that case, so nothing of a partial match is consumed.
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for Literal {
    type Cursor = CharCursor<'code>;
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let mut current = cursor;

        for expected in self.expected.chars() {
            match current.first() {
                Some(found) if found == expected => current = current.rest(),
                _ => return Err(NoMatch),
            }
        }

        // Clone is cheap here - just copies the reference for &'static str
        Ok((self.expected.clone(), current))
    }
}

/// Creates a parser that matches `expected` exactly
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
