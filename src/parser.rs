use crate::cursor::Cursor;
use crate::error::NoMatch;

/// Outcome of running a parser: the value and the remaining input, or no match
pub type ParseResult<O, C> = Result<(O, C), NoMatch>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the cursor after it on success, or
    /// `NoMatch` if the parser does not match here. The caller still holds the
    /// cursor it passed in, so a failure never consumes input.
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}
