use crate::error::NoMatch;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output with a function that may reject it
///
/// When the function returns `None` the whole parse fails and the remainder is
/// discarded. This is how semantic checks such as "does this numeral fit in the
/// target type" turn into a plain no-match instead of a panic.
pub struct FilterMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> FilterMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        FilterMap { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for FilterMap<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> Option<U>,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped = (self.mapper)(value).ok_or(NoMatch)?;
        Ok((mapped, cursor))
    }
}

/// Convenience function to create a FilterMap parser
pub fn filter_map<'code, P, F, T, U>(parser: P, mapper: F) -> FilterMap<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> Option<U>,
{
    FilterMap::new(parser, mapper)
}

/// Extension trait to add .filter_map() method support for parsers
pub trait FilterMapExt<'code>: Parser<'code> + Sized {
    fn filter_map<F, U>(self, mapper: F) -> FilterMap<Self, F>
    where
        F: Fn(Self::Output) -> Option<U>,
    {
        FilterMap::new(self, mapper)
    }
}

impl<'code, P> FilterMapExt<'code> for P where P: Parser<'code> {}
