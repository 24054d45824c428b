use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs two parsers in sequence and combines their values
///
/// The second parser starts where the first one stopped. The sequence fails if
/// either step fails. Every other sequencing combinator (`and`, `skip`, `then`,
/// `append`, `apply`) is this one with a particular `combine` function.
pub struct Followed<P1, P2, F> {
    parser1: P1,
    parser2: P2,
    combine: F,
}

impl<P1, P2, F> Followed<P1, P2, F> {
    pub fn new(parser1: P1, parser2: P2, combine: F) -> Self {
        Followed {
            parser1,
            parser2,
            combine,
        }
    }
}

impl<'code, P1, P2, F, A, B, C> Parser<'code> for Followed<P1, P2, F>
where
    P1: Parser<'code, Output = A>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = B>,
    F: Fn(A, B) -> C,
{
    type Cursor = P1::Cursor;
    type Output = C;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (first, cursor) = self.parser1.parse(cursor)?;
        let (second, cursor) = self.parser2.parse(cursor)?;
        Ok(((self.combine)(first, second), cursor))
    }
}

/// Convenience function to create a Followed parser
pub fn followed<'code, P1, P2, F, C>(parser1: P1, parser2: P2, combine: F) -> Followed<P1, P2, F>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    F: Fn(P1::Output, P2::Output) -> C,
{
    Followed::new(parser1, parser2, combine)
}

/// Extension trait to add .followed() method support for parsers
pub trait FollowedExt<'code>: Parser<'code> + Sized {
    fn followed<P, F, C>(self, other: P, combine: F) -> Followed<Self, P, F>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
        F: Fn(Self::Output, P::Output) -> C,
    {
        Followed::new(self, other, combine)
    }
}

impl<'code, P> FollowedExt<'code> for P where P: Parser<'code> {}
