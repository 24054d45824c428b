use crate::between::Between;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails; yields an empty vector when the parser does not match at all.
pub fn many<'code, P>(parser: P) -> Between<P>
where
    P: Parser<'code>,
{
    Between::new(parser, 0, None)
}

/// Parser combinator that matches one or more occurrences of the given parser
pub fn many1<'code, P>(parser: P) -> Between<P>
where
    P: Parser<'code>,
{
    Between::new(parser, 1, None)
}

/// Extension trait to add .many() and .many1() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Between<Self> {
        many(self)
    }

    fn many1(self) -> Between<Self> {
        many1(self)
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
