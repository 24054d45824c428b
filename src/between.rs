use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::{ParseResult, Parser};

/// Parser combinator for bounded repetition
///
/// Applies the inner parser greedily, at most `max` times (`None` means no upper
/// bound), and stops at the first attempt that fails. The repetition matches when
/// at least `min` attempts were accepted; otherwise it fails and the caller keeps
/// its original cursor.
///
/// Accepted repetitions are never given back: if a later parser in the grammar
/// would have needed fewer of them, the overall parse fails rather than
/// backtracking into the repetition.
///
/// Without an upper bound, an accepted repetition that consumed no input ends the
/// loop once `min` is reached, since every further attempt from the same cursor
/// would produce the same result. With a bound, every attempt up to `max` counts.
pub struct Between<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Between<P> {
    pub fn new(parser: P, min: usize, max: Option<usize>) -> Self {
        Between { parser, min, max }
    }
}

impl<'code, P> Parser<'code> for Between<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let mut results = Vec::new();

        while self.max.is_none_or(|max| results.len() < max) {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    let progressed = next_cursor.position() != cursor.position();
                    results.push(value);
                    cursor = next_cursor;
                    if !progressed && self.max.is_none() && results.len() >= self.min {
                        break;
                    }
                }
                Err(_) => break,
            }
        }

        if results.len() < self.min {
            return Err(NoMatch);
        }
        Ok((results, cursor))
    }
}

/// Creates a parser that matches `parser` between `min` and `max` times, inclusive
pub fn between<'code, P>(parser: P, min: usize, max: Option<usize>) -> Between<P>
where
    P: Parser<'code>,
{
    Between::new(parser, min, max)
}

/// Extension trait to add .between() method support for parsers
pub trait BetweenExt<'code>: Parser<'code> + Sized {
    fn between(self, min: usize, max: Option<usize>) -> Between<Self> {
        Between::new(self, min, max)
    }

    /// Exactly `count` repetitions
    fn times(self, count: usize) -> Between<Self> {
        Between::new(self, count, Some(count))
    }
}

impl<'code, P> BetweenExt<'code> for P where P: Parser<'code> {}
