use crate::map::MapExt;
use crate::parser::{ParseResult, Parser};

/// Parser combinator for applicative application
///
/// Runs a parser that produces a function, then a parser that produces its
/// argument, and applies the one to the other.
pub struct Apply<PF, PA> {
    function: PF,
    argument: PA,
}

impl<PF, PA> Apply<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Apply { function, argument }
    }
}

impl<'code, PF, PA, F, A, B> Parser<'code> for Apply<PF, PA>
where
    PF: Parser<'code, Output = F>,
    PA: Parser<'code, Cursor = PF::Cursor, Output = A>,
    F: FnOnce(A) -> B,
{
    type Cursor = PF::Cursor;
    type Output = B;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (function, cursor) = self.function.parse(cursor)?;
        let (argument, cursor) = self.argument.parse(cursor)?;
        Ok((function(argument), cursor))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, PF, PA, B>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PF: Parser<'code>,
    PA: Parser<'code, Cursor = PF::Cursor>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    Apply::new(function, argument)
}

/// Extension trait to add .apply() method support for function-producing parsers
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<PA, B>(self, argument: PA) -> Apply<Self, PA>
    where
        PA: Parser<'code, Cursor = Self::Cursor>,
        Self::Output: FnOnce(PA::Output) -> B,
    {
        Apply::new(self, argument)
    }
}

impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}

/// Lift a two-argument function over two parsers
///
/// The function is curried, mapped over the first parser and applied to the
/// second, so `lift2(f, a, b)` parses `a` then `b` and yields `f(a, b)`.
pub fn lift2<'code, F, PA, PB, C>(
    function: F,
    first: PA,
    second: PB,
) -> impl Parser<'code, Cursor = PA::Cursor, Output = C>
where
    PA: Parser<'code>,
    PB: Parser<'code, Cursor = PA::Cursor>,
    F: Fn(PA::Output, PB::Output) -> C + Clone,
{
    let curried = first.map(move |a| {
        let function = function.clone();
        move |b| function(a, b)
    });
    Apply::new(curried, second)
}
