use crate::followed::Followed;
use crate::parser::Parser;

/// `Followed` with a plain function pointer as the combining step
pub type Sequence<P1, P2, A, B, C> = Followed<P1, P2, fn(A, B) -> C>;

/// Parser returning both values as a tuple
pub type And<P1, P2, A, B> = Sequence<P1, P2, A, B, (A, B)>;

/// Parser returning only the left value
pub type Skip<P1, P2, A, B> = Sequence<P1, P2, A, B, A>;

/// Parser returning only the right value
pub type Then<P1, P2, A, B> = Sequence<P1, P2, A, B, B>;

fn pair<A, B>(a: A, b: B) -> (A, B) {
    (a, b)
}

fn left<A, B>(a: A, _: B) -> A {
    a
}

fn right<A, B>(_: A, b: B) -> B {
    b
}

/// Sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `((a, b), c)`. Use [`append`](crate::tuple::AppendExt::append) to build flat
/// tuples of up to four values instead.
///
/// Example:
/// ```
/// use charcomb::and::AndExt;
/// use charcomb::grammar::uint;
/// use charcomb::character::is_char;
/// use charcomb::run::Input;
/// use charcomb::Parser;
///
/// let input = Input::new("123.456");
/// let ((whole, frac), _) = uint::<u32>()
///     .skip(is_char('.'))
///     .and(uint::<u32>())
///     .parse(input.cursor())
///     .unwrap();
/// assert_eq!(whole, 123);
/// assert_eq!(frac, 456);
/// ```
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2, P1::Output, P2::Output>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    let combine: fn(P1::Output, P2::Output) -> _ = pair;
    Followed::new(parser1, parser2, combine)
}

/// Sequences two parsers and keeps only the left value
pub fn skip<'code, P1, P2>(parser1: P1, parser2: P2) -> Skip<P1, P2, P1::Output, P2::Output>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    let combine: fn(P1::Output, P2::Output) -> _ = left;
    Followed::new(parser1, parser2, combine)
}

/// Sequences two parsers and keeps only the right value
pub fn then<'code, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2, P1::Output, P2::Output>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    let combine: fn(P1::Output, P2::Output) -> _ = right;
    Followed::new(parser1, parser2, combine)
}

/// Extension trait to add .and(), .skip() and .then() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P, Self::Output, P::Output>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        and(self, other)
    }

    fn skip<P>(self, other: P) -> Skip<Self, P, Self::Output, P::Output>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        skip(self, other)
    }

    fn then<P>(self, other: P) -> Then<Self, P, Self::Output, P::Output>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        then(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
