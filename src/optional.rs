use crate::parser::{ParseResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Always succeeds: yields `Some(value)` when the inner parser matches and
/// `None` with the cursor left where it was when it does not.
///
/// Example:
/// ```
/// use charcomb::and::AndExt;
/// use charcomb::character::minus;
/// use charcomb::grammar::uint;
/// use charcomb::optional::OptionalExt;
/// use charcomb::run::Input;
/// use charcomb::Parser;
///
/// let input = Input::new("-12");
/// let ((sign, value), _) = minus().optional().and(uint::<u8>()).parse(input.cursor()).unwrap();
/// assert_eq!(sign, Some('-'));
/// assert_eq!(value, 12);
///
/// let input = Input::new("12");
/// let ((sign, value), _) = minus().optional().and(uint::<u8>()).parse(input.cursor()).unwrap();
/// assert_eq!(sign, None);
/// assert_eq!(value, 12);
/// ```
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
