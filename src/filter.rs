use crate::error::NoMatch;
use crate::parser::{ParseResult, Parser};

/// Parser that applies a predicate function to filter the output of another parser
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, P, F, T> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(&T) -> bool,
{
    type Cursor = P::Cursor;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, new_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(NoMatch)
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::any_char;
    use crate::cursor::Cursor;
    use crate::run::Input;

    #[test]
    fn test_filter_success() {
        let input = Input::new("a");
        let parser = any_char().filter(|c| c.is_alphabetic());

        let (result, _) = parser.parse(input.cursor()).unwrap();
        assert_eq!(result, 'a');
    }

    #[test]
    fn test_filter_failure() {
        let input = Input::new("1");
        let parser = any_char().filter(|c| c.is_alphabetic());

        assert_eq!(parser.parse(input.cursor()), Err(NoMatch));
    }

    #[test]
    fn test_filter_unicode_letter() {
        let test_cases = [
            ("a", true),
            ("Z", true),
            ("ñ", true),
            ("中", true),
            ("1", false),
            ("!", false),
            (" ", false),
        ];

        for (text, should_succeed) in test_cases {
            let input = Input::new(text);
            let result = filter(any_char(), |c: &char| c.is_alphabetic()).parse(input.cursor());

            if should_succeed {
                let (ch, cursor) = result.unwrap();
                assert_eq!(Some(ch), text.chars().next());
                assert!(cursor.eos());
            } else {
                assert!(result.is_err(), "Expected failure for: {}", text);
            }
        }
    }

    #[test]
    fn test_chained_filters() {
        let parser = any_char()
            .filter(|c| c.is_alphabetic())
            .filter(|c| c.is_uppercase());

        let upper = Input::new("A");
        let lower = Input::new("a");
        assert_eq!(parser.parse(upper.cursor()).unwrap().0, 'A');
        assert!(parser.parse(lower.cursor()).is_err());
    }
}
