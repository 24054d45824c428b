use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The mapping function must be total. Use [`filter_map`](crate::filter_map) when the
/// value decides whether the parse matches.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::is_char;
    use crate::cursor::Cursor;
    use crate::grammar::{digit, uint};
    use crate::or::OrExt;
    use crate::run::Input;

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Number(u64),
        Special(char),
    }

    #[test]
    fn test_map_char_to_code_point() {
        let input = Input::new("A");
        let parser = is_char('A').map(|c| c as u32);

        let (code, cursor) = parser.parse(input.cursor()).unwrap();
        assert_eq!(code, 65);
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_integer_to_string() {
        let input = Input::new("123");
        let parser = uint::<u64>().map(|num| format!("Number: {}", num));

        let (result, cursor) = parser.parse(input.cursor()).unwrap();
        assert_eq!(result, "Number: 123");
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_chaining() {
        let input = Input::new("5");
        let parser = digit()
            .map(|c| c.to_digit(10).unwrap_or_default())
            .map(|d| d * 2)
            .map(|d| format!("Doubled: {}", d));

        let (result, _) = parser.parse(input.cursor()).unwrap();
        assert_eq!(result, "Doubled: 10");
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let input = Input::new("42");

        let letter = is_char('A').map(Token::Letter);
        let number = uint::<u64>().map(Token::Number);
        let special = is_char('!').map(Token::Special);
        let parser = letter.or(number).or(special);

        let (token, cursor) = parser.parse(input.cursor()).unwrap();
        assert_eq!(token, Token::Number(42));
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_keeps_remainder() {
        let input = Input::new("7up");
        let parser = digit().map(|c| c.is_ascii_digit());

        let (value, cursor) = parser.parse(input.cursor()).unwrap();
        assert!(value);
        assert_eq!(cursor.remaining_text(), "up");
    }

    #[test]
    fn test_map_preserves_failure() {
        let input = Input::new("xyz");
        let parser = is_char('A').map(|c| c as u32);

        assert!(parser.parse(input.cursor()).is_err());
    }

    #[test]
    fn test_function_syntax() {
        let input = Input::new("9");
        let parser = map(is_char('9'), |c: char| c.to_ascii_uppercase());

        let (c, cursor) = parser.parse(input.cursor()).unwrap();
        assert_eq!(c, '9');
        assert!(cursor.eos());
    }
}
