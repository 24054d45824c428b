//! Entry points: materializing text and running a parser over it

use crate::cursor::Cursor;
use crate::cursors::{AtomicCursor, CharCursor};
use crate::error::{CodeLoc, NoMatch, ParseError};
use crate::parser::{ParseResult, Parser};

/// Text materialized as a sequence of characters
///
/// Parsers borrow from an `Input`, so it has to outlive every cursor taken from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    chars: Vec<char>,
}

impl Input {
    pub fn new(text: &str) -> Self {
        Input {
            chars: text.chars().collect(),
        }
    }

    /// Cursor at the first character
    pub fn cursor(&self) -> CharCursor<'_> {
        AtomicCursor::new(&self.chars)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::new(text)
    }
}

/// Runs `parser` from the start of `input`
pub fn run<'code, P>(parser: &P, input: &'code Input) -> ParseResult<P::Output, CharCursor<'code>>
where
    P: Parser<'code, Cursor = CharCursor<'code>>,
{
    log::trace!("running parser over {} characters", input.len());
    let result = parser.parse(input.cursor());
    match &result {
        Ok((_, rest)) => log::trace!("matched {} characters", rest.position()),
        Err(NoMatch) => log::trace!("no match"),
    }
    result
}

/// Runs `parser` and returns the value with the unconsumed text
pub fn parse_str<'code, P>(parser: &P, input: &'code Input) -> Result<(P::Output, String), NoMatch>
where
    P: Parser<'code, Cursor = CharCursor<'code>>,
{
    let (value, rest) = run(parser, input)?;
    Ok((value, rest.remaining_text()))
}

/// Runs `parser` and requires it to consume all of `input`
///
/// ```
/// use charcomb::grammar::uint;
/// use charcomb::run::{parse_complete, Input};
///
/// let input = Input::new("1920");
/// assert_eq!(parse_complete(&uint::<u32>(), &input).unwrap(), 1920);
///
/// let input = Input::new("1920x1080");
/// let err = parse_complete(&uint::<u32>(), &input).unwrap_err();
/// assert!(err.to_string().contains("line 1, offset 4"));
/// ```
pub fn parse_complete<'code, P>(parser: &P, input: &'code Input) -> Result<P::Output, ParseError>
where
    P: Parser<'code, Cursor = CharCursor<'code>>,
{
    let (value, rest) = run(parser, input)?;
    if rest.eos() {
        return Ok(value);
    }

    let (data, position) = rest.inner();
    log::trace!("trailing input at position {}", position);
    Err(ParseError::trailing(CodeLoc::new(data, position)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::character::{is_char, newline};
    use crate::grammar::{Number, int, number, uint};
    use crate::or::OrExt;
    use crate::separated_list::separated_list;
    use assert_matches::assert_matches;
    use std::thread;

    #[test]
    fn test_input_from_str() {
        let input = Input::from("åb");
        assert_eq!(input.len(), 2);
        assert!(!input.is_empty());
        assert_eq!(input.cursor().first(), Some('å'));
        assert!(Input::new("").cursor().eos());
    }

    #[test]
    fn test_run_returns_remainder_cursor() {
        let input = Input::new("12ab");
        let (value, rest) = run(&uint::<u8>(), &input).unwrap();

        assert_eq!(value, 12);
        assert_eq!(rest.position(), 2);
        assert_eq!(rest.remaining_text(), "ab");
    }

    #[test]
    fn test_parse_str() {
        let input = Input::new("1234&234");
        assert_eq!(
            parse_str(&uint::<u64>(), &input),
            Ok((1234, "&234".to_string()))
        );

        let input = Input::new("&234");
        assert_eq!(parse_str(&uint::<u64>(), &input), Err(NoMatch));
    }

    #[test]
    fn test_parse_complete() {
        let input = Input::new("-17");
        assert_eq!(parse_complete(&int::<i32>(), &input), Ok(-17));
    }

    #[test]
    fn test_parse_complete_no_match() {
        let input = Input::new("x");
        assert_matches!(
            parse_complete(&int::<i32>(), &input),
            Err(ParseError::NoMatch(NoMatch))
        );
    }

    #[test]
    fn test_parse_complete_trailing_input() {
        let input = Input::new("1,2\n3;4");
        let parser = separated_list(uint::<u8>(), is_char(',').or(newline()));

        let result = parse_complete(&parser, &input);
        assert_matches!(
            result,
            Err(ParseError::TrailingInput {
                position: 5,
                line: 2,
                offset: 1,
                ..
            })
        );
    }

    #[test]
    fn test_shared_parser_across_threads() {
        let inputs: Vec<Input> = ["1;", "-2;", "9223372036854775807;", "x;"]
            .into_iter()
            .map(Input::new)
            .collect();
        let parser = int::<i64>().skip(is_char(';'));

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| {
                    let parser = &parser;
                    scope.spawn(move || parse_complete(parser, input).ok())
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(results, vec![Some(1), Some(-2), Some(i64::MAX), None]);
    }

    #[test]
    fn test_number_through_entry_point() {
        let input = Input::new("2.5 rest");
        let (value, rest) = parse_str(&number(), &input).unwrap();

        assert_eq!(value, Number::F64(2.5));
        assert_eq!(rest, " rest");
    }
}
