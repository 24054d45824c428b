use crate::atomic::Atomic;
use crate::cursors::AtomicCursor;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
///
/// This is the identity for sequencing: `pure(x).then(p)` behaves like `p`.
pub struct Pure<T, V> {
    value: V,
    _element: PhantomData<T>,
}

impl<T, V> Pure<T, V> {
    pub fn new(value: V) -> Self {
        Pure {
            value,
            _element: PhantomData,
        }
    }
}

impl<'code, T, V> Parser<'code> for Pure<T, V>
where
    T: Atomic + 'code,
    V: Clone,
{
    type Cursor = AtomicCursor<'code, T>;
    type Output = V;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T, V>(value: V) -> Pure<T, V>
where
    V: Clone,
{
    Pure::new(value)
}

/// Parser that always succeeds with `V::default()` without consuming input
pub fn default<T, V>() -> Pure<T, V>
where
    V: Clone + Default,
{
    Pure::new(V::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursor::Cursor;
    use crate::grammar::numeric_string;
    use crate::run::Input;

    #[test]
    fn test_pure_consumes_nothing() {
        let input = Input::new("hello");
        let parser = pure::<char, _>("fixed");

        let (value, remaining) = parser.parse(input.cursor()).unwrap();
        assert_eq!(value, "fixed");
        assert_eq!(remaining.first(), Some('h'));
    }

    #[test]
    fn test_pure_on_empty_input() {
        let input = Input::new("");
        let (value, remaining) = pure::<char, _>(7).parse(input.cursor()).unwrap();

        assert_eq!(value, 7);
        assert!(remaining.eos());
    }

    #[test]
    fn test_pure_is_sequencing_identity() {
        let input = Input::new("123abc");
        let plain = numeric_string().parse(input.cursor()).unwrap();
        let left = pure(()).then(numeric_string()).parse(input.cursor()).unwrap();
        let right = numeric_string().skip(pure(())).parse(input.cursor()).unwrap();

        assert_eq!(left, plain);
        assert_eq!(right, plain);
    }

    #[test]
    fn test_default_string() {
        let input = Input::new("hello");
        let (value, remaining) = default::<char, String>().parse(input.cursor()).unwrap();

        assert_eq!(value, String::new());
        assert_eq!(remaining, input.cursor());
    }
}
