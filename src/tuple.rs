use crate::followed::Followed;
use crate::parser::Parser;

/// Tuples that can take one more value at the end
///
/// Implemented for pairs and triples, so sequences of up to four values can be
/// collected into a flat tuple in parse order.
pub trait Append<T> {
    type Output;

    fn append(self, value: T) -> Self::Output;
}

impl<A, B, T> Append<T> for (A, B) {
    type Output = (A, B, T);

    fn append(self, value: T) -> Self::Output {
        (self.0, self.1, value)
    }
}

impl<A, B, C, T> Append<T> for (A, B, C) {
    type Output = (A, B, C, T);

    fn append(self, value: T) -> Self::Output {
        (self.0, self.1, self.2, value)
    }
}

/// Parser that extends a tuple-producing parser with the value of the next parser
pub type Appended<P1, P2, A, B> = Followed<P1, P2, fn(A, B) -> <A as Append<B>>::Output>;

fn push<A: Append<B>, B>(tuple: A, value: B) -> A::Output {
    tuple.append(value)
}

/// Extension trait to add .append() method support for tuple-producing parsers
pub trait AppendExt<'code>: Parser<'code> + Sized {
    fn append<P>(self, other: P) -> Appended<Self, P, Self::Output, P::Output>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
        Self::Output: Append<P::Output>,
    {
        let combine: fn(Self::Output, P::Output) -> _ = push;
        Followed::new(self, other, combine)
    }
}

impl<'code, P> AppendExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::character::is_char;
    use crate::cursor::Cursor;
    use crate::grammar::{int, uint};
    use crate::map::MapExt;
    use crate::run::Input;

    #[derive(Debug, PartialEq)]
    struct Resolution {
        width: u32,
        height: u32,
    }

    #[test]
    fn test_append_builds_triple() {
        let input = Input::new("1x2");
        let parser = uint::<u8>().and(is_char('x')).append(uint::<u8>());

        let ((a, x, b), cursor) = parser.parse(input.cursor()).unwrap();
        assert_eq!((a, x, b), (1, 'x', 2));
        assert!(cursor.eos());
    }

    #[test]
    fn test_append_builds_quadruple() {
        let input = Input::new("-3,4,5;");
        let parser = int::<i16>()
            .and(is_char(','))
            .append(uint::<u16>())
            .append(is_char(','));

        let ((a, c1, b, c2), cursor) = parser.parse(input.cursor()).unwrap();
        assert_eq!(a, -3);
        assert_eq!(b, 4);
        assert_eq!((c1, c2), (',', ','));
        assert_eq!(cursor.remaining_text(), "5;");
    }

    #[test]
    fn test_append_into_record() {
        let input = Input::new("1920x1080");
        let parser = uint::<u32>()
            .and(is_char('x'))
            .append(uint::<u32>())
            .map(|(width, _, height)| Resolution { width, height });

        let (resolution, _) = parser.parse(input.cursor()).unwrap();
        assert_eq!(
            resolution,
            Resolution {
                width: 1920,
                height: 1080
            }
        );
    }

    #[test]
    fn test_append_failure_fails_whole_sequence() {
        let input = Input::new("1x");
        let parser = uint::<u8>().and(is_char('x')).append(uint::<u8>());

        assert!(parser.parse(input.cursor()).is_err());
    }
}
