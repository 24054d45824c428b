use crate::atomic::Atomic;
use crate::charset::CharSet;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::NoMatch;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that consumes exactly one element when it satisfies a predicate
#[derive(Clone)]
pub struct Satisfy<T, F> {
    predicate: F,
    _element: PhantomData<T>,
}

impl<T, F> Satisfy<T, F> {
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate,
            _element: PhantomData,
        }
    }
}

impl<'code, T, F> Parser<'code> for Satisfy<T, F>
where
    T: Atomic + 'code,
    F: Fn(T) -> bool,
{
    type Cursor = AtomicCursor<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match cursor.first() {
            Some(element) if (self.predicate)(element) => Ok((element, cursor.rest())),
            _ => Err(NoMatch),
        }
    }
}

/// Parser for one element matching `predicate`
pub fn character<T, F>(predicate: F) -> Satisfy<T, F>
where
    F: Fn(T) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser for one character contained in `set`
pub fn character_in(set: CharSet) -> Satisfy<char, impl Fn(char) -> bool + Clone> {
    character(move |c: char| set.contains(c))
}

/// Parser that consumes and returns any single character
pub fn any_char() -> Satisfy<char, fn(char) -> bool> {
    let predicate: fn(char) -> bool = |_| true;
    character(predicate)
}

/// Parser that matches a specific character
pub fn is_char(expected: char) -> Satisfy<char, impl Fn(char) -> bool + Clone> {
    character(move |c: char| c == expected)
}

/// `0`-`9`
pub fn digit() -> Satisfy<char, impl Fn(char) -> bool + Clone> {
    character_in(CharSet::DECIMAL_DIGITS)
}

/// `0`-`9`, `a`-`f`, `A`-`F`
pub fn hex_digit() -> Satisfy<char, impl Fn(char) -> bool + Clone> {
    character_in(CharSet::HEX_DIGITS)
}

/// `+` or `-`
pub fn sign() -> Satisfy<char, impl Fn(char) -> bool + Clone> {
    character_in(CharSet::SIGNS)
}

pub fn minus() -> Satisfy<char, impl Fn(char) -> bool + Clone> {
    is_char('-')
}

pub fn quote() -> Satisfy<char, impl Fn(char) -> bool + Clone> {
    character_in(CharSet::QUOTES)
}

/// One newline character; see [`CharSet::NEWLINES`]
pub fn newline() -> Satisfy<char, impl Fn(char) -> bool + Clone> {
    character_in(CharSet::NEWLINES)
}
