//! # CharComb - Character-level Parser Combinators
//!
//! A small parser combinator engine over `char` input, plus the decimal numeral
//! grammars built from it.
//!
//! A parser is an immutable value implementing [`Parser`]. Running it on a cursor
//! either matches, yielding a value and the cursor after it, or fails with
//! [`NoMatch`]. A failure never consumes input: the caller still holds the cursor
//! it started from, which is all backtracking needs.
//!
//! Combinators are methods from the extension traits and read left to right in
//! call order, so `p.map(f).then(q).or(r)` is `((p map f) then q) or r`.
//!
//! - **Zero panics**: numerals that do not fit their target type simply do not match
//! - **Composability**: small parsers combine into larger ones using combinators
//! - **Shareable**: parsers hold no mutable state and can be used from many threads
//!
//! ```
//! use charcomb::prelude::*;
//! use charcomb::grammar::{int, uint};
//!
//! // `<width>x<height>@<offset>`
//! let input = Input::new("1280x720@-4;");
//! let parser = uint::<u32>()
//!     .skip(is_char('x'))
//!     .and(uint::<u32>())
//!     .skip(is_char('@'))
//!     .append(int::<i32>());
//!
//! let (value, rest) = parse_str(&parser, &input).unwrap();
//! assert_eq!(value, (1280, 720, -4));
//! assert_eq!(rest, ";");
//! ```

pub mod and;
pub mod apply;
pub mod atomic;
pub mod between;
pub mod character;
pub mod charset;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod filter;
pub mod filter_map;
pub mod followed;
pub mod grammar;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pure;
pub mod run;
pub mod separated_list;
pub mod tuple;

pub use atomic::Atomic;
pub use charset::CharSet;
pub use cursor::Cursor;
pub use cursors::{AtomicCursor, ByteCursor, CharCursor};
pub use error::{CodeLoc, NoMatch, ParseError};
pub use parser::{ParseResult, Parser};

/// Everything needed to write grammars: the parser trait, every extension trait
/// and the common constructors
pub mod prelude {
    pub use crate::and::{AndExt, and, skip, then};
    pub use crate::apply::{ApplyExt, apply, lift2};
    pub use crate::between::{BetweenExt, between};
    pub use crate::character::{any_char, character, character_in, is_char};
    pub use crate::charset::CharSet;
    pub use crate::cursor::Cursor;
    pub use crate::error::{NoMatch, ParseError};
    pub use crate::filter::FilterExt;
    pub use crate::filter_map::FilterMapExt;
    pub use crate::followed::FollowedExt;
    pub use crate::lazy::lazy;
    pub use crate::literal::literal;
    pub use crate::many::{ManyExt, many, many1};
    pub use crate::map::MapExt;
    pub use crate::optional::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::parser::Parser;
    pub use crate::pure::pure;
    pub use crate::run::{Input, parse_complete, parse_str, run};
    pub use crate::separated_list::separated_list;
    pub use crate::tuple::AppendExt;
}
