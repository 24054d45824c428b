use crate::atomic::Atomic;
use thiserror::Error;

/// The one way a parser can fail: it does not match at the given position
///
/// Carries no cause and no location. Composite parsers propagate it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("no match")]
pub struct NoMatch;

/// Diagnostics for [`parse_complete`](crate::run::parse_complete)
///
/// This is an opt-in layer on top of the engine; no combinator produces it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The parser did not match at the start of the input
    #[error("input does not match")]
    NoMatch(#[from] NoMatch),
    /// The parser matched a prefix but left input unconsumed
    #[error(
        "unexpected trailing input at line {line}, offset {offset} (absolute position: {position})\n\n{context}"
    )]
    TrailingInput {
        position: usize,
        line: usize,
        offset: usize,
        context: String,
    },
}

impl ParseError {
    pub fn trailing<T: Atomic>(loc: CodeLoc<'_, T>) -> Self {
        let readable = loc.readable_position();
        ParseError::TrailingInput {
            position: loc.position(),
            line: readable.line,
            offset: readable.offset,
            context: loc.context_lines().join("\n"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    /// Element offset within the line
    pub offset: usize,
}

#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code, T: Atomic = char> {
    code: &'code [T],
    /// The position in `code` this location points at
    loc: usize,
}

impl<'code, T: Atomic> CodeLoc<'code, T> {
    pub fn new(code: &'code [T], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Calculate line number and element offset within that line
    ///
    /// Note: We return element offset instead of column number because column
    /// width depends on tabs, wide and zero-width characters, and the terminal.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, element) in self.code.iter().enumerate().take(self.loc) {
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            offset: self.loc - line_start,
        }
    }

    /// Lines of context around the location, up to 2 before and after
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        let split: Vec<&[T]> = self.code.split(|e| e.is_newline()).collect();
        for (index, content) in split.iter().enumerate() {
            let number = index + 1;
            if number < first || number > last {
                continue;
            }
            // `split` yields an empty tail after a trailing newline; only show it
            // when the location is on it
            if index + 1 == split.len() && content.is_empty() && number != pos.line {
                continue;
            }

            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, T::slice_to_string(content)));

            if number == pos.line {
                lines.push(format!("{}^--- here", " ".repeat(prefix.len() + pos.offset)));
            }
        }

        lines
    }
}
