use crate::atomic::Atomic;
use crate::cursor::Cursor;

#[derive(Debug, Copy, Clone)]
pub enum AtomicCursor<'code, T: Atomic> {
    Valid { data: &'code [T], position: usize },
    EndOfFile { data: &'code [T] },
}

impl<'code, T: Atomic> AtomicCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return AtomicCursor::EndOfFile { data };
        }
        AtomicCursor::Valid { data, position: 0 }
    }
}

impl<'code> AtomicCursor<'code, char> {
    /// The unconsumed input as text
    pub fn remaining_text(&self) -> String {
        self.remaining().iter().collect()
    }
}

/// Cursors are equal when they denote the same remaining content, regardless of
/// which buffer or offset they came from.
impl<'code, T: Atomic> PartialEq for AtomicCursor<'code, T> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining()
    }
}

impl<'code, T: Atomic> Cursor<'code> for AtomicCursor<'code, T> {
    type Element = T;

    fn first(&self) -> Option<Self::Element> {
        match self {
            AtomicCursor::Valid { data, position } => data.get(*position).copied(),
            AtomicCursor::EndOfFile { .. } => None,
        }
    }

    fn rest(self) -> Self {
        match self {
            AtomicCursor::Valid { data, position } => {
                if position >= data.len().saturating_sub(1) {
                    AtomicCursor::EndOfFile { data }
                } else {
                    AtomicCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            AtomicCursor::EndOfFile { data } => AtomicCursor::EndOfFile { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            AtomicCursor::Valid { data, position } => (*position).min(data.len()),
            AtomicCursor::EndOfFile { data } => data.len(),
        }
    }

    fn source(&self) -> &'code [Self::Element] {
        match self {
            AtomicCursor::Valid { data, .. } => data,
            AtomicCursor::EndOfFile { data } => data,
        }
    }

    fn inner(self) -> (&'code [Self::Element], usize) {
        match self {
            AtomicCursor::Valid { data, position } => (data, position.min(data.len())),
            AtomicCursor::EndOfFile { data } => (data, data.len()),
        }
    }
}
