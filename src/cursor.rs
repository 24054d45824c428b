/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable view of the input that is left to parse. It can be
/// queried for its first element and advanced by one element; advancing returns a
/// new cursor and never touches the underlying data, so keeping an old copy around
/// is all it takes to backtrack.
pub trait Cursor<'code>: Copy + Clone + Sized {
    /// The type of elements this cursor iterates over
    type Element;

    /// The next element, or `None` at the end of the input
    fn first(&self) -> Option<Self::Element>;

    /// Advance past the element returned by `first()`
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn rest(self) -> Self;

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors this is the length of the sequence
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.first().is_none()
    }

    /// Get the source data without consuming the cursor
    fn source(&self) -> &'code [Self::Element];

    /// The elements that have not been consumed yet
    fn remaining(&self) -> &'code [Self::Element] {
        &self.source()[self.position()..]
    }

    /// Consume the cursor and return its inner data and position
    fn inner(self) -> (&'code [Self::Element], usize);
}
