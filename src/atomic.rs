/// Trait for atomic elements that a cursor can step over
/// This enables generic diagnostics and position calculation
pub trait Atomic: Copy + Clone + PartialEq + std::fmt::Debug + std::fmt::Display {
    /// The newline element for this atomic type
    const NEWLINE: Self;

    fn is_newline(&self) -> bool {
        *self == Self::NEWLINE
    }

    /// Convert a slice of elements to a displayable string for error reporting
    fn slice_to_string(slice: &[Self]) -> String;
}

impl Atomic for char {
    const NEWLINE: Self = '\n';

    fn slice_to_string(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';

    fn slice_to_string(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}
