pub mod atomic;

pub use atomic::AtomicCursor;

/// Cursor over a materialized sequence of Unicode scalar values
pub type CharCursor<'code> = AtomicCursor<'code, char>;

/// Cursor over raw bytes
pub type ByteCursor<'code> = AtomicCursor<'code, u8>;
