//! Error values reported by the containers in this crate.
//!
//! The set is small and closed by design: every variant is a synchronous,
//! local failure signaled at the call site, with no partial mutation left
//! behind. A cache miss is not an error — lookup-style operations model
//! absence as `Option` instead.

/// The error type for fallible container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Read through a handle that does not name an element — the end
    /// sentinel, or a slot that has already been freed.
    #[error("dereferenced a handle that does not point at an element")]
    InvalidDereference,

    /// Removed or reordered through a handle positioned at the end sentinel
    /// or at a freed slot.
    #[error("removed through a handle that does not point at an element")]
    InvalidIterator,

    /// Keyed access for a key that is not present. Keyed access never
    /// auto-inserts a default value.
    #[error("key not found")]
    KeyNotFound,
}

/// A specialized `Result` type for container operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidDereference.to_string(),
            "dereferenced a handle that does not point at an element"
        );
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert_ne!(Error::InvalidDereference, Error::InvalidIterator);
        assert_ne!(Error::InvalidIterator, Error::KeyNotFound);
    }
}
