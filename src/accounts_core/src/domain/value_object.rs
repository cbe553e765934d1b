//! Value objects are compared by the value they wrap, never by identity.

/// An immutable wrapper around a single validated value.
///
/// Validation is the job of each implementor's constructor. Once built, the
/// wrapped value never changes, so two value objects holding the same value
/// are interchangeable.
pub trait ValueObject {
    type Value: PartialEq + ?Sized;

    /// Returns the wrapped value.
    fn value(&self) -> &Self::Value;

    /// Structural comparison of the wrapped values.
    fn equals(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

/// Trims surrounding whitespace, including the byte order mark that
/// `str::trim` leaves in place.
pub(crate) fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
