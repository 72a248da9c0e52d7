use thiserror::Error;

/// Returned by [`crate::BiMap::lookup`] when a key is in neither direction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("key not found: {0:?}")]
pub struct KeyNotFound<K: std::fmt::Debug>(pub K);

#[test]
fn test_key_not_found_display() {
    assert_eq!(KeyNotFound("a").to_string(), "key not found: \"a\"");
    assert_eq!(KeyNotFound(42).to_string(), "key not found: 42");
}
