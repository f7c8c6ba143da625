//! Length policy for bounded strings.
//!
//! Names in a build rule fall into two classes:
//! - flags and objects, which are rejected when they exceed their capacity
//! - the compiler command and the output path, which are truncated
//!
//! Both classes reserve one byte of the capacity for the terminator, so a
//! capacity of `n` admits strings of at most `n - 1` bytes.

use serde::Serialize;

/// Whether a bounded copy kept the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Truncation {
  /// The value was stored as given.
  Intact,
  /// The value was shortened from `original_len` to `stored_len` bytes.
  Truncated { original_len: usize, stored_len: usize },
}

impl Truncation {
  pub fn is_truncated(self) -> bool {
    matches!(self, Truncation::Truncated { .. })
  }
}

/// Longest length, in bytes, a string may have for the given capacity.
pub fn max_len(capacity: usize) -> usize {
  capacity.saturating_sub(1)
}

/// Returns true if `value` fits in `capacity` (terminator included).
pub fn fits(value: &str, capacity: usize) -> bool {
  capacity > 0 && value.len() <= max_len(capacity)
}

/// Copy `value`, cutting it at the last UTF-8 boundary that fits `capacity`.
pub fn truncate_to_capacity(value: &str, capacity: usize) -> (String, Truncation) {
  if fits(value, capacity) {
    return (value.to_string(), Truncation::Intact);
  }

  let mut end = max_len(capacity);
  while end > 0 && !value.is_char_boundary(end) {
    end -= 1;
  }

  (
    value[..end].to_string(),
    Truncation::Truncated {
      original_len: value.len(),
      stored_len: end,
    },
  )
}
