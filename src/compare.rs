//! Lexicographic byte comparison used as the ordering tie-break.
//!
//! ## Contract
//!
//! `is_greater(a, b)` is a strict greater-than over raw unsigned bytes:
//!
//! 1. Walk the shared prefix `min(a.len(), b.len())`
//! 2. The first differing byte decides
//! 3. If the prefix is equal, the longer sequence is greater
//!
//! Equal sequences are never greater than each other. No normalization is
//! applied to the input.
//!
//! ## Example
//!
//! ```
//! use asset_pair_order::compare::is_greater;
//!
//! assert!(is_greater(&[255], &[0]));
//! assert!(!is_greater(&[0], &[255]));
//! assert!(!is_greater(&[], &[]));
//! assert!(is_greater(&[1, 2, 3], &[1, 2]));
//! ```

/// Returns `true` if `a` is lexicographically greater than `b`.
///
/// Returns `false` when the sequences are equal.
pub fn is_greater(a: &[u8], b: &[u8]) -> bool {
    for (x, y) in a.iter().zip(b) {
        if x > y {
            return true;
        }
        if x < y {
            return false;
        }
    }
    a.len() > b.len()
}

// ============================================================================
// Unit Tests
// ============================================================================
