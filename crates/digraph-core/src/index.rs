//! The boundary between 1-based external vertex numbers and 0-based
//! internal indices.
//!
//! Algorithm cores never add or subtract one themselves; they call these.

use crate::error::GraphError;

/// 0-based internal index → 1-based external number.
#[must_use]
pub const fn to_external(v: usize) -> usize {
    v + 1
}

/// [`to_external`] for untrusted input; `None` when `v` has no 1-based form.
#[must_use]
pub const fn try_to_external(v: usize) -> Option<usize> {
    v.checked_add(1)
}

/// 1-based external number → 0-based internal index.
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`] unless `1 <= v <= vertex_count`.
pub const fn to_internal(v: usize, vertex_count: usize) -> Result<usize, GraphError> {
    if v == 0 || v > vertex_count {
        return Err(GraphError::VertexOutOfRange { vertex: v, vertex_count });
    }
    Ok(v - 1)
}

/// 1-based → 0-based for a number already validated against its graph.
///
/// Only values that passed [`to_internal`] (or an equivalent range check at
/// construction) may come through here.
#[must_use]
pub const fn to_internal_validated(v: usize) -> usize {
    debug_assert!(v > 0, "external vertex numbers start at 1");
    v - 1
}

/// Map a slice of internal indices to external numbers.
#[must_use]
pub fn externalize(vertices: &[usize]) -> Vec<usize> {
    vertices.iter().copied().map(to_external).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_inside_range() {
        for v in 1..=4 {
            let internal = to_internal(v, 4).expect("in range");
            assert_eq!(to_external(internal), v);
        }
    }

    #[test]
    fn largest_index_has_no_external_form() {
        assert_eq!(try_to_external(0), Some(1));
        assert_eq!(try_to_external(usize::MAX), None);
    }

    #[test]
    fn rejects_zero_and_overflow() {
        assert!(matches!(
            to_internal(0, 4),
            Err(GraphError::VertexOutOfRange { vertex: 0, .. })
        ));
        assert!(matches!(
            to_internal(5, 4),
            Err(GraphError::VertexOutOfRange { vertex: 5, .. })
        ));
    }
}
