//! Visitation state for depth-first routines.

/// Where a vertex stands during one depth-first run.
///
/// An edge into an [`InProgress`](Mark::InProgress) vertex points back at
/// the current path, which is what makes it a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    Unvisited,
    /// On the current depth-first path.
    InProgress,
    Finished,
}

/// One frame of an explicit depth-first stack: a vertex and the position of
/// the next out-neighbor to examine.
pub(crate) type Frame = (usize, usize);
