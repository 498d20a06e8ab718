//! Stack growth for the walks that have to recurse.
//!
//! Serde and `Debug` drive nesting through callbacks, so they cannot use an explicit
//! work stack the way teardown, equality and `Display` do. Each nesting level instead
//! runs inside [`grow`], which moves onto a fresh heap-allocated stack segment when the
//! current one runs low.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
const SEGMENT: usize = 2 * 1024 * 1024;

pub(crate) fn grow<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}
