//! Switch between sequential and rayon-backed element coding.
//!
//! The switch is process-wide. Without the `parallel` feature it can still be
//! flipped, but [`use_parallel`] never returns `true`.

use std::sync::atomic::{AtomicBool, Ordering};

static REQUESTED: AtomicBool = AtomicBool::new(true);

/// Arrays shorter than this are always encoded and decoded on the calling thread.
pub const PARALLEL_MIN_ELEMENTS: usize = 1 << 14;

/// Upper bound on the elements a single rayon task codes.
const MAX_CHUNK_ELEMENTS: usize = 4096;

/// Minimum number of elements per rayon task for an array of `len` elements.
pub fn preferred_chunk_size(len: usize) -> usize {
    len.clamp(1, MAX_CHUNK_ELEMENTS)
}

/// Returns `true` when the crate was built with `parallel` and nobody has
/// switched it off.
pub fn parallelism_enabled() -> bool {
    cfg!(feature = "parallel") && REQUESTED.load(Ordering::SeqCst)
}

/// Whether an array of `len` elements should be split across the rayon pool.
pub fn use_parallel(len: usize) -> bool {
    len >= PARALLEL_MIN_ELEMENTS && parallelism_enabled()
}

/// Requests parallel coding on or off until the returned guard is dropped.
#[must_use = "the previous setting is restored when the guard is dropped"]
pub fn set_parallelism(enabled: bool) -> ParallelismGuard {
    ParallelismGuard {
        previous: REQUESTED.swap(enabled, Ordering::SeqCst),
    }
}

/// Restores the previous [`set_parallelism`] request on drop.
#[derive(Debug)]
pub struct ParallelismGuard {
    previous: bool,
}

impl Drop for ParallelismGuard {
    fn drop(&mut self) {
        REQUESTED.store(self.previous, Ordering::SeqCst);
    }
}
