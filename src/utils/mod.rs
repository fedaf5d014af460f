//! Utility helpers shared by the codec.
//! Currently only the opt-in parallel element coding switch.

pub mod parallel;

pub use parallel::{
    parallelism_enabled, preferred_chunk_size, set_parallelism, use_parallel, ParallelismGuard,
    PARALLEL_MIN_ELEMENTS,
};
