//! Data-parallel fan-out of the kernel over all agent indices.
//!
//! The input slice is shared read-only; each index owns exactly one output
//! slot, so workers never contend.  Both variants are a "complete" barrier:
//! when the call returns `Ok`, every output slot has been written and is
//! visible to the caller.
//!
//! Failure policy is fail-fast.  Sequentially, the first `Err` returns
//! immediately.  In parallel, `try_for_each` stops splitting off new work
//! after the first error, lets in-flight chunks finish, and propagates the
//! error.  Either way the caller must treat the output array as garbage on
//! `Err`.

use flock_agent::AgentSnapshot;
use flock_core::{FlockConfig, Vec3};

use crate::error::SteerResult;
use crate::kernel;

/// Minimum indices per work chunk when no hint is given.
///
/// The kernel body is O(n) per index, so even small chunks amortize Rayon's
/// per-task overhead; 64 keeps splits coarse enough for short snapshot
/// arrays.
pub const DEFAULT_MIN_CHUNK: usize = 64;

/// Run the kernel for every index, writing `outputs[i] = compute(i, ..)`.
///
/// See [`dispatch_chunked`] for the chunk-size-hint variant.
pub fn dispatch(
    snapshots: &[AgentSnapshot],
    outputs: &mut [Vec3],
    config: &FlockConfig,
) -> SteerResult<()> {
    dispatch_chunked(snapshots, outputs, config, DEFAULT_MIN_CHUNK)
}

/// [`dispatch`] with an explicit minimum chunk-size hint for the parallel
/// splitter.  The hint has no effect on results, only on work granularity
/// (and is ignored entirely by the sequential build).
///
/// # Panics
///
/// Panics if `outputs.len() != snapshots.len()` — the one-slot-per-agent
/// contract is a programming error to break, not a runtime condition.
pub fn dispatch_chunked(
    snapshots: &[AgentSnapshot],
    outputs: &mut [Vec3],
    config: &FlockConfig,
    min_chunk: usize,
) -> SteerResult<()> {
    assert_eq!(
        snapshots.len(),
        outputs.len(),
        "output array must have exactly one slot per snapshot"
    );

    #[cfg(not(feature = "parallel"))]
    {
        let _ = min_chunk;
        for (i, slot) in outputs.iter_mut().enumerate() {
            *slot = kernel::compute(i, snapshots, config)?;
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        outputs
            .par_iter_mut()
            .enumerate()
            .with_min_len(min_chunk.max(1))
            .try_for_each(|(i, slot)| -> SteerResult<()> {
                *slot = kernel::compute(i, snapshots, config)?;
                Ok(())
            })
    }
}
