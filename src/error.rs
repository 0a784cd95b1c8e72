//! Error kinds recognised by the solver core.
//!
//! The decoder and operators treat their own inputs as trusted (bijection
//! and bounds invariants are guaranteed by construction) and assert cheaply
//! via `debug_assert!`/`assert!`; only boundary inputs — the caller-supplied
//! grid and peer-offered permutations — are validated here and can return
//! one of these variants. Nothing in the generation hot loop raises.

/// Canonical error for `sqtile_core`.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TileError {
    /// Non-rectangular mask, dimensions exceeding `u16::MAX`, or zero empty
    /// cells. Raised at grid construction; fatal to the solve.
    #[error("bad grid: {0}")]
    BadGrid(&'static str),

    /// A peer-offered permutation whose length didn't match `|E|`, or which
    /// was not a bijection on `E`. Recovered locally by dropping the offering.
    #[error("peer-injected permutation is invalid: {0}")]
    PeerInjectInvalid(&'static str),

    /// A decoder/selection invariant (bijection, bounds) was violated.
    /// Indicates a bug in the core, not a runtime/input fault.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),
}

/// Convenience alias for results that use [`TileError`].
pub type TileResult<T> = Result<T, TileError>;
