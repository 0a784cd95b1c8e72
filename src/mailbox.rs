//! The peer-exchange mailbox (section 5): the one piece of state shared
//! across islands on a machine, deliberately kept small and bounded so
//! cross-thread contention never competes with the per-island hot loop.
//!
//! Islands publish their current best permutation periodically and pull
//! whatever another island has published since; a capacity bound means a
//! slow consumer just misses old offerings instead of making publishers
//! block or grow memory without limit.

use crate::coord::Point;
use crate::error::TileError;
use crate::genome::is_bijection_on;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A permutation an island is willing to share, plus the fitness it scored
/// at (so a receiver can skip decoding offerings no better than what it has).
#[derive(Debug, Clone)]
pub struct PeerOffering {
    pub permutation: Vec<Point>,
    pub fitness: u32,
}

/// Bounded FIFO queue shared by every island on a machine. `publish` drops
/// the oldest entry once `capacity` is exceeded; `try_take` is non-blocking.
pub struct Mailbox {
    queue: Mutex<VecDeque<PeerOffering>>,
    capacity: usize,
}

impl Mailbox {
    pub fn new(capacity: usize) -> Self {
        Mailbox { queue: Mutex::new(VecDeque::with_capacity(capacity)), capacity }
    }

    /// Publish an offering, dropping the oldest queued one(s) if this pushes
    /// the queue past capacity.
    pub fn publish(&self, offering: PeerOffering) {
        let mut q = self.queue.lock().expect("mailbox mutex poisoned");
        q.push_back(offering);
        while q.len() > self.capacity {
            q.pop_front();
        }
    }

    /// Take the oldest queued offering, if any. Never blocks.
    pub fn try_take(&self) -> Option<PeerOffering> {
        self.queue.lock().expect("mailbox mutex poisoned").pop_front()
    }
}

/// Validate a peer-offered permutation against the grid's eligible-point set
/// before it is allowed anywhere near the population buffer. Fails closed:
/// a malformed offering is dropped by the caller, not patched up.
pub fn validate_offering(offering: &PeerOffering, eligible: &[Point]) -> Result<(), TileError> {
    if offering.permutation.len() != eligible.len() {
        return Err(TileError::PeerInjectInvalid("length does not match eligible-point count"));
    }
    if !is_bijection_on(&offering.permutation, eligible) {
        return Err(TileError::PeerInjectInvalid("not a bijection on the eligible-point set"));
    }
    Ok(())
}
