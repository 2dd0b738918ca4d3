// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single flag that blocks re-entrant synchronization.
//!
//! One flag covers both directions (main to overview and overview to main).
//! That is coarse on purpose: while either update runs, the other is refused,
//! which is exactly what breaks the notify/apply cycle between the two views.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The "updating" flag shared between a coordinator and its tokens.
///
/// The flag is tested and set with a single `compare_exchange`, so it stays
/// correct even if the owner is moved to another thread.
#[derive(Clone, Debug, Default)]
pub struct ReentrancyGuard {
    updating: Arc<AtomicBool>,
}

impl ReentrancyGuard {
    /// Creates a released guard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the guard, or returns `None` if an update is already running.
    ///
    /// The flag is cleared when the returned token is dropped, on every exit
    /// path including early returns and unwinding.
    #[must_use]
    pub fn try_enter(&self) -> Option<GuardToken> {
        self.updating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(GuardToken {
            updating: Arc::clone(&self.updating),
        })
    }

    /// Returns `true` while a token is alive.
    #[must_use]
    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::Acquire)
    }
}

/// Proof that the guard is held. Releases it on drop.
#[derive(Debug)]
#[must_use = "the guard is released as soon as the token is dropped"]
pub struct GuardToken {
    updating: Arc<AtomicBool>,
}

impl Drop for GuardToken {
    fn drop(&mut self) {
        self.updating.store(false, Ordering::Release);
    }
}
