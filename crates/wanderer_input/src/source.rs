//! Input sources with lock-free intent flags
//!
//! Every source owns one atomic byte of [`Intent`] bits. Event handlers write
//! only their own source through a [`SourceHandle`]; the aggregator reads all
//! sources once per frame. A stale-by-one-frame read is tolerated, a torn one
//! is impossible.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use crate::Intent;

#[derive(Debug)]
pub(crate) struct SourceState {
    name: &'static str,
    bits: AtomicU8,
    detached: AtomicBool,
}

impl SourceState {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            bits: AtomicU8::new(0),
            detached: AtomicBool::new(false),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn intent(&self) -> Intent {
        Intent::from_bits_truncate(self.bits.load(Ordering::Acquire))
    }

    pub(crate) fn detach(&self) {
        self.detached.store(true, Ordering::Release);
        self.bits.store(0, Ordering::Release);
    }

    fn is_detached(&self) -> bool {
        self.detached.load(Ordering::Acquire)
    }
}

/// Write handle for a registered input source
///
/// Cloneable so it can be moved into event callbacks. Once the source is
/// detached all writes become no-ops.
#[derive(Clone, Debug)]
pub struct SourceHandle {
    state: Arc<SourceState>,
}

impl SourceHandle {
    pub(crate) fn new(state: Arc<SourceState>) -> Self {
        Self { state }
    }

    /// Source name (for logging)
    pub fn name(&self) -> &'static str {
        self.state.name()
    }

    /// Assert an intent (press)
    pub fn press(&self, intent: Intent) {
        if !self.state.is_detached() {
            self.state.bits.fetch_or(intent.bits(), Ordering::Release);
        }
    }

    /// Clear an intent (release)
    pub fn release(&self, intent: Intent) {
        if !self.state.is_detached() {
            self.state.bits.fetch_and(!intent.bits(), Ordering::Release);
        }
    }

    /// Press or release depending on `held`
    pub fn set(&self, intent: Intent, held: bool) {
        if held {
            self.press(intent);
        } else {
            self.release(intent);
        }
    }

    /// Replace the whole intent set of this source
    pub fn replace(&self, intent: Intent) {
        if !self.state.is_detached() {
            self.state.bits.store(intent.bits(), Ordering::Release);
        }
    }

    /// Release everything this source holds
    pub fn clear(&self) {
        self.replace(Intent::empty());
    }

    /// Intents currently asserted by this source
    pub fn current(&self) -> Intent {
        self.state.intent()
    }

    /// Check if the source has been detached from its aggregator
    pub fn is_detached(&self) -> bool {
        self.state.is_detached()
    }
}
