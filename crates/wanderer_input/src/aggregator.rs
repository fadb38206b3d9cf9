//! Input aggregation
//!
//! Merges every registered source into a single [`InputState`] per frame.

use std::sync::Arc;

use crate::device::DeviceClass;
use crate::keyboard::KeyboardSource;
use crate::source::{SourceHandle, SourceState};
use crate::touch::{TouchLayout, TouchSource};
use crate::{Intent, InputState};

/// Merges keyboard and touch sources into a normalized intent
///
/// The aggregator is owned by the simulation thread. Sources are written
/// from event handlers through their [`SourceHandle`]s and read here with a
/// single atomic load each.
#[derive(Debug, Default)]
pub struct InputAggregator {
    sources: Vec<Arc<SourceState>>,
    detached: bool,
}

/// Input sources attached for one scene session
#[derive(Debug)]
pub struct MountedInput {
    pub aggregator: InputAggregator,
    pub keyboard: KeyboardSource,
    /// Present only on touch-capable devices
    pub touch: Option<TouchSource>,
}

impl InputAggregator {
    /// Create an aggregator with no sources
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the sources appropriate for a device class
    ///
    /// The keyboard source is always registered; the touch overlay only
    /// exists on touch-capable devices.
    pub fn mount(device: DeviceClass, layout: TouchLayout) -> MountedInput {
        let mut aggregator = Self::new();
        let keyboard = KeyboardSource::new(aggregator.register("keyboard"));
        let touch = if device.is_touch() {
            Some(TouchSource::new(aggregator.register("touch"), layout))
        } else {
            None
        };

        log::info!(
            "Input mounted for {:?} device ({} sources)",
            device,
            aggregator.source_count()
        );

        MountedInput {
            aggregator,
            keyboard,
            touch,
        }
    }

    /// Register a new source and return its write handle
    ///
    /// Registering after [`detach_all`](Self::detach_all) returns a handle
    /// that is already detached.
    pub fn register(&mut self, name: &'static str) -> SourceHandle {
        let state = Arc::new(SourceState::new(name));
        if self.detached {
            state.detach();
        } else {
            self.sources.push(Arc::clone(&state));
        }
        SourceHandle::new(state)
    }

    /// Number of attached sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Raw union of every source's intent bits
    pub fn raw_intent(&self) -> Intent {
        self.sources
            .iter()
            .fold(Intent::empty(), |acc, source| acc | source.intent())
    }

    /// Snapshot the current intent
    pub fn current_intent(&self) -> InputState {
        InputState::from(self.raw_intent())
    }

    /// Detach and clear every source
    ///
    /// Called on scene teardown. Handles held by event callbacks stay valid
    /// but their writes are ignored from now on.
    pub fn detach_all(&mut self) {
        for source in self.sources.drain(..) {
            log::debug!("Detaching input source '{}'", source.name());
            source.detach();
        }
        self.detached = true;
    }

    /// Check if the aggregator has been torn down
    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_aggregator_is_idle() {
        let agg = InputAggregator::new();
        assert_eq!(agg.current_intent(), InputState::IDLE);
    }

    #[test]
    fn test_sources_are_ored() {
        let mut agg = InputAggregator::new();
        let keys = agg.register("keys");
        let touch = agg.register("touch");

        keys.press(Intent::UP);
        touch.press(Intent::UP | Intent::LEFT);
        let state = agg.current_intent();
        assert!(state.move_up);
        assert!(state.move_left);

        // Releasing one source keeps the intent alive from the other
        keys.release(Intent::UP);
        assert!(agg.current_intent().move_up);

        touch.clear();
        assert_eq!(agg.current_intent(), InputState::IDLE);
    }

    #[test]
    fn test_snapshot_is_not_accumulated() {
        let mut agg = InputAggregator::new();
        let keys = agg.register("keys");

        keys.press(Intent::JUMP);
        assert!(agg.current_intent().jump_requested);
        keys.release(Intent::JUMP);
        assert!(!agg.current_intent().jump_requested);
    }

    #[test]
    fn test_detach_all() {
        let mut agg = InputAggregator::new();
        let keys = agg.register("keys");
        keys.press(Intent::RIGHT);

        agg.detach_all();
        assert!(agg.is_detached());
        assert_eq!(agg.source_count(), 0);
        assert!(keys.is_detached());

        keys.press(Intent::RIGHT);
        assert_eq!(agg.current_intent(), InputState::IDLE);

        let late = agg.register("late");
        assert!(late.is_detached());
        assert_eq!(agg.source_count(), 0);
    }

    #[test]
    fn test_mount_desktop_has_no_touch() {
        let mounted = InputAggregator::mount(DeviceClass::Desktop, TouchLayout::default());
        assert!(mounted.touch.is_none());
        assert_eq!(mounted.aggregator.source_count(), 1);
    }

    #[test]
    fn test_mount_touch_device() {
        let mounted = InputAggregator::mount(DeviceClass::Touch, TouchLayout::default());
        assert!(mounted.touch.is_some());
        assert_eq!(mounted.aggregator.source_count(), 2);

        let debug = format!("{:?}", mounted);
        assert!(debug.contains("TouchSource"));
        assert!(debug.contains("KeyboardSource"));
    }
}
