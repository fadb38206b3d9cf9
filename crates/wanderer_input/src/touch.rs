//! On-screen touch controls
//!
//! A directional pad anchored to the bottom-right corner and a jump button
//! anchored to the bottom-left. Button geometry is described in logical
//! pixels; the overlay itself is drawn by whoever presents the frame.

use std::collections::HashMap;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::TouchPhase;

use crate::source::SourceHandle;
use crate::Intent;

/// Screen corner a button is anchored to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    BottomLeft,
    BottomRight,
}

/// A square on-screen button
#[derive(Clone, Debug, PartialEq)]
pub struct TouchButton {
    pub label: &'static str,
    pub intent: Intent,
    pub anchor: Anchor,
    /// Horizontal distance from the anchored edge (logical px)
    pub edge_offset: f32,
    /// Distance from the bottom edge (logical px)
    pub bottom_offset: f32,
    /// Side length (logical px)
    pub size: f32,
}

/// Pixel rectangle in physical coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Viewport used to resolve anchored buttons into screen rectangles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: PhysicalSize<u32>,
    pub scale_factor: f64,
}

impl Viewport {
    pub fn new(size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        Self { size, scale_factor }
    }
}

impl TouchButton {
    /// Resolve the button into physical pixels for a viewport
    pub fn rect(&self, viewport: &Viewport) -> ScreenRect {
        let scale = viewport.scale_factor as f32;
        let size = self.size * scale;
        let x = match self.anchor {
            Anchor::BottomLeft => self.edge_offset * scale,
            Anchor::BottomRight => viewport.size.width as f32 - (self.edge_offset * scale + size),
        };
        let y = viewport.size.height as f32 - (self.bottom_offset * scale + size);
        ScreenRect {
            x,
            y,
            width: size,
            height: size,
        }
    }
}

/// Arrangement of the touch overlay
#[derive(Clone, Debug, PartialEq)]
pub struct TouchLayout {
    pub buttons: Vec<TouchButton>,
}

impl Default for TouchLayout {
    fn default() -> Self {
        let pad = |label, intent, edge_offset, bottom_offset| TouchButton {
            label,
            intent,
            anchor: Anchor::BottomRight,
            edge_offset,
            bottom_offset,
            size: 60.0,
        };

        Self {
            buttons: vec![
                pad("▲", Intent::UP, 70.0, 150.0),
                pad("▼", Intent::DOWN, 70.0, 70.0),
                pad("◄", Intent::LEFT, 140.0, 110.0),
                pad("▶", Intent::RIGHT, 10.0, 110.0),
                TouchButton {
                    label: "JUMP",
                    intent: Intent::JUMP,
                    anchor: Anchor::BottomLeft,
                    edge_offset: 20.0,
                    bottom_offset: 20.0,
                    size: 80.0,
                },
            ],
        }
    }
}

impl TouchLayout {
    /// Find the button under a physical screen position
    pub fn hit_test(&self, position: PhysicalPosition<f64>, viewport: &Viewport) -> Option<&TouchButton> {
        let (x, y) = (position.x as f32, position.y as f32);
        self.buttons
            .iter()
            .find(|button| button.rect(viewport).contains(x, y))
    }
}

/// Touch source: each finger holds the intent of the button it started on
#[derive(Debug)]
pub struct TouchSource {
    handle: SourceHandle,
    layout: TouchLayout,
    active: HashMap<u64, Intent>,
}

impl TouchSource {
    pub fn new(handle: SourceHandle, layout: TouchLayout) -> Self {
        Self {
            handle,
            layout,
            active: HashMap::new(),
        }
    }

    /// Overlay buttons to draw
    pub fn layout(&self) -> &TouchLayout {
        &self.layout
    }

    /// Process a touch event
    ///
    /// A touch that starts on a button holds that button's intent until the
    /// same touch ends or is cancelled. Dragging off the button does not
    /// release it. Returns true if the touch belongs to the overlay.
    pub fn process_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        position: PhysicalPosition<f64>,
        viewport: &Viewport,
    ) -> bool {
        let consumed = match phase {
            TouchPhase::Started => match self.layout.hit_test(position, viewport) {
                Some(button) => {
                    self.active.insert(id, button.intent);
                    true
                }
                None => false,
            },
            TouchPhase::Moved => self.active.contains_key(&id),
            TouchPhase::Ended | TouchPhase::Cancelled => self.active.remove(&id).is_some(),
        };

        if consumed {
            let held = self
                .active
                .values()
                .fold(Intent::empty(), |acc, intent| acc | *intent);
            self.handle.replace(held);
        }
        consumed
    }

    /// Release every held button
    pub fn release_all(&mut self) {
        self.active.clear();
        self.handle.clear();
    }
}
