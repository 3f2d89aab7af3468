//! Raw inbound events.
//!
//! These structs are intentionally "dumb": they carry a platform input event
//! exactly as the windowing layer received it, with no routing decisions
//! baked in. Higher-level classification (joystick vs. stylus vs. mouse,
//! keyboard vs. game controller) lives in [`InputHandler`](crate::handler::InputHandler).
//!
//! ## What you get
//! - Key events: key code + scan code + unicode char + source bits
//! - Motion events: action code, per-pointer positions/tool types, sparse
//!   axis readings, and the mouse button state mask
//!
//! ## What you **don't** get (by design)
//! - No normalized axis values (the classifier applies the device's motion
//!   ranges)
//! - No stable device slots (the registry decides that)
//!
//! ## Conventions
//! - Coordinates are in raw pixel units as reported by the platform.
//! - `axes` is a sparse `(axis code, raw reading)` list; absent axes read as
//!   `0.0`, matching platform behavior for unreported axes.

use crate::codes::action;

/// A raw key event as delivered by the windowing layer.
#[derive(Clone, Debug, Default)]
pub struct KeyEvent {
    /// Platform-assigned identifier of the originating device.
    pub device_id: i32,
    /// Source class bitmask (see [`crate::codes::source`]).
    pub source: u32,
    /// Physical key code.
    pub key_code: i32,
    /// Hardware scan code (layout-independent).
    pub scan_code: i32,
    /// Unicode code point produced by the key, `0` if none.
    pub unicode_char: u32,
    /// Auto-repeat echo count; `0` for the initial press.
    pub repeat_count: u32,
    /// Composed character payload for multi-character input events
    /// (IME insertions); empty otherwise.
    pub characters: String,
}

/// One active pointer within a motion event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Platform pointer id, stable for the duration of the gesture.
    pub id: i32,
    /// Tool type of the implement (see [`crate::codes::tool`]).
    pub tool_type: u32,
    pub x: f32,
    pub y: f32,
}

/// A raw motion event (joystick move, stylus/mouse motion, touch gesture).
#[derive(Clone, Debug, Default)]
pub struct MotionEvent {
    /// Platform-assigned identifier of the originating device.
    pub device_id: i32,
    /// Source class bitmask (see [`crate::codes::source`]).
    pub source: u32,
    /// Packed action code: gesture phase plus triggering pointer index.
    pub action: u32,
    /// Currently-down mouse button bits (see [`crate::codes::button`]).
    pub button_state: u32,
    /// The single button that changed, on platforms that report it; `0`
    /// otherwise.
    pub action_button: u32,
    /// Active pointers, indexed by pointer slot.
    pub pointers: Vec<Pointer>,
    /// Sparse `(axis code, raw reading)` pairs.
    pub axes: Vec<(u32, f32)>,
}

impl MotionEvent {
    /// Gesture phase independent of which pointer triggered it.
    #[inline]
    pub fn action_masked(&self) -> u32 {
        self.action & action::MASK
    }

    /// Index of the pointer that triggered this action (for
    /// pointer-up/pointer-down transitions).
    #[inline]
    pub fn pointer_index(&self) -> usize {
        ((self.action & action::POINTER_INDEX_MASK) >> action::POINTER_INDEX_SHIFT) as usize
    }

    /// Raw reading of `axis`, or `0.0` if the event does not carry it.
    pub fn axis_value(&self, axis: u32) -> f32 {
        self.axes
            .iter()
            .find(|(code, _)| *code == axis)
            .map(|(_, value)| *value)
            .unwrap_or(0.0)
    }

    /// X coordinate of the first pointer (`0.0` if none).
    #[inline]
    pub fn x(&self) -> f32 {
        self.pointers.first().map(|p| p.x).unwrap_or(0.0)
    }

    /// Y coordinate of the first pointer (`0.0` if none).
    #[inline]
    pub fn y(&self) -> f32 {
        self.pointers.first().map(|p| p.y).unwrap_or(0.0)
    }

    /// Tool type of the first pointer (`tool::UNKNOWN` if none).
    #[inline]
    pub fn tool_type(&self) -> u32 {
        self.pointers.first().map(|p| p.tool_type).unwrap_or(0)
    }
}
