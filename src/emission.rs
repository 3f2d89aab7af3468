//! Engine-facing emissions.
//!
//! Every classified input event boils down to one or more [`Emission`]
//! values: small, owned command records queued from the input-dispatch
//! thread and replayed on the engine's own thread. The emission set is the
//! compatibility contract with the engine intake API; field order and units
//! must not drift.
//!
//! ## Value conventions
//! - **Joystick axes:** normalized to `[-1.0, 1.0]`.
//! - **Hats:** reported as a rounded X/Y direction pair in `{-1, 0, 1}`.
//! - **Coordinates:** raw pixel units from the originating event.
//! - **Scroll:** real horizontal/vertical wheel deltas, not synthesized
//!   button presses.

use crate::event::Pointer;

/// `(pointer id, tool type)` entry of a touch emission.
///
/// Runs parallel to the [`PointerPos`] array: entry `i` of each describes
/// the same pointer slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerInfo {
    pub id: i32,
    pub tool_type: u32,
}

/// `(x, y)` entry of a touch emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPos {
    pub x: f32,
    pub y: f32,
}

/// One call into the engine intake API, queued for the consumer thread.
#[derive(Clone, Debug, PartialEq)]
pub enum Emission {
    /// Joystick button state changed.
    JoyButton {
        device: usize,
        button: i32,
        pressed: bool,
    },
    /// Joystick axis moved; `value` is normalized to `[-1, 1]`.
    JoyAxis {
        device: usize,
        axis: usize,
        value: f32,
    },
    /// Hat (D-pad pair) direction changed.
    JoyHat { device: usize, x: i32, y: i32 },
    /// A joystick device attached or detached.
    JoyConnectionChanged {
        device: usize,
        connected: bool,
        name: String,
    },
    /// Raw keyboard key state changed.
    Key {
        key_code: i32,
        scan_code: i32,
        unicode_char: u32,
        pressed: bool,
    },
    /// Pointer hover (stylus or mouse, no contact).
    Hover {
        tool_type: u32,
        action: u32,
        x: f32,
        y: f32,
    },
    /// Mouse wheel scroll with real deltas.
    Scroll {
        tool_type: u32,
        x: f32,
        y: f32,
        h_delta: f32,
        v_delta: f32,
    },
    /// Touch/pointer gesture with full per-pointer payload.
    Touch {
        action_button: u32,
        action: u32,
        pointer_index: usize,
        info: Vec<PointerInfo>,
        positions: Vec<PointerPos>,
    },
    /// Mouse button press/release in the legacy intake protocol.
    MousePressed {
        button: u32,
        x: f32,
        y: f32,
        pressed: bool,
    },
}

impl Emission {
    /// Replay this emission as the corresponding [`EngineSink`] call.
    pub fn apply(&self, sink: &mut dyn EngineSink) {
        match self {
            Emission::JoyButton {
                device,
                button,
                pressed,
            } => sink.joy_button(*device, *button, *pressed),
            Emission::JoyAxis {
                device,
                axis,
                value,
            } => sink.joy_axis(*device, *axis, *value),
            Emission::JoyHat { device, x, y } => sink.joy_hat(*device, *x, *y),
            Emission::JoyConnectionChanged {
                device,
                connected,
                name,
            } => sink.joy_connection_changed(*device, *connected, name),
            Emission::Key {
                key_code,
                scan_code,
                unicode_char,
                pressed,
            } => sink.key(*key_code, *scan_code, *unicode_char, *pressed),
            Emission::Hover {
                tool_type,
                action,
                x,
                y,
            } => sink.hover(*tool_type, *action, *x, *y),
            Emission::Scroll {
                tool_type,
                x,
                y,
                h_delta,
                v_delta,
            } => sink.scroll(*tool_type, *x, *y, *x, *y, *h_delta, *v_delta),
            Emission::Touch {
                action_button,
                action,
                pointer_index,
                info,
                positions,
            } => sink.touch(
                *action_button,
                *action,
                *pointer_index,
                info.len(),
                info,
                positions,
            ),
            Emission::MousePressed {
                button,
                x,
                y,
                pressed,
            } => sink.mouse_pressed(*button, *x, *y, *pressed),
        }
    }

    /// Build the parallel info/position arrays of a touch emission from raw
    /// pointers.
    pub fn split_pointers(pointers: &[Pointer]) -> (Vec<PointerInfo>, Vec<PointerPos>) {
        let info = pointers
            .iter()
            .map(|p| PointerInfo {
                id: p.id,
                tool_type: p.tool_type,
            })
            .collect();
        let positions = pointers.iter().map(|p| PointerPos { x: p.x, y: p.y }).collect();
        (info, positions)
    }
}

/// The engine intake API, as seen from the consumer thread.
///
/// Implementations must only be touched from the engine's own thread; the
/// queue guarantees calls arrive in emission order.
pub trait EngineSink {
    fn joy_button(&mut self, device: usize, button: i32, pressed: bool);
    fn joy_axis(&mut self, device: usize, axis: usize, value: f32);
    fn joy_hat(&mut self, device: usize, x: i32, y: i32);
    fn joy_connection_changed(&mut self, device: usize, connected: bool, name: &str);
    fn key(&mut self, key_code: i32, scan_code: i32, unicode_char: u32, pressed: bool);
    fn hover(&mut self, tool_type: u32, action: u32, x: f32, y: f32);
    #[allow(clippy::too_many_arguments)]
    fn scroll(
        &mut self,
        tool_type: u32,
        from_x: f32,
        from_y: f32,
        to_x: f32,
        to_y: f32,
        h_delta: f32,
        v_delta: f32,
    );
    fn touch(
        &mut self,
        action_button: u32,
        action: u32,
        pointer_index: usize,
        pointer_count: usize,
        info: &[PointerInfo],
        positions: &[PointerPos],
    );
    fn mouse_pressed(&mut self, button: u32, x: f32, y: f32, pressed: bool);
}
