//! Physical key code → engine button index.
//!
//! The engine addresses gamepad buttons by a fixed logical index; the
//! platform reports them as key codes. This table is part of the intake
//! compatibility contract and must stay byte-for-byte stable.

use crate::codes::key;

/// Map a physical gamepad key code to the engine's logical button index.
///
/// Named buttons use the fixed table below; any further numbered button is
/// mapped linearly into the range starting at 20. Platform A/B/X/Y follow
/// the SNES-style positions the engine expects, which is why A maps to 0.
pub fn engine_button(key_code: i32) -> i32 {
    match key_code {
        key::BUTTON_A => 0,
        key::BUTTON_B => 1,
        key::BUTTON_X => 2,
        key::BUTTON_Y => 3,
        key::BUTTON_L1 => 9,
        key::BUTTON_L2 => 15,
        key::BUTTON_R1 => 10,
        key::BUTTON_R2 => 16,
        key::BUTTON_SELECT => 4,
        key::BUTTON_START => 6,
        key::BUTTON_THUMBL => 7,
        key::BUTTON_THUMBR => 8,
        key::DPAD_UP => 11,
        key::DPAD_DOWN => 12,
        key::DPAD_LEFT => 13,
        key::DPAD_RIGHT => 14,
        key::BUTTON_C => 17,
        key::BUTTON_Z => 18,
        _ => key_code - key::BUTTON_1 + 20,
    }
}
