//! Platform input codes.
//!
//! Numeric constants mirroring the platform's input API. Classification logic
//! depends on the exact values (bit overlaps between source classes are part
//! of the contract), so these are fixed and must not be renumbered.
//!
//! ## Conventions
//! - `source::*` are bitmasks; a device can carry several source classes at
//!   once. Test membership with `(source & CLASS) == CLASS`, not a plain
//!   bit-and, because classes share low "class group" bits.
//! - `action::*` codes pack a gesture phase (low byte) with a pointer index
//!   (second byte) for multi-pointer events.
//! - `key::*` are physical key codes; gamepad buttons start at `BUTTON_A`,
//!   additional unnamed buttons are numbered from `BUTTON_1` upward.

/// Event source classes (bitmasks).
pub mod source {
    pub const KEYBOARD: u32 = 0x0000_0101;
    pub const DPAD: u32 = 0x0000_0201;
    pub const GAMEPAD: u32 = 0x0000_0401;
    pub const TOUCHSCREEN: u32 = 0x0000_1002;
    pub const MOUSE: u32 = 0x0000_2002;
    pub const STYLUS: u32 = 0x0000_4002;
    pub const JOYSTICK: u32 = 0x0100_0010;
}

/// Motion event action codes.
pub mod action {
    pub const DOWN: u32 = 0;
    pub const UP: u32 = 1;
    pub const MOVE: u32 = 2;
    pub const CANCEL: u32 = 3;
    pub const POINTER_DOWN: u32 = 5;
    pub const POINTER_UP: u32 = 6;
    pub const HOVER_MOVE: u32 = 7;
    pub const SCROLL: u32 = 8;
    pub const HOVER_ENTER: u32 = 9;
    pub const HOVER_EXIT: u32 = 10;
    pub const BUTTON_PRESS: u32 = 11;
    pub const BUTTON_RELEASE: u32 = 12;

    /// Low byte of an action code: the gesture phase.
    pub const MASK: u32 = 0x0000_00ff;
    /// Second byte: index of the pointer that triggered the action.
    pub const POINTER_INDEX_MASK: u32 = 0x0000_ff00;
    pub const POINTER_INDEX_SHIFT: u32 = 8;
}

/// Motion axis codes.
pub mod axis {
    pub const X: u32 = 0;
    pub const Y: u32 = 1;
    pub const VSCROLL: u32 = 9;
    pub const HSCROLL: u32 = 10;
    /// Hat axes always come in X/Y pairs with consecutive codes.
    pub const HAT_X: u32 = 15;
    pub const HAT_Y: u32 = 16;
}

/// Mouse button state bits.
pub mod button {
    pub const PRIMARY: u32 = 1 << 0;
    pub const SECONDARY: u32 = 1 << 1;
    pub const TERTIARY: u32 = 1 << 2;
}

/// Physical key codes.
pub mod key {
    pub const BACK: i32 = 4;
    pub const DPAD_UP: i32 = 19;
    pub const DPAD_DOWN: i32 = 20;
    pub const DPAD_LEFT: i32 = 21;
    pub const DPAD_RIGHT: i32 = 22;
    pub const VOLUME_UP: i32 = 24;
    pub const VOLUME_DOWN: i32 = 25;

    pub const BUTTON_A: i32 = 96;
    pub const BUTTON_B: i32 = 97;
    pub const BUTTON_C: i32 = 98;
    pub const BUTTON_X: i32 = 99;
    pub const BUTTON_Y: i32 = 100;
    pub const BUTTON_Z: i32 = 101;
    pub const BUTTON_L1: i32 = 102;
    pub const BUTTON_R1: i32 = 103;
    pub const BUTTON_L2: i32 = 104;
    pub const BUTTON_R2: i32 = 105;
    pub const BUTTON_THUMBL: i32 = 106;
    pub const BUTTON_THUMBR: i32 = 107;
    pub const BUTTON_START: i32 = 108;
    pub const BUTTON_SELECT: i32 = 109;

    /// First of the unnamed numbered gamepad buttons (`BUTTON_1`,
    /// `BUTTON_2`, ...).
    pub const BUTTON_1: i32 = 188;
}

/// Pointer tool types.
pub mod tool {
    pub const UNKNOWN: u32 = 0;
    pub const FINGER: u32 = 1;
    pub const STYLUS: u32 = 2;
    pub const MOUSE: u32 = 3;
    pub const ERASER: u32 = 4;
}
