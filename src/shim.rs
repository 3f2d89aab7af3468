//! Changed-button resolution.
//!
//! A mouse button-press/release action needs to be attributed to one
//! specific button. Newer platform versions report it directly on the event;
//! older ones only expose the full button state mask, so the changed button
//! has to be recovered by diffing against the previously observed state.
//! Which strategy applies is decided once at startup from the platform
//! capability flag, not re-checked per event.

use crate::error::IntakeError;
use crate::event::MotionEvent;

/// Number of tracked mouse button slots.
const BUTTON_SLOTS: usize = 4;

/// Slot that never maps to a real button: its button id would be 3, which
/// is `0b11` in the state mask and collides with primary|secondary.
const DEAD_SLOT: usize = 2;

/// Last pressed-state reported to the engine, per button slot.
///
/// Slot `i` corresponds to button id `i + 1`. Must exactly mirror what the
/// engine has been told, or subsequent diffs desynchronize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressedButtons([bool; BUTTON_SLOTS]);

impl PressedButtons {
    /// Find the first button whose state-mask bit disagrees with the stored
    /// flag, flip the flag, and return the button id.
    ///
    /// No disagreement means a button action fired without a state change,
    /// which indicates platform misbehavior and is fatal.
    pub fn diff(&mut self, button_state: u32) -> Result<u32, IntakeError> {
        for slot in 0..BUTTON_SLOTS {
            if slot == DEAD_SLOT {
                continue;
            }
            let id = (slot as u32) + 1;
            let down = button_state & id != 0;
            if down != self.0[slot] {
                self.0[slot] = down;
                return Ok(id);
            }
        }
        Err(IntakeError::ButtonStateDesync {
            state: button_state,
        })
    }
}

/// Strategy for answering "which button changed" on a button action.
#[derive(Clone, Debug)]
pub enum ButtonResolver {
    /// The platform reports the changed button on the event itself.
    ActionButton,
    /// Legacy platform: recover the changed button from the state-mask diff.
    MaskDiff(PressedButtons),
}

impl ButtonResolver {
    /// Pick the strategy for a platform that does (or does not) report the
    /// action button directly.
    pub fn new(reports_action_button: bool) -> Self {
        if reports_action_button {
            ButtonResolver::ActionButton
        } else {
            ButtonResolver::MaskDiff(PressedButtons::default())
        }
    }

    /// Resolve the button behind a press/release action.
    pub fn resolve(&mut self, event: &MotionEvent) -> Result<u32, IntakeError> {
        match self {
            ButtonResolver::ActionButton => Ok(event.action_button),
            ButtonResolver::MaskDiff(pressed) => pressed.diff(event.button_state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::button;

    #[test]
    fn press_then_release_resolve_to_the_same_button() {
        let mut pressed = PressedButtons::default();

        // Primary goes down: bit 1 set, stored flag clear.
        assert_eq!(pressed.diff(button::PRIMARY).unwrap(), 1);
        // Primary comes up: bit 1 clear, stored flag set.
        assert_eq!(pressed.diff(0).unwrap(), 1);
        assert_eq!(pressed, PressedButtons::default());
    }

    #[test]
    fn secondary_resolves_independently_of_primary() {
        let mut pressed = PressedButtons::default();
        assert_eq!(pressed.diff(button::PRIMARY).unwrap(), 1);
        assert_eq!(
            pressed.diff(button::PRIMARY | button::SECONDARY).unwrap(),
            2
        );
        assert_eq!(pressed.diff(button::PRIMARY).unwrap(), 2);
        assert_eq!(pressed.diff(0).unwrap(), 1);
    }

    #[test]
    fn tertiary_uses_the_slot_past_the_dead_one() {
        let mut pressed = PressedButtons::default();
        // Tertiary is mask 0b100 = button id 4, slot 3; slot 2 is skipped.
        assert_eq!(pressed.diff(button::TERTIARY).unwrap(), 4);
        assert_eq!(pressed.diff(0).unwrap(), 4);
    }

    #[test]
    fn no_state_change_is_fatal() {
        let mut pressed = PressedButtons::default();
        let err = pressed.diff(0).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::ButtonStateDesync { state: 0 }
        ));
    }

    #[test]
    fn action_button_strategy_reads_the_event() {
        let mut resolver = ButtonResolver::new(true);
        let event = MotionEvent {
            action_button: button::SECONDARY,
            ..Default::default()
        };
        assert_eq!(resolver.resolve(&event).unwrap(), button::SECONDARY);
    }
}
