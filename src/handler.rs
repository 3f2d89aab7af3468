//! Event classification and dispatch.
//!
//! [`InputHandler`] is the single entry point for the windowing layer: every
//! raw key, motion, and touch callback is forwarded here, classified by its
//! source bits, normalized, and queued for the engine thread. Classification
//! rules are deliberately strict about overlapping sources: the same
//! physical signal can surface through two platform channels (a mouse click
//! arrives as both a touch and a button action), and exactly one of them may
//! reach the engine.
//!
//! All handlers run on the platform's input-dispatch thread and return the
//! platform's "handled" flag. Registry and pressed-button state are only
//! touched from that thread, so no locking is needed around them.

use log::debug;

use crate::buttons::engine_button;
use crate::codes::{action, axis, key, source, tool};
use crate::config::{EngineProtocol, IntakeConfig};
use crate::emission::Emission;
use crate::error::IntakeError;
use crate::event::{KeyEvent, MotionEvent};
use crate::queue::EmissionQueue;
use crate::registry::{DeviceProvider, JoystickRegistry};
use crate::shim::ButtonResolver;

/// Decide whether a key event comes from a game controller.
///
/// Keyboards frequently advertise the D-pad class alongside the keyboard
/// class; exactly that combination stays an ordinary keyboard. Any other
/// joystick/D-pad/gamepad capability routes the key to joystick handling.
pub fn is_game_device_key(source: u32) -> bool {
    if source == (source::KEYBOARD | source::DPAD) {
        return false;
    }
    source & source::JOYSTICK == source::JOYSTICK
        || source & source::DPAD == source::DPAD
        || source & source::GAMEPAD == source::GAMEPAD
}

#[inline]
fn is_hover_action(masked: u32) -> bool {
    matches!(
        masked,
        action::HOVER_ENTER | action::HOVER_MOVE | action::HOVER_EXIT
    )
}

/// Classifies raw platform events and queues normalized emissions.
pub struct InputHandler<P: DeviceProvider> {
    provider: P,
    registry: JoystickRegistry,
    resolver: ButtonResolver,
    protocol: EngineProtocol,
    reports_action_button: bool,
    queue: EmissionQueue,
}

impl<P: DeviceProvider> InputHandler<P> {
    pub fn new(provider: P, config: &IntakeConfig) -> Self {
        Self::with_queue(provider, config, EmissionQueue::new())
    }

    /// Build a handler emitting into an existing queue (shared with the
    /// consumer thread).
    pub fn with_queue(provider: P, config: &IntakeConfig, queue: EmissionQueue) -> Self {
        Self {
            provider,
            registry: JoystickRegistry::new(queue.clone()),
            resolver: ButtonResolver::new(config.reports_action_button),
            protocol: config.protocol,
            reports_action_button: config.reports_action_button,
            queue,
        }
    }

    /// Handle to the emission queue, for the consumer thread.
    pub fn queue(&self) -> EmissionQueue {
        self.queue.clone()
    }

    /// Register all currently attached devices (startup enumeration).
    pub fn init_devices(&mut self) {
        self.registry.init_from_provider(&self.provider);
    }

    pub fn on_device_added(&mut self, device_id: i32) {
        self.registry.add(&self.provider, device_id);
    }

    pub fn on_device_removed(&mut self, device_id: i32) {
        self.registry.remove(device_id);
    }

    pub fn on_device_changed(&mut self, device_id: i32) {
        self.registry.replace(&self.provider, device_id);
    }

    pub fn on_key_down(&mut self, event: &KeyEvent) -> bool {
        if event.key_code == key::BACK {
            // Consumed so a stray back press cannot tear the app down;
            // navigation semantics belong to the embedding view layer.
            return true;
        }
        if event.key_code == key::VOLUME_UP || event.key_code == key::VOLUME_DOWN {
            // Leave volume to the platform.
            return false;
        }

        if is_game_device_key(event.source) {
            if event.repeat_count > 0 {
                // Auto-repeat echo; buttons are edges, not holds.
                return true;
            }
            self.push_joy_button(event, true);
        } else {
            self.queue.push(Emission::Key {
                key_code: event.key_code,
                scan_code: event.scan_code,
                unicode_char: event.unicode_char,
                pressed: true,
            });
        }
        true
    }

    pub fn on_key_up(&mut self, event: &KeyEvent) -> bool {
        if event.key_code == key::BACK {
            return true;
        }
        if event.key_code == key::VOLUME_UP || event.key_code == key::VOLUME_DOWN {
            return false;
        }

        if is_game_device_key(event.source) {
            self.push_joy_button(event, false);
        } else {
            self.queue.push(Emission::Key {
                key_code: event.key_code,
                scan_code: event.scan_code,
                unicode_char: event.unicode_char,
                pressed: false,
            });
        }
        true
    }

    /// Handle a multi-character input event (IME composition or
    /// auto-complete insertion).
    ///
    /// The payload decomposes into synthetic down/up pairs with key code 0
    /// and scan code 0; only the character matters. An empty payload is
    /// reported as unhandled so the caller can apply its default behavior.
    pub fn on_key_multiple(&mut self, event: &KeyEvent) -> bool {
        if event.characters.is_empty() {
            return false;
        }
        for ch in event.characters.chars() {
            if ch == '\0' {
                continue;
            }
            let unicode_char = ch as u32;
            self.queue.push(Emission::Key {
                key_code: 0,
                scan_code: 0,
                unicode_char,
                pressed: true,
            });
            self.queue.push(Emission::Key {
                key_code: 0,
                scan_code: 0,
                unicode_char,
                pressed: false,
            });
        }
        true
    }

    /// Handle a generic motion event (joystick, stylus, or mouse).
    ///
    /// Source bits are checked in priority order (joystick, then stylus,
    /// then mouse); the first match wins, so one event is never treated as
    /// two sources.
    pub fn on_generic_motion(&mut self, event: &MotionEvent) -> Result<bool, IntakeError> {
        let masked = event.action_masked();

        if event.source & source::JOYSTICK == source::JOYSTICK && masked == action::MOVE {
            return Ok(self.handle_joystick_move(event));
        }
        if event.source & source::STYLUS == source::STYLUS {
            if is_hover_action(masked) {
                self.push_hover(event);
                return Ok(true);
            }
            return Ok(false);
        }
        if event.source & source::MOUSE == source::MOUSE {
            return self.handle_mouse(event);
        }
        // Pre-action-button platforms surface touch hover through the
        // generic stream; route it like stylus hover.
        if !self.reports_action_button && is_hover_action(masked) {
            self.push_hover(event);
            return Ok(true);
        }
        Ok(false)
    }

    /// Handle a multi-pointer touch event.
    pub fn on_touch(&mut self, event: &MotionEvent) -> bool {
        if event.pointers.is_empty() {
            // Nothing to report; claim the event so the platform stops here.
            return true;
        }

        let masked = event.action_masked();
        match masked {
            action::DOWN | action::UP => {
                if let [only] = event.pointers.as_slice() {
                    if only.tool_type == tool::MOUSE {
                        // The press/release already arrived through the
                        // mouse button path; emitting here would double the
                        // click.
                        return true;
                    }
                }
                self.push_touch(event, 0);
                true
            }
            action::MOVE | action::CANCEL => {
                self.push_touch(event, 0);
                true
            }
            action::POINTER_DOWN | action::POINTER_UP => {
                self.push_touch(event, event.pointer_index());
                true
            }
            _ => false,
        }
    }

    fn push_touch(&mut self, event: &MotionEvent, pointer_index: usize) {
        let (info, positions) = Emission::split_pointers(&event.pointers);
        self.queue.push(Emission::Touch {
            action_button: 0,
            action: event.action_masked(),
            pointer_index,
            info,
            positions,
        });
    }

    fn push_joy_button(&mut self, event: &KeyEvent, pressed: bool) {
        let button = engine_button(event.key_code);
        match self.registry.find(event.device_id) {
            Some(slot) => self.queue.push(Emission::JoyButton {
                device: slot,
                button,
                pressed,
            }),
            // Device may have detached mid-burst.
            None => debug!(
                "dropping game-controller key from unknown device {}",
                event.device_id
            ),
        }
    }

    fn handle_joystick_move(&mut self, event: &MotionEvent) -> bool {
        let slot = match self.registry.find(event.device_id) {
            Some(slot) => slot,
            None => {
                debug!(
                    "dropping joystick motion from unknown device {}",
                    event.device_id
                );
                return false;
            }
        };
        let joy = match self.registry.get(slot) {
            Some(joy) => joy,
            None => return false,
        };

        for (index, range) in joy.axes.iter().enumerate() {
            let value = (event.axis_value(range.axis) - range.min) / range.range * 2.0 - 1.0;
            self.queue.push(Emission::JoyAxis {
                device: slot,
                axis: index,
                value,
            });
        }
        for pair in joy.hats.chunks_exact(2) {
            let x = event.axis_value(pair[0].axis).round() as i32;
            let y = event.axis_value(pair[1].axis).round() as i32;
            self.queue.push(Emission::JoyHat { device: slot, x, y });
        }
        true
    }

    fn handle_mouse(&mut self, event: &MotionEvent) -> Result<bool, IntakeError> {
        let masked = event.action_masked();
        match masked {
            action::HOVER_ENTER | action::HOVER_MOVE | action::HOVER_EXIT => {
                self.push_hover(event);
                Ok(true)
            }
            action::SCROLL => {
                self.queue.push(Emission::Scroll {
                    tool_type: event.tool_type(),
                    x: event.x(),
                    y: event.y(),
                    h_delta: event.axis_value(axis::HSCROLL),
                    v_delta: event.axis_value(axis::VSCROLL),
                });
                Ok(true)
            }
            action::BUTTON_PRESS | action::BUTTON_RELEASE => {
                let pressed = masked == action::BUTTON_PRESS;
                let button = self.resolver.resolve(event)?;
                match self.protocol {
                    EngineProtocol::Legacy => self.queue.push(Emission::MousePressed {
                        button,
                        x: event.x(),
                        y: event.y(),
                        pressed,
                    }),
                    EngineProtocol::PointerInfo => {
                        let (info, positions) = Emission::split_pointers(&event.pointers);
                        self.queue.push(Emission::Touch {
                            action_button: button,
                            action: masked,
                            pointer_index: 0,
                            info,
                            positions,
                        });
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn push_hover(&mut self, event: &MotionEvent) {
        self.queue.push(Emission::Hover {
            tool_type: event.tool_type(),
            action: event.action_masked(),
            x: event.x(),
            y: event.y(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::button;
    use crate::event::Pointer;
    use crate::registry::{DeviceInfo, MotionRange};
    use std::collections::HashMap;

    struct FixtureProvider {
        devices: HashMap<i32, DeviceInfo>,
    }

    impl DeviceProvider for FixtureProvider {
        fn device_ids(&self) -> Vec<i32> {
            self.devices.keys().copied().collect()
        }
        fn device_info(&self, id: i32) -> Option<DeviceInfo> {
            self.devices.get(&id).cloned()
        }
    }

    fn pad_provider() -> FixtureProvider {
        let mut devices = HashMap::new();
        devices.insert(
            7,
            DeviceInfo {
                name: "pad".to_string(),
                sources: source::GAMEPAD | source::JOYSTICK,
                motion_ranges: vec![
                    MotionRange {
                        axis: axis::X,
                        min: -1.0,
                        range: 2.0,
                    },
                    MotionRange {
                        axis: axis::HAT_X,
                        min: -1.0,
                        range: 2.0,
                    },
                    MotionRange {
                        axis: axis::HAT_Y,
                        min: -1.0,
                        range: 2.0,
                    },
                ],
            },
        );
        FixtureProvider { devices }
    }

    fn handler(config: &IntakeConfig) -> InputHandler<FixtureProvider> {
        let mut handler = InputHandler::new(pad_provider(), config);
        handler.init_devices();
        // Swallow the connection notification; tests below start clean.
        handler.queue().pop();
        handler
    }

    fn joystick_move(raw_x: f32) -> MotionEvent {
        MotionEvent {
            device_id: 7,
            source: source::JOYSTICK,
            action: action::MOVE,
            axes: vec![(axis::X, raw_x)],
            ..Default::default()
        }
    }

    #[test]
    fn axis_readings_normalize_to_unit_range() {
        let mut handler = handler(&IntakeConfig::default());
        let queue = handler.queue();

        for (raw, expected) in [(-1.0, -1.0), (0.0, 0.0), (1.0, 1.0)] {
            assert!(handler.on_generic_motion(&joystick_move(raw)).unwrap());
            match queue.pop() {
                Some(Emission::JoyAxis { device, axis, value }) => {
                    assert_eq!(device, 0);
                    assert_eq!(axis, 0);
                    assert!((value - expected).abs() < f32::EPSILON);
                }
                other => panic!("expected axis emission, got {:?}", other),
            }
            // The hat pair also reports on every move.
            assert!(matches!(queue.pop(), Some(Emission::JoyHat { .. })));
        }
    }

    #[test]
    fn hat_pair_rounds_to_directions() {
        let mut handler = handler(&IntakeConfig::default());
        let queue = handler.queue();

        let mut event = joystick_move(0.0);
        event.axes.push((axis::HAT_X, -0.9));
        event.axes.push((axis::HAT_Y, 0.2));
        handler.on_generic_motion(&event).unwrap();

        queue.pop(); // axis 0
        assert_eq!(
            queue.pop(),
            Some(Emission::JoyHat {
                device: 0,
                x: -1,
                y: 0
            })
        );
    }

    #[test]
    fn mouse_press_uses_the_configured_protocol() {
        let press = MotionEvent {
            source: source::MOUSE,
            action: action::BUTTON_PRESS,
            action_button: button::PRIMARY,
            button_state: button::PRIMARY,
            pointers: vec![Pointer {
                id: 0,
                tool_type: tool::MOUSE,
                x: 40.0,
                y: 8.0,
            }],
            ..Default::default()
        };

        let mut modern = handler(&IntakeConfig::default());
        assert!(modern.on_generic_motion(&press).unwrap());
        assert!(matches!(
            modern.queue().pop(),
            Some(Emission::Touch {
                action_button: 1,
                pointer_index: 0,
                ..
            })
        ));

        let legacy_config = IntakeConfig {
            protocol: EngineProtocol::Legacy,
            ..Default::default()
        };
        let mut legacy = handler(&legacy_config);
        assert!(legacy.on_generic_motion(&press).unwrap());
        assert_eq!(
            legacy.queue().pop(),
            Some(Emission::MousePressed {
                button: button::PRIMARY,
                x: 40.0,
                y: 8.0,
                pressed: true,
            })
        );
    }

    #[test]
    fn scroll_reports_real_deltas() {
        let mut handler = handler(&IntakeConfig::default());
        let event = MotionEvent {
            source: source::MOUSE,
            action: action::SCROLL,
            pointers: vec![Pointer {
                id: 0,
                tool_type: tool::MOUSE,
                x: 10.0,
                y: 20.0,
            }],
            axes: vec![(axis::VSCROLL, -1.0), (axis::HSCROLL, 2.0)],
            ..Default::default()
        };

        assert!(handler.on_generic_motion(&event).unwrap());
        assert_eq!(
            handler.queue().pop(),
            Some(Emission::Scroll {
                tool_type: tool::MOUSE,
                x: 10.0,
                y: 20.0,
                h_delta: 2.0,
                v_delta: -1.0,
            })
        );
    }

    #[test]
    fn stylus_hover_carries_tool_type() {
        let mut handler = handler(&IntakeConfig::default());
        let event = MotionEvent {
            source: source::STYLUS,
            action: action::HOVER_MOVE,
            pointers: vec![Pointer {
                id: 0,
                tool_type: tool::STYLUS,
                x: 3.0,
                y: 4.0,
            }],
            ..Default::default()
        };

        assert!(handler.on_generic_motion(&event).unwrap());
        assert_eq!(
            handler.queue().pop(),
            Some(Emission::Hover {
                tool_type: tool::STYLUS,
                action: action::HOVER_MOVE,
                x: 3.0,
                y: 4.0,
            })
        );
    }
}
