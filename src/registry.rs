//! Joystick device registry.
//!
//! Tracks currently attached joystick/gamepad devices and assigns each one a
//! small-integer slot: its position in the registration order. Slots are
//! compacted on removal (every later device shifts down by one), so they are
//! only meaningful within a session and must not be cached across
//! connection-changed notifications.
//!
//! The platform is reached exclusively through [`DeviceProvider`], which
//! keeps the registry (and everything above it) testable without a live
//! input system.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::codes::{axis, source};
use crate::emission::Emission;
use crate::queue::EmissionQueue;

/// Declared value range of one motion axis, used to affine-map raw readings
/// into `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionRange {
    /// Platform axis code (see [`crate::codes::axis`]).
    pub axis: u32,
    /// Smallest raw reading the device reports on this axis.
    pub min: f32,
    /// Extent of raw readings (`max - min`).
    pub range: f32,
}

/// Platform-reported description of one input device.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// User-facing device name.
    pub name: String,
    /// Source class bitmask (see [`crate::codes::source`]).
    pub sources: u32,
    /// Declared motion ranges, in whatever order the platform lists them.
    pub motion_ranges: Vec<MotionRange>,
}

/// Query seam to the platform's device tables.
///
/// The windowing layer implements this against the real input system; tests
/// implement it with fixed fixtures.
pub trait DeviceProvider {
    /// Identifiers of all currently attached input devices.
    fn device_ids(&self) -> Vec<i32>;

    /// Description of the device with `id`, or `None` if it is gone.
    ///
    /// A device can detach between the notification and this query, so
    /// `None` is an expected answer, not an error.
    fn device_info(&self, id: i32) -> Option<DeviceInfo>;
}

/// One registered joystick/gamepad.
#[derive(Clone, Debug)]
pub struct Joystick {
    /// Platform device identifier. Opaque, and not guaranteed stable across
    /// a replug.
    pub platform_id: i32,
    pub name: String,
    /// Regular axes, sorted by axis code.
    pub axes: Vec<MotionRange>,
    /// Hat axes, sorted by axis code; always consecutive X/Y pairs.
    pub hats: Vec<MotionRange>,
}

/// Slot-ordered collection of attached joysticks.
///
/// The index of a device in the internal list *is* its externally visible
/// slot. Connection changes are announced through the emission queue handed
/// in at construction.
pub struct JoystickRegistry {
    devices: Vec<Joystick>,
    queue: EmissionQueue,
}

impl JoystickRegistry {
    pub fn new(queue: EmissionQueue) -> Self {
        Self {
            devices: Vec::new(),
            queue,
        }
    }

    /// Slot of the device with `platform_id`, if registered.
    ///
    /// Linear scan; device counts are small.
    pub fn find(&self, platform_id: i32) -> Option<usize> {
        self.devices.iter().position(|j| j.platform_id == platform_id)
    }

    /// The device occupying `slot`.
    pub fn get(&self, slot: usize) -> Option<&Joystick> {
        self.devices.get(slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Register the device with `platform_id`, if it is new and reports
    /// gamepad or joystick capability.
    ///
    /// Returns the assigned slot, or `None` when the device was already
    /// registered, has disappeared, or is not a game controller. On success
    /// a connection-changed emission is queued.
    pub fn add(&mut self, provider: &dyn DeviceProvider, platform_id: i32) -> Option<usize> {
        if self.find(platform_id).is_some() {
            return None;
        }

        let info = provider.device_info(platform_id)?;
        let is_gamepad = info.sources & source::GAMEPAD == source::GAMEPAD;
        let is_joystick = info.sources & source::JOYSTICK == source::JOYSTICK;
        if !is_gamepad && !is_joystick {
            debug!(
                "ignoring device {} ({:?}): sources 0x{:x} are not a game controller",
                platform_id, info.name, info.sources
            );
            return None;
        }

        let mut ranges = info.motion_ranges;
        ranges.sort_by_key(|r| r.axis);

        // One sorted pass; the partition keeps the global order inside each
        // half, so axis indices are deterministic for a given device.
        let mut axes = Vec::new();
        let mut hats = Vec::new();
        for range in ranges {
            if range.axis == axis::HAT_X || range.axis == axis::HAT_Y {
                hats.push(range);
            } else {
                axes.push(range);
            }
        }

        let slot = self.devices.len();
        let name = info.name.clone();
        debug!(
            "registered joystick {:?} (platform id {}) at slot {}: {} axes, {} hat axes",
            name,
            platform_id,
            slot,
            axes.len(),
            hats.len()
        );

        self.devices.push(Joystick {
            platform_id,
            name: info.name,
            axes,
            hats,
        });
        self.queue.push(Emission::JoyConnectionChanged {
            device: slot,
            connected: true,
            name,
        });
        Some(slot)
    }

    /// Unregister the device with `platform_id`.
    ///
    /// Returns the slot the device held before removal, which is also the
    /// slot announced in the disconnection emission. Slots past it shift
    /// down without re-notification.
    pub fn remove(&mut self, platform_id: i32) -> Option<usize> {
        let slot = self.find(platform_id)?;
        let removed = self.devices.remove(slot);
        debug!(
            "removed joystick {:?} (platform id {}) from slot {}",
            removed.name, platform_id, slot
        );
        self.queue.push(Emission::JoyConnectionChanged {
            device: slot,
            connected: false,
            name: String::new(),
        });
        Some(slot)
    }

    /// Re-register a device after an in-place capability change.
    pub fn replace(&mut self, provider: &dyn DeviceProvider, platform_id: i32) {
        self.remove(platform_id);
        self.add(provider, platform_id);
    }

    /// Register everything currently attached.
    ///
    /// Safe to run alongside attach notifications: duplicates are no-ops.
    pub fn init_from_provider(&mut self, provider: &dyn DeviceProvider) {
        for id in provider.device_ids() {
            if let Some(info) = provider.device_info(id) {
                debug!("init: device id {} name {:?}", id, info.name);
            }
            self.add(provider, id);
        }
    }
}
