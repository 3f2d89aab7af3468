//! Intake: platform input normalization for game engines.
//!
//! Funnels a platform's raw, source-diverse input events (keyboard,
//! multi-touch, mouse, stylus, joystick/gamepad) into a single normalized
//! emission stream with stable device slots and `[-1, 1]` axis semantics,
//! queued from the input-dispatch thread and replayed on the engine's own
//! thread.

pub mod buttons;
pub mod codes;
pub mod config;
pub mod emission;
pub mod error;
pub mod event;
pub mod handler;
pub mod queue;
pub mod registry;
pub mod shim;

pub use buttons::engine_button;
pub use config::*;
pub use emission::*;
pub use error::*;
pub use event::*;
pub use handler::*;
pub use queue::*;
pub use registry::*;
pub use shim::*;
