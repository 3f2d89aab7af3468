//! Crate error type.

use thiserror::Error;

/// Errors surfaced by the intake layer.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// A button press/release action arrived with no observable change in
    /// the button state mask. The event stream is desynchronized and the
    /// caller must not attempt recovery.
    #[error("button action fired with no button-state change (state mask 0x{state:x})")]
    ButtonStateDesync { state: u32 },

    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
