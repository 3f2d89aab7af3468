//! Intake configuration.
//!
//! Two startup-time decisions live here, both resolved once and never
//! re-checked during event handling:
//!
//! - which engine intake generation is targeted (pointer-info `touch` calls
//!   vs. the legacy `mousePressed` shape), and
//! - whether the platform build reports the changed mouse button directly
//!   on the event (newer OS releases) or only as a state mask (older ones).
//!
//! The embedding layer usually fills this from its OS version query and
//! engine version; a TOML override is supported for bring-up and testing.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::IntakeError;

/// Engine intake API generation targeted by mouse button emissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineProtocol {
    /// Rich form: button presses arrive as `touch` calls carrying the full
    /// per-pointer payload.
    #[default]
    PointerInfo,
    /// Legacy form: button presses arrive as `mousePressed` calls.
    Legacy,
}

/// Startup configuration for an [`InputHandler`](crate::handler::InputHandler).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Targeted engine intake generation.
    pub protocol: EngineProtocol,
    /// `true` when the platform reports the changed button on
    /// press/release events; `false` selects the state-mask diffing
    /// fallback.
    pub reports_action_button: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            protocol: EngineProtocol::PointerInfo,
            reports_action_button: true,
        }
    }
}

impl IntakeConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, IntakeError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IntakeError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_modern_platform() {
        let config = IntakeConfig::default();
        assert_eq!(config.protocol, EngineProtocol::PointerInfo);
        assert!(config.reports_action_button);
    }

    #[test]
    fn parses_overrides_and_fills_gaps() {
        let config = IntakeConfig::from_toml_str("protocol = \"legacy\"").unwrap();
        assert_eq!(config.protocol, EngineProtocol::Legacy);
        assert!(config.reports_action_button);

        let config =
            IntakeConfig::from_toml_str("reports_action_button = false").unwrap();
        assert_eq!(config.protocol, EngineProtocol::PointerInfo);
        assert!(!config.reports_action_button);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(IntakeConfig::from_toml_str("protocol = 7").is_err());
    }
}
