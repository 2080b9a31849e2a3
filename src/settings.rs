//! Feedback settings
//!
//! Read-only boolean flags consulted only at collision time; they never
//! influence simulation logic. Persistence of these flags lives outside the
//! core, so the provider is a trait the host can back with whatever store
//! it has.

use serde::{Deserialize, Serialize};

/// Read-only view the loop consults when a run ends.
pub trait SettingsProvider: Send + Sync {
    fn haptics_enabled(&self) -> bool;
    fn sound_enabled(&self) -> bool;
}

/// Plain in-memory flags, the default provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub haptics_enabled: bool,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
            sound_enabled: true,
        }
    }
}

impl SettingsProvider for Settings {
    fn haptics_enabled(&self) -> bool {
        self.haptics_enabled
    }

    fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_feedback_on() {
        let settings = Settings::default();
        assert!(settings.haptics_enabled());
        assert!(settings.sound_enabled());
    }

    #[test]
    fn round_trips_through_json() {
        let settings = Settings {
            haptics_enabled: false,
            sound_enabled: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }
}
