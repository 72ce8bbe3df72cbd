//! Application configuration.
//!
//! Every field has a default matching the stock demo, so a missing file or a
//! partial file both yield a usable configuration.
//!
//! ```json
//! {
//!   "timings": { "liveness_tick_ms": 20, "redirect_delay_ms": 500 },
//!   "admin": { "username": "admin", "password": "admin123" }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::AdminCredentials;
use crate::error::GuardianResult;

/// Pacing of the simulated verification steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationTimings {
    pub liveness_tick_ms: u64,
    pub liveness_increment: u8,
    /// Delay between reaching `complete` and the dashboard redirect
    pub redirect_delay_ms: u64,
    pub capture_tick_ms: u64,
    pub capture_increment: u8,
    /// Pause between the analysis bar finishing and the success state
    pub capture_settle_ms: u64,
    pub capture_redirect_ms: u64,
    /// Simulated round trip for OTP dispatch, OTP check and admin login
    pub network_delay_ms: u64,
    /// How long a toast stays on screen
    pub toast_ttl_ms: u64,
}

impl SimulationTimings {
    pub fn liveness_tick(&self) -> Duration {
        Duration::from_millis(self.liveness_tick_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn capture_tick(&self) -> Duration {
        Duration::from_millis(self.capture_tick_ms)
    }

    pub fn capture_settle(&self) -> Duration {
        Duration::from_millis(self.capture_settle_ms)
    }

    pub fn capture_redirect(&self) -> Duration {
        Duration::from_millis(self.capture_redirect_ms)
    }

    pub fn network_delay(&self) -> Duration {
        Duration::from_millis(self.network_delay_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }
}

impl Default for SimulationTimings {
    fn default() -> Self {
        Self {
            liveness_tick_ms: 50,
            liveness_increment: 2,
            redirect_delay_ms: 2000,
            capture_tick_ms: 100,
            capture_increment: 5,
            capture_settle_ms: 500,
            capture_redirect_ms: 1500,
            network_delay_ms: 1500,
            toast_ttl_ms: 5000,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardianConfig {
    pub timings: SimulationTimings,
    pub admin: AdminCredentials,
}

impl GuardianConfig {
    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> GuardianResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        tracing::debug!(?path, "loaded configuration");
        Ok(config)
    }

    /// Read `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> GuardianResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuardianError;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "timings": {{ "liveness_tick_ms": 10 }} }}"#).unwrap();

        let config = GuardianConfig::load(file.path()).unwrap();
        assert_eq!(config.timings.liveness_tick(), Duration::from_millis(10));
        assert_eq!(config.timings.liveness_increment, 2);
        assert_eq!(config.admin, AdminCredentials::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = GuardianConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, GuardianConfig::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            GuardianConfig::load(file.path()),
            Err(GuardianError::Config(_))
        ));
    }
}
