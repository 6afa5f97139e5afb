//! # Codec Configuration
//!
//! Loaded once at startup from TOML. Nothing here changes the wire layout;
//! it only tunes size limits and diagnostics.
//!
//! ```toml
//! max_datagram_size = 1200
//! warn_on_velocity_alias = true
//! log_dropped_packets = true
//! ```

use std::path::Path;

use convoy_shared::MAX_PACKET_SIZE;
use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

/// Sync codec settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Largest datagram accepted by [`SyncCodec::decode`](crate::SyncCodec::decode).
    pub max_datagram_size: usize,
    /// Log when a velocity component is outside the quantization window.
    pub warn_on_velocity_alias: bool,
    /// Log packets discarded by
    /// [`SyncCodec::decode_or_drop`](crate::SyncCodec::decode_or_drop).
    pub log_dropped_packets: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_datagram_size: MAX_PACKET_SIZE,
            warn_on_velocity_alias: true,
            log_dropped_packets: true,
        }
    }
}

impl SyncConfig {
    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// [`SyncError::InvalidConfig`] on malformed TOML, wrong types, or a
    /// zero `max_datagram_size`.
    pub fn from_toml_str(source: &str) -> SyncResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| SyncError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// [`SyncError::InvalidConfig`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> SyncResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| SyncError::InvalidConfig(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded sync config");
        Ok(config)
    }

    fn validate(&self) -> SyncResult<()> {
        if self.max_datagram_size == 0 {
            return Err(SyncError::InvalidConfig(
                "max_datagram_size must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}
