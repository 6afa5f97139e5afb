//! # Sync Codec
//!
//! Front end the transport talks to. Wraps [`SyncPacket`] with the size
//! limit and diagnostics from [`SyncConfig`].
//!
//! The codec holds configuration only. It is `Send + Sync` and can be shared
//! by every receive thread without locking.

use convoy_shared::Vec3;

use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};
use crate::packet::SyncPacket;
use crate::protocol::in_velocity_window;

/// Configured encoder/decoder for tagged sync datagrams.
#[derive(Clone, Debug, Default)]
pub struct SyncCodec {
    config: SyncConfig,
}

impl SyncCodec {
    /// Creates a codec with the given configuration.
    #[must_use]
    pub const fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Encodes a packet with its kind tag.
    ///
    /// Oversized output is logged but still returned; splitting is the
    /// transport's decision.
    ///
    /// # Errors
    ///
    /// [`SyncError::MissingField`] if the snapshot's flags demand data it
    /// does not carry.
    pub fn encode(&self, packet: &SyncPacket) -> SyncResult<Vec<u8>> {
        if self.config.warn_on_velocity_alias {
            if let Some(velocity) = quantized_velocity(packet) {
                warn_if_aliased(packet, velocity);
            }
        }

        let bytes = packet.encode()?;
        tracing::debug!(kind = packet.kind().name(), len = bytes.len(), "encoded sync packet");

        if bytes.len() > self.config.max_datagram_size {
            tracing::warn!(
                kind = packet.kind().name(),
                len = bytes.len(),
                max = self.config.max_datagram_size,
                "encoded sync packet exceeds datagram limit"
            );
        }
        Ok(bytes)
    }

    /// Decodes a tagged datagram.
    ///
    /// # Errors
    ///
    /// [`SyncError::Oversized`] above the configured limit, otherwise any
    /// error from [`SyncPacket::decode`].
    pub fn decode(&self, bytes: &[u8]) -> SyncResult<SyncPacket> {
        if bytes.len() > self.config.max_datagram_size {
            return Err(SyncError::Oversized {
                len: bytes.len(),
                max: self.config.max_datagram_size,
            });
        }

        let packet = SyncPacket::decode(bytes)?;
        tracing::debug!(kind = packet.kind().name(), len = bytes.len(), "decoded sync packet");
        Ok(packet)
    }

    /// Decodes a datagram, discarding it on any error.
    ///
    /// A packet that fails to decode must never be partially applied; the
    /// caller simply skips this tick's update for the entity.
    #[must_use]
    pub fn decode_or_drop(&self, bytes: &[u8]) -> Option<SyncPacket> {
        match self.decode(bytes) {
            Ok(packet) => Some(packet),
            Err(error) => {
                if self.config.log_dropped_packets {
                    tracing::warn!(%error, len = bytes.len(), "dropping sync packet");
                }
                None
            }
        }
    }
}

/// The velocity that will go through 8.8 quantization, if any.
fn quantized_velocity(packet: &SyncPacket) -> Option<Vec3> {
    match packet {
        SyncPacket::Character(s) => Some(s.velocity),
        SyncPacket::Vehicle(s) if s.flags.carries_dynamics() => s.dynamics.map(|d| d.velocity),
        _ => None,
    }
}

fn warn_if_aliased(packet: &SyncPacket, velocity: Vec3) {
    let aliased = [velocity.x, velocity.y, velocity.z]
        .into_iter()
        .any(|v| !in_velocity_window(v));
    if aliased {
        tracing::warn!(
            kind = packet.kind().name(),
            x = velocity.x,
            y = velocity.y,
            z = velocity.z,
            "velocity outside quantization window, receiver will see an aliased value"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{BasicSnapshot, CharacterSnapshot};

    fn codec_with_limit(max: usize) -> SyncCodec {
        SyncCodec::new(SyncConfig { max_datagram_size: max, ..SyncConfig::default() })
    }

    #[test]
    fn test_roundtrip_through_codec() {
        let codec = SyncCodec::default();
        let packet = SyncPacket::Basic(BasicSnapshot::new(5, Vec3::new(9.0, 8.0, 7.0)));
        let bytes = codec.encode(&packet).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), packet);
    }

    #[test]
    fn test_oversized_rejected() {
        let codec = codec_with_limit(16);
        let bytes = codec
            .encode(&SyncPacket::Basic(BasicSnapshot::default()))
            .unwrap();
        assert_eq!(bytes.len(), 17);
        assert_eq!(codec.decode(&bytes), Err(SyncError::Oversized { len: 17, max: 16 }));
    }

    #[test]
    fn test_decode_or_drop() {
        let codec = SyncCodec::default();
        assert!(codec.decode_or_drop(&[]).is_none());
        assert!(codec.decode_or_drop(&[1, 0, 0]).is_none());

        let bytes = codec.encode(&SyncPacket::Basic(BasicSnapshot::default())).unwrap();
        assert!(codec.decode_or_drop(&bytes).is_some());
    }

    #[test]
    fn test_aliased_velocity_still_encodes() {
        let codec = SyncCodec::default();
        let packet = SyncPacket::Character(CharacterSnapshot {
            velocity: Vec3::new(-3.0, 300.0, 0.0),
            ..CharacterSnapshot::default()
        });
        let bytes = codec.encode(&packet).unwrap();
        let SyncPacket::Character(back) = codec.decode(&bytes).unwrap() else {
            panic!("expected character sync");
        };
        // Wrapped, not clamped.
        assert_eq!(back.velocity.x, 253.0);
        assert_eq!(back.velocity.y, 44.0);
    }

    #[test]
    fn test_codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncCodec>();
    }
}
