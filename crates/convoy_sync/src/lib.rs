//! # Convoy Sync - Sync Packet Codec
//!
//! Compact binary snapshots of characters and vehicles, exchanged between
//! client and server at 10-60Hz over an unreliable transport.
//!
//! ## Architecture
//!
//! - **Protocol**: little-endian reader/writer, velocity quantization, flag
//!   vocabularies
//! - **Snapshots**: one struct and one encode/decode pair per packet kind
//! - **Envelope**: optional one-byte kind tag for multiplexed channels
//! - **Codec**: size limit and diagnostics on top of the envelope
//!
//! ## Layout Contract
//!
//! ```text
//! SENDER                                   RECEIVER
//!   |                                         |
//!   | flags.carries_aim()? -> write aim       |
//!   |---------------- bytes ----------------->|
//!   |                 read flags, flags.carries_aim()? -> read aim
//! ```
//!
//! Both sides gate optional groups on the *same* predicate in the *same*
//! order. The codec does not judge whether decoded values make sense; that
//! is the caller's job.
//!
//! ## Example
//!
//! ```rust
//! use convoy_shared::Vec3;
//! use convoy_sync::{decode_basic_sync, encode_basic_sync, BasicSnapshot};
//!
//! let bytes = encode_basic_sync(&BasicSnapshot::new(42, Vec3::new(1.0, 2.0, 3.0)));
//! assert_eq!(bytes.len(), 16);
//!
//! let back = decode_basic_sync(&bytes).unwrap();
//! assert_eq!(back.net_handle, 42);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod codec;
pub mod config;
pub mod error;
pub mod packet;
pub mod protocol;
pub mod snapshot;

// Re-exports for convenience
pub use codec::SyncCodec;
pub use config::SyncConfig;
pub use error::{SyncError, SyncResult};
pub use packet::{PacketKind, SyncPacket};
pub use protocol::{CharacterFlags, PacketReader, PacketWriter, VehicleFlags};
pub use snapshot::{
    decode_basic_sync, decode_character_light_sync, decode_character_sync,
    decode_vehicle_light_sync, decode_vehicle_sync, encode_basic_sync,
    encode_character_light_sync, encode_character_sync, encode_vehicle_light_sync,
    encode_vehicle_sync, AimData, BasicSnapshot, CharacterLightSnapshot, CharacterSnapshot,
    VehicleDynamics, VehicleLightSnapshot, VehicleSnapshot,
};
