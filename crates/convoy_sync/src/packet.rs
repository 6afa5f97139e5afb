//! # Packet Envelope
//!
//! A one-byte kind tag in front of the payload so the receiver knows which
//! decoder to run.
//!
//! ```text
//! ┌──────────┬─────────────────────────────────────────────┐
//! │ kind (1) │ payload (layout of that kind, unchanged)     │
//! └──────────┴─────────────────────────────────────────────┘
//! ```

use crate::error::{SyncError, SyncResult};
use crate::protocol::{PacketReader, PacketWriter, MAX_SYNC_PAYLOAD};
use crate::snapshot::{
    read_basic_sync, read_character_light_sync, read_character_sync, read_vehicle_light_sync,
    read_vehicle_sync, write_basic_sync, write_character_light_sync, write_character_sync,
    write_vehicle_light_sync, write_vehicle_sync, BasicSnapshot, CharacterLightSnapshot,
    CharacterSnapshot, VehicleLightSnapshot, VehicleSnapshot,
};

/// Types of sync packets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PacketKind {
    /// Full on-foot character state.
    CharacterSync = 1,
    /// Character identity and loadout.
    CharacterLightSync = 2,
    /// Full in-vehicle state.
    VehicleSync = 3,
    /// Seat, vehicle and trailer.
    VehicleLightSync = 4,
    /// Handle and position only.
    BasicSync = 5,
}

impl PacketKind {
    /// Parses a wire tag.
    ///
    /// # Errors
    ///
    /// [`SyncError::UnknownPacketKind`] for any unassigned tag.
    pub fn from_u8(tag: u8) -> SyncResult<Self> {
        match tag {
            1 => Ok(Self::CharacterSync),
            2 => Ok(Self::CharacterLightSync),
            3 => Ok(Self::VehicleSync),
            4 => Ok(Self::VehicleLightSync),
            5 => Ok(Self::BasicSync),
            other => Err(SyncError::UnknownPacketKind(other)),
        }
    }

    /// Human-readable name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CharacterSync => "character sync",
            Self::CharacterLightSync => "character light sync",
            Self::VehicleSync => "vehicle sync",
            Self::VehicleLightSync => "vehicle light sync",
            Self::BasicSync => "basic sync",
        }
    }
}

/// Any sync packet, tagged with its kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncPacket {
    /// Full character sync.
    Character(CharacterSnapshot),
    /// Light character sync.
    CharacterLight(CharacterLightSnapshot),
    /// Full vehicle sync.
    Vehicle(VehicleSnapshot),
    /// Light vehicle sync.
    VehicleLight(VehicleLightSnapshot),
    /// Basic position sync.
    Basic(BasicSnapshot),
}

impl SyncPacket {
    /// Returns the kind tag for this packet.
    #[must_use]
    pub const fn kind(&self) -> PacketKind {
        match self {
            Self::Character(_) => PacketKind::CharacterSync,
            Self::CharacterLight(_) => PacketKind::CharacterLightSync,
            Self::Vehicle(_) => PacketKind::VehicleSync,
            Self::VehicleLight(_) => PacketKind::VehicleLightSync,
            Self::Basic(_) => PacketKind::BasicSync,
        }
    }

    /// Encodes the tag followed by the payload.
    ///
    /// # Errors
    ///
    /// [`SyncError::MissingField`] from the full sync encoders.
    pub fn encode(&self) -> SyncResult<Vec<u8>> {
        let mut w = PacketWriter::with_capacity(MAX_SYNC_PAYLOAD + 1);
        w.write_u8(self.kind() as u8);

        match self {
            Self::Character(s) => write_character_sync(&mut w, s)?,
            Self::CharacterLight(s) => write_character_light_sync(&mut w, s),
            Self::Vehicle(s) => write_vehicle_sync(&mut w, s)?,
            Self::VehicleLight(s) => write_vehicle_light_sync(&mut w, s),
            Self::Basic(s) => write_basic_sync(&mut w, s),
        }

        Ok(w.into_bytes())
    }

    /// Decodes a tagged datagram.
    ///
    /// # Errors
    ///
    /// [`SyncError::EmptyDatagram`], [`SyncError::UnknownPacketKind`] or the
    /// payload decoder's [`SyncError::Underflow`].
    pub fn decode(bytes: &[u8]) -> SyncResult<Self> {
        let mut r = PacketReader::new(bytes);
        let tag = r.read_u8().map_err(|_| SyncError::EmptyDatagram)?;
        let kind = PacketKind::from_u8(tag)?;

        let packet = match kind {
            PacketKind::CharacterSync => Self::Character(read_character_sync(&mut r)?),
            PacketKind::CharacterLightSync => {
                Self::CharacterLight(read_character_light_sync(&mut r)?)
            }
            PacketKind::VehicleSync => Self::Vehicle(read_vehicle_sync(&mut r)?),
            PacketKind::VehicleLightSync => Self::VehicleLight(read_vehicle_light_sync(&mut r)?),
            PacketKind::BasicSync => Self::Basic(read_basic_sync(&mut r)?),
        };

        if r.remaining() > 0 {
            tracing::trace!(kind = kind.name(), leftover = r.remaining(), "ignoring trailing bytes");
        }
        Ok(packet)
    }
}

impl From<CharacterSnapshot> for SyncPacket {
    fn from(s: CharacterSnapshot) -> Self {
        Self::Character(s)
    }
}

impl From<CharacterLightSnapshot> for SyncPacket {
    fn from(s: CharacterLightSnapshot) -> Self {
        Self::CharacterLight(s)
    }
}

impl From<VehicleSnapshot> for SyncPacket {
    fn from(s: VehicleSnapshot) -> Self {
        Self::Vehicle(s)
    }
}

impl From<VehicleLightSnapshot> for SyncPacket {
    fn from(s: VehicleLightSnapshot) -> Self {
        Self::VehicleLight(s)
    }
}

impl From<BasicSnapshot> for SyncPacket {
    fn from(s: BasicSnapshot) -> Self {
        Self::Basic(s)
    }
}
