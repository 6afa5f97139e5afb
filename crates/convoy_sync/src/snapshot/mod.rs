//! # Sync Snapshots
//!
//! One struct per packet kind, plus the encoder/decoder pair for each.
//!
//! ## Layouts
//!
//! ```text
//! Character sync   handle(4) flags(2) pos(12) [pitch roll(8)] yaw(4)
//!                  vel(6) health(1) armor(1) speed(1) [weapon(4) aim(12)]
//! Character light  handle(4) model(4) weapon(4) [latency(2)]
//! Vehicle sync     handle(4) health(1) armor(1) flags(1) [weapon(4) aim(12)]
//!                  [pos(12) rot(12) vel(6) veh_health(2) rpm(1) steer(1)]
//! Vehicle light    handle(4) model(4) vehicle(4) seat(1) weapon(4)
//!                  trailer?(1) [trailer(12)] [latency(2)]
//! Basic sync       handle(4) pos(12)
//! ```
//!
//! Square brackets are optional groups. Latency is a trailing field: it may
//! be missing even when the sender had one, and decoders leave it `None`.
//!
//! Every encoder is a pure function of its snapshot and every decoder a pure
//! function of its buffer; none of them keep state between calls.

mod basic;
mod character;
mod vehicle;

pub use basic::{decode_basic_sync, encode_basic_sync, BasicSnapshot};
pub use character::{
    decode_character_light_sync, decode_character_sync, encode_character_light_sync,
    encode_character_sync, CharacterLightSnapshot, CharacterSnapshot,
};
pub use vehicle::{
    decode_vehicle_light_sync, decode_vehicle_sync, encode_vehicle_light_sync,
    encode_vehicle_sync, VehicleDynamics, VehicleLightSnapshot, VehicleSnapshot,
};

pub(crate) use basic::{read_basic_sync, write_basic_sync};
pub(crate) use character::{
    read_character_light_sync, read_character_sync, write_character_light_sync,
    write_character_sync,
};
pub(crate) use vehicle::{
    read_vehicle_light_sync, read_vehicle_sync, write_vehicle_light_sync, write_vehicle_sync,
};

use convoy_shared::Vec3;

use crate::protocol::{latency_from_wire, latency_to_wire, PacketReader, PacketWriter};

/// Weapon and aim point, sent while aiming or shooting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AimData {
    /// Weapon hash.
    pub weapon: u32,
    /// World-space point being aimed at.
    pub target: Vec3,
}

pub(crate) fn write_aim(w: &mut PacketWriter, aim: &AimData) {
    w.write_u32(aim.weapon);
    w.write_vec3(aim.target);
}

pub(crate) fn read_aim(r: &mut PacketReader<'_>) -> crate::SyncResult<AimData> {
    Ok(AimData {
        weapon: r.read_u32()?,
        target: r.read_vec3()?,
    })
}

pub(crate) fn write_latency(w: &mut PacketWriter, latency: Option<f32>) {
    if let Some(seconds) = latency {
        w.write_i16(latency_to_wire(seconds));
    }
}

/// Reads the trailing latency field if the sender included it.
pub(crate) fn read_trailing_latency(
    r: &mut PacketReader<'_>,
    packet: &'static str,
) -> crate::SyncResult<Option<f32>> {
    if !r.can_read(2) {
        tracing::trace!(packet, "no trailing latency");
        return Ok(None);
    }
    r.read_i16().map(|ms| Some(latency_from_wire(ms)))
}

/// Notes bytes a decoder did not consume. Newer peers may append fields.
pub(crate) fn note_leftover(r: &PacketReader<'_>, packet: &'static str) {
    if r.remaining() > 0 {
        tracing::trace!(packet, leftover = r.remaining(), "ignoring trailing bytes");
    }
}
