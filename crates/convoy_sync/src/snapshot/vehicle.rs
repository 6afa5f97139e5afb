//! Vehicle occupant sync packets.

use convoy_shared::Vec3;

use super::{note_leftover, read_aim, read_trailing_latency, write_aim, write_latency, AimData};
use crate::error::{SyncError, SyncResult};
use crate::protocol::{
    compress_rpm, compress_steering, decompress_rpm, decompress_steering, read_velocity,
    write_velocity, PacketReader, PacketWriter, VehicleFlags,
};

const FULL: &str = "vehicle sync";
const LIGHT: &str = "vehicle light sync";

/// Vehicle physics state. Only the driver sends it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VehicleDynamics {
    /// Vehicle world position.
    pub position: Vec3,
    /// Vehicle euler rotation (all three axes).
    pub rotation: Vec3,
    /// Linear velocity (quantized).
    pub velocity: Vec3,
    /// Body health. Sent as a 16-bit integer; the fraction is dropped.
    pub health: f32,
    /// Engine RPM normalized to `[0, 1]`.
    pub rpm: f32,
    /// Steering angle in degrees, clamped to `[-45, 45]` on the wire.
    pub steering: f32,
}

/// Full in-vehicle state for one occupant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VehicleSnapshot {
    /// Network handle of the occupant.
    pub net_handle: Option<i32>,
    /// Occupant health.
    pub health: u8,
    /// Occupant armor.
    pub armor: u8,
    /// Occupant flags; decide which optional groups follow.
    pub flags: VehicleFlags,
    /// Weapon and aim point. Required while aiming, on a mounted weapon or
    /// shooting.
    pub aim: Option<AimData>,
    /// Vehicle physics. Required for the driver.
    pub dynamics: Option<VehicleDynamics>,
}

/// Reduced in-vehicle state: who sits where, plus an attached trailer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VehicleLightSnapshot {
    /// Network handle of the occupant.
    pub net_handle: Option<i32>,
    /// Occupant model hash.
    pub model: u32,
    /// Network handle of the vehicle.
    pub vehicle_handle: i32,
    /// Seat index (`-1` is the driver seat).
    pub seat: i8,
    /// Weapon hash.
    pub weapon: u32,
    /// Trailer position, if one is attached.
    pub trailer: Option<Vec3>,
    /// Round-trip latency in seconds. Trailing field.
    pub latency: Option<f32>,
}

/// Encodes a full vehicle sync packet.
///
/// # Errors
///
/// [`SyncError::MissingField`] if the flags require `aim` or `dynamics`
/// and the snapshot lacks it.
pub fn encode_vehicle_sync(snapshot: &VehicleSnapshot) -> SyncResult<Vec<u8>> {
    let mut w = PacketWriter::new();
    write_vehicle_sync(&mut w, snapshot)?;
    Ok(w.into_bytes())
}

pub(crate) fn write_vehicle_sync(w: &mut PacketWriter, s: &VehicleSnapshot) -> SyncResult<()> {
    let aim = if s.flags.carries_aim() {
        Some(s.aim.ok_or(SyncError::MissingField { packet: FULL, field: "aim" })?)
    } else {
        None
    };
    let dynamics = if s.flags.carries_dynamics() {
        Some(s.dynamics.ok_or(SyncError::MissingField { packet: FULL, field: "dynamics" })?)
    } else {
        None
    };

    w.write_handle(s.net_handle);
    w.write_u8(s.health);
    w.write_u8(s.armor);
    w.write_u8(s.flags.bits());

    if let Some(aim) = aim {
        write_aim(w, &aim);
    }

    if let Some(d) = dynamics {
        w.write_vec3(d.position);
        w.write_vec3(d.rotation);
        write_velocity(w, d.velocity);
        w.write_i16(health_to_wire(d.health));
        w.write_u8(compress_rpm(d.rpm));
        w.write_u8(compress_steering(d.steering));
    }
    Ok(())
}

/// Truncates to an integer, then keeps the low 16 bits.
#[allow(clippy::cast_possible_truncation)]
fn health_to_wire(health: f32) -> i16 {
    health as i32 as i16
}

/// Decodes a full vehicle sync packet.
///
/// # Errors
///
/// [`SyncError::Underflow`] if the buffer ends before the layout implied
/// by its own flags does.
pub fn decode_vehicle_sync(bytes: &[u8]) -> SyncResult<VehicleSnapshot> {
    let mut r = PacketReader::new(bytes);
    let snapshot = read_vehicle_sync(&mut r)?;
    note_leftover(&r, FULL);
    Ok(snapshot)
}

pub(crate) fn read_vehicle_sync(r: &mut PacketReader<'_>) -> SyncResult<VehicleSnapshot> {
    let net_handle = r.read_handle()?;
    let health = r.read_u8()?;
    let armor = r.read_u8()?;
    let flags = VehicleFlags::from_bits(r.read_u8()?);

    let aim = if flags.carries_aim() { Some(read_aim(r)?) } else { None };

    let dynamics = if flags.carries_dynamics() {
        Some(VehicleDynamics {
            position: r.read_vec3()?,
            rotation: r.read_vec3()?,
            velocity: read_velocity(r)?,
            health: f32::from(r.read_i16()?),
            rpm: decompress_rpm(r.read_u8()?),
            steering: decompress_steering(r.read_u8()?),
        })
    } else {
        None
    };

    Ok(VehicleSnapshot { net_handle, health, armor, flags, aim, dynamics })
}

/// Encodes a light vehicle sync packet.
#[must_use]
pub fn encode_vehicle_light_sync(snapshot: &VehicleLightSnapshot) -> Vec<u8> {
    let mut w = PacketWriter::new();
    write_vehicle_light_sync(&mut w, snapshot);
    w.into_bytes()
}

pub(crate) fn write_vehicle_light_sync(w: &mut PacketWriter, s: &VehicleLightSnapshot) {
    w.write_handle(s.net_handle);
    w.write_u32(s.model);
    w.write_i32(s.vehicle_handle);
    w.write_i8(s.seat);
    w.write_u32(s.weapon);

    // Explicit marker: the trailer has no flag bit.
    w.write_bool(s.trailer.is_some());
    if let Some(trailer) = s.trailer {
        w.write_vec3(trailer);
    }

    write_latency(w, s.latency);
}

/// Decodes a light vehicle sync packet. A missing latency is not an error.
///
/// # Errors
///
/// [`SyncError::Underflow`] if a mandatory field or a marked trailer is cut
/// short.
pub fn decode_vehicle_light_sync(bytes: &[u8]) -> SyncResult<VehicleLightSnapshot> {
    let mut r = PacketReader::new(bytes);
    let snapshot = read_vehicle_light_sync(&mut r)?;
    note_leftover(&r, LIGHT);
    Ok(snapshot)
}

pub(crate) fn read_vehicle_light_sync(
    r: &mut PacketReader<'_>,
) -> SyncResult<VehicleLightSnapshot> {
    let net_handle = r.read_handle()?;
    let model = r.read_u32()?;
    let vehicle_handle = r.read_i32()?;
    let seat = r.read_i8()?;
    let weapon = r.read_u32()?;
    let trailer = if r.read_bool()? { Some(r.read_vec3()?) } else { None };
    let latency = read_trailing_latency(r, LIGHT)?;

    Ok(VehicleLightSnapshot {
        net_handle,
        model,
        vehicle_handle,
        seat,
        weapon,
        trailer,
        latency,
    })
}
