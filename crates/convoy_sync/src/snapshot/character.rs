//! Character (on-foot) sync packets.

use convoy_shared::Vec3;

use super::{note_leftover, read_aim, read_trailing_latency, write_aim, write_latency, AimData};
use crate::error::{SyncError, SyncResult};
use crate::protocol::{read_velocity, write_velocity, CharacterFlags, PacketReader, PacketWriter};

const FULL: &str = "character sync";
const LIGHT: &str = "character light sync";

/// Full character state, sent at the full sync rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharacterSnapshot {
    /// Network handle of the character. `None` goes out as zero.
    pub net_handle: Option<i32>,
    /// State flags; decide which optional groups follow.
    pub flags: CharacterFlags,
    /// World position.
    pub position: Vec3,
    /// Euler rotation: x = pitch, y = roll, z = yaw.
    ///
    /// Pitch and roll are only on the wire while ragdolling and decode as
    /// `0.0` otherwise.
    pub rotation: Vec3,
    /// Linear velocity (quantized, see `compress_velocity`).
    pub velocity: Vec3,
    /// Health.
    pub health: u8,
    /// Armor.
    pub armor: u8,
    /// Movement speed class.
    pub speed: u8,
    /// Weapon and aim point. Required while aiming or shooting.
    pub aim: Option<AimData>,
}

/// Reduced character state: identity and loadout only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharacterLightSnapshot {
    /// Network handle of the character.
    pub net_handle: Option<i32>,
    /// Model hash.
    pub model: u32,
    /// Weapon hash.
    pub weapon: u32,
    /// Round-trip latency in seconds. Trailing field.
    pub latency: Option<f32>,
}

/// Encodes a full character sync packet.
///
/// # Errors
///
/// [`SyncError::MissingField`] if the flags say aiming or shooting but
/// `aim` is `None`.
pub fn encode_character_sync(snapshot: &CharacterSnapshot) -> SyncResult<Vec<u8>> {
    let mut w = PacketWriter::new();
    write_character_sync(&mut w, snapshot)?;
    Ok(w.into_bytes())
}

pub(crate) fn write_character_sync(
    w: &mut PacketWriter,
    s: &CharacterSnapshot,
) -> SyncResult<()> {
    // Resolve before writing anything so a refusal never leaves half a packet.
    let aim = if s.flags.carries_aim() {
        Some(s.aim.ok_or(SyncError::MissingField { packet: FULL, field: "aim" })?)
    } else {
        None
    };

    w.write_handle(s.net_handle);
    w.write_u16(s.flags.bits());
    w.write_vec3(s.position);

    if s.flags.carries_pitch_roll() {
        w.write_f32(s.rotation.x);
        w.write_f32(s.rotation.y);
    }
    w.write_f32(s.rotation.z);

    write_velocity(w, s.velocity);

    w.write_u8(s.health);
    w.write_u8(s.armor);
    w.write_u8(s.speed);

    if let Some(aim) = aim {
        write_aim(w, &aim);
    }
    Ok(())
}

/// Decodes a full character sync packet.
///
/// # Errors
///
/// [`SyncError::Underflow`] if the buffer ends before the layout implied
/// by its own flags does.
pub fn decode_character_sync(bytes: &[u8]) -> SyncResult<CharacterSnapshot> {
    let mut r = PacketReader::new(bytes);
    let snapshot = read_character_sync(&mut r)?;
    note_leftover(&r, FULL);
    Ok(snapshot)
}

pub(crate) fn read_character_sync(r: &mut PacketReader<'_>) -> SyncResult<CharacterSnapshot> {
    let net_handle = r.read_handle()?;
    let flags = CharacterFlags::from_bits(r.read_u16()?);
    let position = r.read_vec3()?;

    let mut rotation = Vec3::ZERO;
    if flags.carries_pitch_roll() {
        rotation.x = r.read_f32()?;
        rotation.y = r.read_f32()?;
    }
    rotation.z = r.read_f32()?;

    let velocity = read_velocity(r)?;
    let health = r.read_u8()?;
    let armor = r.read_u8()?;
    let speed = r.read_u8()?;

    let aim = if flags.carries_aim() { Some(read_aim(r)?) } else { None };

    Ok(CharacterSnapshot {
        net_handle,
        flags,
        position,
        rotation,
        velocity,
        health,
        armor,
        speed,
        aim,
    })
}

/// Encodes a light character sync packet.
#[must_use]
pub fn encode_character_light_sync(snapshot: &CharacterLightSnapshot) -> Vec<u8> {
    let mut w = PacketWriter::new();
    write_character_light_sync(&mut w, snapshot);
    w.into_bytes()
}

pub(crate) fn write_character_light_sync(w: &mut PacketWriter, s: &CharacterLightSnapshot) {
    w.write_handle(s.net_handle);
    w.write_u32(s.model);
    w.write_u32(s.weapon);
    write_latency(w, s.latency);
}

/// Decodes a light character sync packet. A missing latency is not an error.
///
/// # Errors
///
/// [`SyncError::Underflow`] if any of the 12 mandatory bytes are missing.
pub fn decode_character_light_sync(bytes: &[u8]) -> SyncResult<CharacterLightSnapshot> {
    let mut r = PacketReader::new(bytes);
    let snapshot = read_character_light_sync(&mut r)?;
    note_leftover(&r, LIGHT);
    Ok(snapshot)
}

pub(crate) fn read_character_light_sync(
    r: &mut PacketReader<'_>,
) -> SyncResult<CharacterLightSnapshot> {
    Ok(CharacterLightSnapshot {
        net_handle: r.read_handle()?,
        model: r.read_u32()?,
        weapon: r.read_u32()?,
        latency: read_trailing_latency(r, LIGHT)?,
    })
}
