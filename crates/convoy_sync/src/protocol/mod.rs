//! # Wire Primitives
//!
//! The leaf layer every sync layout is built from.
//!
//! ## Conventions
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ little-endian throughout                                     │
//! │ f32 = 4 bytes IEEE-754, handles/hashes = 4 bytes             │
//! │ velocity = 3 × u16 fixed point (8.8)                         │
//! │ optional groups = gated by flags or a one-byte marker        │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod flags;
mod quantize;
mod reader;
mod writer;

pub use flags::{CharacterFlags, VehicleFlags};
pub use quantize::{
    compress_rpm, compress_steering, compress_velocity, decompress_rpm, decompress_steering,
    decompress_velocity, in_velocity_window, latency_from_wire, latency_to_wire, STEERING_LIMIT,
    STEERING_RANGE, VELOCITY_SCALE, VELOCITY_WINDOW,
};
pub use reader::PacketReader;
pub use writer::{PacketWriter, MAX_SYNC_PAYLOAD};

use convoy_shared::Vec3;

/// Writes a velocity as three quantized components.
pub(crate) fn write_velocity(w: &mut PacketWriter, velocity: Vec3) {
    w.write_u16(compress_velocity(velocity.x));
    w.write_u16(compress_velocity(velocity.y));
    w.write_u16(compress_velocity(velocity.z));
}

/// Reads three quantized velocity components.
pub(crate) fn read_velocity(r: &mut PacketReader<'_>) -> crate::SyncResult<Vec3> {
    Ok(Vec3::new(
        decompress_velocity(r.read_u16()?),
        decompress_velocity(r.read_u16()?),
        decompress_velocity(r.read_u16()?),
    ))
}
