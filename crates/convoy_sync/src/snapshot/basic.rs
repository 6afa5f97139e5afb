//! Basic position sync: handle and position, nothing else.

use convoy_shared::Vec3;

use super::note_leftover;
use crate::error::SyncResult;
use crate::protocol::{PacketReader, PacketWriter};

/// Minimal position update for entities with no other changed state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BasicSnapshot {
    /// Network handle. Written as-is; zero is not special here.
    pub net_handle: i32,
    /// World position.
    pub position: Vec3,
}

impl BasicSnapshot {
    /// Encoded size in bytes.
    pub const SIZE: usize = 16;

    /// Creates a new basic snapshot.
    #[must_use]
    pub const fn new(net_handle: i32, position: Vec3) -> Self {
        Self { net_handle, position }
    }
}

/// Encodes a basic sync packet. Always [`BasicSnapshot::SIZE`] bytes.
#[must_use]
pub fn encode_basic_sync(snapshot: &BasicSnapshot) -> Vec<u8> {
    let mut w = PacketWriter::with_capacity(BasicSnapshot::SIZE + 1);
    write_basic_sync(&mut w, snapshot);
    w.into_bytes()
}

pub(crate) fn write_basic_sync(w: &mut PacketWriter, s: &BasicSnapshot) {
    w.write_i32(s.net_handle);
    w.write_vec3(s.position);
}

/// Decodes a basic sync packet.
///
/// # Errors
///
/// [`SyncError::Underflow`](crate::SyncError::Underflow) on fewer than 16
/// bytes.
pub fn decode_basic_sync(bytes: &[u8]) -> SyncResult<BasicSnapshot> {
    let mut r = PacketReader::new(bytes);
    let snapshot = read_basic_sync(&mut r)?;
    note_leftover(&r, "basic sync");
    Ok(snapshot)
}

pub(crate) fn read_basic_sync(r: &mut PacketReader<'_>) -> SyncResult<BasicSnapshot> {
    Ok(BasicSnapshot {
        net_handle: r.read_i32()?,
        position: r.read_vec3()?,
    })
}
