//! # Packet Reader
//!
//! Bounds-checked little-endian cursor over a received datagram.
//!
//! Every fixed-width read either advances the cursor by exactly its width or
//! fails with [`SyncError::Underflow`] and leaves the cursor untouched.
//! Fields the layout marks as trailing must be probed with
//! [`PacketReader::can_read`] first.

use convoy_shared::Vec3;

use crate::error::{SyncError, SyncResult};

/// Packet reader - walks a borrowed buffer from the front.
pub struct PacketReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> PacketReader<'a> {
    /// Creates a new reader positioned at the first byte.
    #[must_use]
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, position: 0 }
    }

    /// Returns the cursor position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes remaining.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Returns true if at least `n` unread bytes remain. Never advances.
    #[inline]
    #[must_use]
    pub const fn can_read(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> SyncResult<[u8; N]> {
        if !self.can_read(N) {
            return Err(SyncError::Underflow {
                offset: self.position,
                needed: N,
                remaining: self.remaining(),
            });
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buffer[self.position..self.position + N]);
        self.position += N;
        Ok(bytes)
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> SyncResult<u8> {
        self.take::<1>().map(u8::from_le_bytes)
    }

    /// Reads a signed byte.
    #[inline]
    pub fn read_i8(&mut self) -> SyncResult<i8> {
        self.take::<1>().map(i8::from_le_bytes)
    }

    /// Reads a one-byte boolean; any non-zero value is `true`.
    #[inline]
    pub fn read_bool(&mut self) -> SyncResult<bool> {
        self.read_u8().map(|b| b != 0)
    }

    /// Reads a u16 in little-endian format.
    #[inline]
    pub fn read_u16(&mut self) -> SyncResult<u16> {
        self.take::<2>().map(u16::from_le_bytes)
    }

    /// Reads an i16 in little-endian format.
    #[inline]
    pub fn read_i16(&mut self) -> SyncResult<i16> {
        self.take::<2>().map(i16::from_le_bytes)
    }

    /// Reads a u32 in little-endian format.
    #[inline]
    pub fn read_u32(&mut self) -> SyncResult<u32> {
        self.take::<4>().map(u32::from_le_bytes)
    }

    /// Reads an i32 in little-endian format.
    #[inline]
    pub fn read_i32(&mut self) -> SyncResult<i32> {
        self.take::<4>().map(i32::from_le_bytes)
    }

    /// Reads an f32 in little-endian format.
    #[inline]
    pub fn read_f32(&mut self) -> SyncResult<f32> {
        self.take::<4>().map(f32::from_le_bytes)
    }

    /// Reads three consecutive f32 values.
    pub fn read_vec3(&mut self) -> SyncResult<Vec3> {
        Ok(Vec3::new(self.read_f32()?, self.read_f32()?, self.read_f32()?))
    }

    /// Reads a network handle. The zero sentinel decodes as `None`.
    pub fn read_handle(&mut self) -> SyncResult<Option<i32>> {
        self.read_i32()
            .map(|h| (h != convoy_shared::NULL_HANDLE).then_some(h))
    }
}
