//! # Sync Error Types
//!
//! All errors that can occur while encoding or decoding sync packets.

use thiserror::Error;

/// Errors that can occur in the sync codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// A mandatory read ran past the end of the buffer.
    ///
    /// The packet must be dropped; nothing decoded before this point is
    /// returned.
    #[error("buffer underflow at offset {offset}: need {needed} bytes, {remaining} remaining")]
    Underflow {
        /// Cursor position when the read was attempted.
        offset: usize,
        /// Width of the attempted read.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// The flags demand a field group the snapshot does not carry.
    #[error("{packet}: flags require `{field}` but the snapshot has none")]
    MissingField {
        /// Packet kind being encoded.
        packet: &'static str,
        /// Name of the missing group.
        field: &'static str,
    },

    /// Envelope tag does not name a known packet kind.
    #[error("unknown packet kind: {0}")]
    UnknownPacketKind(u8),

    /// Envelope decode was handed zero bytes.
    #[error("empty datagram")]
    EmptyDatagram,

    /// Datagram is larger than the configured maximum.
    #[error("datagram too large: {len} bytes, max {max}")]
    Oversized {
        /// Received length.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for sync codec operations.
pub type SyncResult<T> = Result<T, SyncError>;
