//! # Network Constants
//!
//! Values baked into both peers.
//!
//! **CRITICAL:** Changing any of these requires rebuilding client and server
//! together.

// =============================================================================
// TRANSPORT LIMITS
// =============================================================================

/// Maximum datagram size (MTU-safe).
pub const MAX_PACKET_SIZE: usize = 1200;

/// Wire value of an absent network handle.
///
/// Handles are never flag-gated: an unknown handle is written as four zero
/// bytes, so zero can never name a live entity.
pub const NULL_HANDLE: i32 = 0;
