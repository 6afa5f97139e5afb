//! # Convoy Shared
//!
//! Common types used by both client and server.
//!
//! ## CRITICAL RULE
//!
//! Everything here is plain data. The byte layout of sync packets lives in
//! `convoy_sync`; this crate only defines the values that travel inside them.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use constants::{MAX_PACKET_SIZE, NULL_HANDLE};
pub use math::Vec3;
