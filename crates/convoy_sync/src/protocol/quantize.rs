//! # Quantization
//!
//! Lossy float packing used by the sync layouts.
//!
//! ## Techniques
//!
//! 1. **Velocity**: 8.8 fixed point in a `u16` (1/256 resolution)
//! 2. **RPM**: `[0, 1]` mapped onto a byte
//! 3. **Steering**: `[-45°, 45°]` mapped onto a byte
//! 4. **Latency**: seconds sent as whole milliseconds in an `i16`
//!
//! Every packer truncates toward zero. The inverse arithmetic on the
//! receiving side assumes truncation, so do not switch these to
//! round-to-nearest without changing both peers.

/// Fixed-point scale for velocity components.
pub const VELOCITY_SCALE: f32 = 256.0;

/// Exclusive upper bound of velocities that compress without aliasing.
///
/// Anything below it scales to at most `65535.99` and truncates into range.
pub const VELOCITY_WINDOW: f32 = 65536.0 / VELOCITY_SCALE;

/// Steering clamp in degrees (symmetric around zero).
pub const STEERING_LIMIT: f32 = 45.0;

/// Full steering span in degrees.
pub const STEERING_RANGE: f32 = STEERING_LIMIT * 2.0;

/// Compresses a velocity component into 16-bit fixed point.
///
/// Values outside `[0, 256)` alias: the scaled value is truncated toward
/// zero and wrapped into 16 bits, so `256.0` becomes `0` and `-1.0` becomes
/// `65280`. This is a known limitation of the layout, not an error.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compress_velocity(value: f32) -> u16 {
    (value * VELOCITY_SCALE) as i32 as u16
}

/// Recovers a velocity component.
#[inline]
#[must_use]
pub fn decompress_velocity(value: u16) -> f32 {
    f32::from(value) / VELOCITY_SCALE
}

/// Returns true if `value` round-trips through velocity compression
/// without aliasing.
#[inline]
#[must_use]
pub fn in_velocity_window(value: f32) -> bool {
    (0.0..VELOCITY_WINDOW).contains(&value)
}

/// Packs a normalized engine RPM into a byte.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compress_rpm(rpm: f32) -> u8 {
    (rpm * f32::from(u8::MAX)) as u8
}

/// Recovers a normalized engine RPM.
#[inline]
#[must_use]
pub fn decompress_rpm(value: u8) -> f32 {
    f32::from(value) / f32::from(u8::MAX)
}

/// Packs a steering angle in degrees into a byte.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compress_steering(degrees: f32) -> u8 {
    let shifted = degrees.clamp(-STEERING_LIMIT, STEERING_LIMIT) + STEERING_LIMIT;
    ((shifted / STEERING_RANGE) * f32::from(u8::MAX)) as u8
}

/// Recovers a steering angle in degrees.
#[inline]
#[must_use]
pub fn decompress_steering(value: u8) -> f32 {
    STEERING_RANGE * (f32::from(value) / f32::from(u8::MAX)) - STEERING_LIMIT
}

/// Converts latency in seconds to whole milliseconds, truncating toward
/// zero.
///
/// Saturates at the `i16` bounds (about 32.7 seconds).
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn latency_to_wire(seconds: f32) -> i16 {
    (seconds * 1000.0) as i16
}

/// Converts wire milliseconds back to seconds.
#[inline]
#[must_use]
pub fn latency_from_wire(millis: i16) -> f32 {
    f32::from(millis) / 1000.0
}
