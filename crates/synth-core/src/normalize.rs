//! Pixel to normalized-device-coordinate conversion.
//!
//! Absolute pointer injection takes coordinates scaled to a fixed 0..65536
//! range regardless of the real screen resolution.  [`normalize`] performs that
//! scaling for one axis.
//!
//! # Sign offset
//!
//! The result is nudged by one unit away from the origin: `+1` for positive
//! coordinates and `-1` for everything else.  Zero falls on the negative side,
//! so `normalize(0, s) == -1`.  This matches the observed behaviour of the
//! capture/replay system this crate interoperates with and is kept as is;
//! the tests pin it down.

use thiserror::Error;

/// Width of the normalized device coordinate space.
pub const NORMALIZED_RANGE: i64 = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The screen extent was zero or negative.
    #[error("screen extent must be positive, got {extent}")]
    InvalidExtent { extent: i32 },
}

/// Scales `coordinate` on a screen axis of `extent` pixels into device space.
///
/// Computes `coordinate * 65536 / extent` (truncating toward zero) plus the
/// sign offset described in the module docs.  Arithmetic is done in 64 bits;
/// results outside the `i32` range saturate.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidExtent`] if `extent <= 0`.
pub fn normalize(coordinate: i32, extent: i32) -> Result<i32, NormalizeError> {
    if extent <= 0 {
        return Err(NormalizeError::InvalidExtent { extent });
    }

    let offset: i64 = if coordinate > 0 { 1 } else { -1 };
    let scaled = i64::from(coordinate) * NORMALIZED_RANGE / i64::from(extent) + offset;

    Ok(scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}
