use glam::{DMat4, DVec3};
use log::trace;

use crate::error::{Error, Result};

/// `|dot(back, hint)|` above which the up hint counts as parallel to the
/// view axis (about 0.81 degrees).
pub const PARALLEL_THRESHOLD: f64 = 0.9999;

/// First substitute for a hint that is parallel to the view axis.
pub const FALLBACK_UP: DVec3 = DVec3::Z;

/// Used when `FALLBACK_UP` is parallel to the view axis as well.
pub const SECONDARY_FALLBACK_UP: DVec3 = DVec3::X;

/// Orthonormal right-handed camera frame anchored at the eye.
///
/// The camera looks down `-back`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    pub right: DVec3,
    pub up: DVec3,
    pub back: DVec3,
    pub eye: DVec3,
}

impl Basis {
    /// World transform with columns `[right, up, back, eye]` and bottom row
    /// `(0, 0, 0, 1)`.
    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.back.extend(0.0),
            self.eye.extend(1.0),
        )
    }

    /// Same transform as [`Basis::to_mat4`], laid out row by row.
    pub fn to_rows(&self) -> [[f64; 4]; 4] {
        self.to_mat4().transpose().to_cols_array_2d()
    }

    /// Viewing direction.
    pub fn forward(&self) -> DVec3 {
        -self.back
    }
}

/// Build the camera frame for an eye looking at `target`.
///
/// Only the direction of `up_hint` matters. A hint that is zero, non-finite
/// or within [`PARALLEL_THRESHOLD`] of the view axis is replaced by
/// [`FALLBACK_UP`], then by [`SECONDARY_FALLBACK_UP`].
pub fn look_at(eye: DVec3, target: DVec3, up_hint: DVec3) -> Result<Basis> {
    let back = unit_direction(eye - target).ok_or(Error::DegenerateInput { eye, target })?;

    let up_hint = resolve_up_hint(back, up_hint);

    let right = up_hint.cross(back).normalize();
    let up = back.cross(right).normalize();

    Ok(Basis {
        right,
        up,
        back,
        eye,
    })
}

/// Pick the unit up hint actually used for `back`.
pub fn resolve_up_hint(back: DVec3, up_hint: DVec3) -> DVec3 {
    if let Some(hint) = unit_direction(up_hint) {
        if back.dot(hint).abs() <= PARALLEL_THRESHOLD {
            return hint;
        }
    }

    if back.dot(FALLBACK_UP).abs() <= PARALLEL_THRESHOLD {
        trace!("up hint {up_hint} parallel to back {back}, using {FALLBACK_UP}");
        return FALLBACK_UP;
    }

    trace!("up hint {up_hint} and {FALLBACK_UP} parallel to back {back}, using {SECONDARY_FALLBACK_UP}");
    SECONDARY_FALLBACK_UP
}

/// Unit vector along `v`, for any finite non-zero length.
///
/// Dividing by the largest component first keeps the squared length away
/// from overflow and underflow.
fn unit_direction(v: DVec3) -> Option<DVec3> {
    let largest = v.abs().max_element();
    if !largest.is_finite() || largest == 0.0 {
        return None;
    }
    (v / largest).try_normalize()
}
