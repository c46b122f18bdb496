use glam::DVec3;

use crate::error::{Error, Result};
use crate::look_at::{look_at, Basis};
use crate::options::ImportOptions;

/// Eye-to-target distance divided by this gives the orthographic scale.
pub const ORTHO_SCALE_DIVISOR: f64 = 1.92;

/// Camera parameters discovered during scene translation
#[derive(Clone, Debug, PartialEq)]
pub struct CameraDescriptor {
    /// Host object name, not necessarily unique
    pub name: String,

    /// Eye position in scene units
    pub position: DVec3,

    /// Point the camera looks toward
    pub target_position: DVec3,

    /// Approximate up direction, any length
    pub up_vector: DVec3,

    /// Vertical field of view in degrees
    pub fov_degrees: f64,

    pub near_clip: f64,
    pub far_clip: f64,

    pub orthographic: bool,

    /// Hidden in both viewport and render
    pub hidden: bool,
}

impl Default for CameraDescriptor {
    fn default() -> Self {
        Self::new("Camera", &ImportOptions::default())
    }
}

/// Projection the host camera should use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Vertical angle in radians
    Perspective { angle: f64 },
    Orthographic { ortho_scale: f64 },
}

/// Eye, target and up hint after unit scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub eye: DVec3,
    pub target: DVec3,
    pub up: DVec3,
}

impl Placement {
    pub fn solve(&self) -> Result<Basis> {
        look_at(self.eye, self.target, self.up)
    }
}

impl CameraDescriptor {
    /// Create a descriptor at the origin looking down +X with +Y up,
    /// projection defaults taken from `options`.
    pub fn new(name: impl Into<String>, options: &ImportOptions) -> Self {
        Self {
            name: name.into(),
            position: DVec3::ZERO,
            target_position: DVec3::X,
            up_vector: DVec3::Y,
            fov_degrees: options.camera_fov,
            near_clip: options.camera_near,
            far_clip: options.camera_far,
            orthographic: false,
            hidden: false,
        }
    }

    /// Check projection parameters and that eye and target are distinct.
    pub fn validate(&self) -> Result<()> {
        check_projection(self.fov_degrees, self.near_clip, self.far_clip)?;

        for (label, v) in [
            ("position", self.position),
            ("target", self.target_position),
            ("up vector", self.up_vector),
        ] {
            if !v.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "camera '{}' has non-finite {label}: {v}",
                    self.name
                )));
            }
        }

        if self.position == self.target_position {
            return Err(Error::DegenerateInput {
                eye: self.position,
                target: self.target_position,
            });
        }

        Ok(())
    }

    pub fn target_distance(&self) -> f64 {
        self.position.distance(self.target_position)
    }

    /// Orthographic view width, from the authored (unscaled) distance.
    pub fn ortho_scale(&self) -> f64 {
        self.target_distance() / ORTHO_SCALE_DIVISOR
    }

    pub fn projection(&self) -> Projection {
        if self.orthographic {
            Projection::Orthographic {
                ortho_scale: self.ortho_scale(),
            }
        } else {
            Projection::Perspective {
                angle: self.fov_degrees.to_radians(),
            }
        }
    }

    /// Near and far clip distances in host units.
    pub fn clip_range(&self, scale: f64) -> (f64, f64) {
        (self.near_clip * scale, self.far_clip * scale)
    }

    /// Scaled copy of the placement. The descriptor itself is left untouched.
    pub fn placement(&self, scale: f64) -> Placement {
        Placement {
            eye: self.position * scale,
            target: self.target_position * scale,
            up: self.up_vector * scale,
        }
    }

    /// World frame of the camera in host units.
    pub fn solve(&self, scale: f64) -> Result<Basis> {
        self.placement(scale).solve()
    }
}

pub(crate) fn check_projection(fov_degrees: f64, near: f64, far: f64) -> Result<()> {
    if !fov_degrees.is_finite() || fov_degrees <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "field of view must be positive, got {fov_degrees}"
        )));
    }

    if !near.is_finite() || near <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "near clip must be positive, got {near}"
        )));
    }

    if !far.is_finite() || near >= far {
        return Err(Error::InvalidConfig(format!(
            "near clip {near} must be less than far clip {far}"
        )));
    }

    Ok(())
}
