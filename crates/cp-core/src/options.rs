use serde::{Deserialize, Serialize};

use crate::camera::check_projection;
use crate::error::{Error, Result};

/// Import-wide camera defaults and unit scaling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Vertical field of view in degrees
    pub camera_fov: f64,

    /// Near clip distance in scene units
    pub camera_near: f64,

    /// Far clip distance in scene units
    pub camera_far: f64,

    /// Scene unit to host unit factor applied at materialization
    pub scale: f64,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            camera_fov: 30.0,
            camera_near: 0.01,
            camera_far: 100.0,
            scale: 1.0,
        }
    }
}

impl ImportOptions {
    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        check_projection(self.camera_fov, self.camera_near, self.camera_far)?;
        check_scale(self.scale)
    }
}

/// Unit scale factors must be positive and finite.
pub fn check_scale(scale: f64) -> Result<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "scale must be positive and finite, got {scale}"
        )));
    }
    Ok(())
}
