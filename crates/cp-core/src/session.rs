use log::warn;

use crate::camera::CameraDescriptor;
use crate::error::Result;
use crate::options::ImportOptions;

/// Cameras discovered during one import run, in discovery order.
///
/// Each independent run gets its own session (or calls
/// [`ImportSession::reset_session`]) so descriptors never leak between runs.
#[derive(Clone, Debug, Default)]
pub struct ImportSession {
    options: ImportOptions,
    cameras: Vec<CameraDescriptor>,
}

impl ImportSession {
    /// Start an empty session. Fails if `options` are invalid.
    pub fn new(options: ImportOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            cameras: Vec::new(),
        })
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Fresh descriptor with this session's defaults. Not registered.
    pub fn create(&self, name: impl Into<String>) -> CameraDescriptor {
        CameraDescriptor::new(name, &self.options)
    }

    /// Append a validated descriptor to the registry.
    pub fn register(&mut self, camera: CameraDescriptor) -> Result<()> {
        if let Err(e) = camera.validate() {
            warn!("Rejected camera '{}': {}", camera.name, e);
            return Err(e);
        }
        self.cameras.push(camera);
        Ok(())
    }

    /// Registered descriptors in registration order.
    pub fn list_all(&self) -> &[CameraDescriptor] {
        &self.cameras
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Drop every registered descriptor. Options are kept.
    pub fn reset_session(&mut self) {
        self.cameras.clear();
    }
}
