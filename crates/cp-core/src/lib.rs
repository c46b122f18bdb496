//! Camera descriptors and look-at placement for imported scenes.
//!
//! [`look_at::look_at`] turns an eye, a target and an up hint into an
//! orthonormal camera frame. [`session::ImportSession`] collects the
//! [`camera::CameraDescriptor`]s discovered during one import run.

pub mod camera;
pub mod error;
pub mod look_at;
pub mod options;
pub mod session;


pub use camera::{CameraDescriptor, Placement, Projection};
pub use error::{Error, Result};
pub use look_at::{look_at, Basis};
pub use options::ImportOptions;
pub use session::ImportSession;
