//! Host-side glue: turns camera descriptors into host scene objects.

pub mod materialize;
pub mod memory_scene;
pub mod scene;


pub use materialize::{apply_basis, camera_data, materialize, materialize_all, Attachment};
pub use memory_scene::{InMemoryScene, ObjectKind, SceneObject};
pub use scene::{CameraData, CollectionId, HostScene, ObjectId, SensorFit};
