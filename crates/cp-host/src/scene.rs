use cp_core::error::Result;
use cp_core::Projection;
use glam::DMat4;

/// Handle to an object owned by the host scene
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// Handle to a host collection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CollectionId(pub u32);

/// Which sensor dimension the field of view is measured along
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorFit {
    Auto,
    Horizontal,
    Vertical,
}

/// Camera data block handed to the host on creation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraData {
    pub projection: Projection,
    pub sensor_fit: SensorFit,
    pub clip_start: f64,
    pub clip_end: f64,
}

/// Scene graph operations the importer needs from the host application.
///
/// World transforms written with [`HostScene::set_world_transform`] may only
/// become visible through [`HostScene::world_transform`] after
/// [`HostScene::update`] has run.
pub trait HostScene {
    /// Create a camera object. The host may rename it to avoid collisions.
    fn create_camera(&mut self, name: &str, data: CameraData) -> Result<ObjectId>;

    /// Name the host actually gave the object
    fn object_name(&self, object: ObjectId) -> Result<String>;

    fn set_visibility(&mut self, object: ObjectId, hide_viewport: bool, hide_render: bool) -> Result<()>;

    /// Collection objects go to when no other is given
    fn root_collection(&self) -> CollectionId;

    fn is_linked(&self, collection: CollectionId, object: ObjectId) -> Result<bool>;

    fn link(&mut self, collection: CollectionId, object: ObjectId) -> Result<()>;

    /// Parent `child` to `parent`, with `parent_inverse` applied between the
    /// parent's world transform and the child's local transform.
    fn set_parent(&mut self, child: ObjectId, parent: ObjectId, parent_inverse: DMat4) -> Result<()>;

    /// Last evaluated world transform
    fn world_transform(&self, object: ObjectId) -> Result<DMat4>;

    fn set_world_transform(&mut self, object: ObjectId, transform: DMat4) -> Result<()>;

    /// Re-evaluate the dependency graph
    fn update(&mut self);
}
