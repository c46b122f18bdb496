use cp_core::error::{Error, Result};
use cp_core::options::check_scale;
use cp_core::{Basis, CameraDescriptor, ImportSession};
use glam::DMat4;
use log::{debug, info};

use crate::scene::{CameraData, CollectionId, HostScene, ObjectId, SensorFit};

/// Where a materialized camera is attached in the host scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Attachment {
    /// Parent object; the child's world transform is preserved
    pub parent: Option<ObjectId>,

    /// Target collection, the host's root collection when `None`
    pub collection: Option<CollectionId>,
}

/// Camera data block for `camera` in host units.
pub fn camera_data(camera: &CameraDescriptor, scale: f64) -> CameraData {
    let (clip_start, clip_end) = camera.clip_range(scale);
    CameraData {
        projection: camera.projection(),
        sensor_fit: SensorFit::Vertical,
        clip_start,
        clip_end,
    }
}

/// Create the host camera for `camera` and place it.
///
/// The placement is solved before anything is created, so a degenerate
/// descriptor leaves the host scene untouched.
pub fn materialize<S: HostScene + ?Sized>(
    scene: &mut S,
    camera: &CameraDescriptor,
    scale: f64,
    attachment: Attachment,
) -> Result<ObjectId> {
    check_scale(scale)?;
    camera.validate()?;
    let basis = camera.solve(scale)?;

    let object = scene.create_camera(&camera.name, camera_data(camera, scale))?;
    scene.set_visibility(object, camera.hidden, camera.hidden)?;

    let collection = attachment
        .collection
        .unwrap_or_else(|| scene.root_collection());
    if !scene.is_linked(collection, object)? {
        scene.link(collection, object)?;
    }

    if let Some(parent) = attachment.parent {
        // The parent's transform has to be evaluated before it is inverted
        scene.update();
        let parent_inverse = invert(scene.world_transform(parent)?, parent)?;
        scene.set_parent(object, parent, parent_inverse)?;
    }

    scene.update();
    apply_basis(scene, object, &basis)?;

    debug!(
        "Materialized camera '{}' as '{}' at {} looking {}",
        camera.name,
        scene.object_name(object)?,
        basis.eye,
        basis.forward()
    );

    Ok(object)
}

/// Write a solved camera frame as the object's world transform.
pub fn apply_basis<S: HostScene + ?Sized>(scene: &mut S, object: ObjectId, basis: &Basis) -> Result<()> {
    scene.set_world_transform(object, basis.to_mat4())
}

/// Materialize every registered camera in registration order, using the
/// session's unit scale.
pub fn materialize_all<S: HostScene + ?Sized>(
    scene: &mut S,
    session: &ImportSession,
    attachment: Attachment,
) -> Result<Vec<ObjectId>> {
    let scale = session.options().scale;
    let objects = session
        .list_all()
        .iter()
        .map(|camera| materialize(scene, camera, scale, attachment))
        .collect::<Result<Vec<_>>>()?;

    info!("Materialized {} cameras", objects.len());
    Ok(objects)
}

fn invert(transform: DMat4, object: ObjectId) -> Result<DMat4> {
    let det = transform.determinant();
    let inverse = transform.inverse();
    if det == 0.0 || !det.is_finite() || !inverse.is_finite() {
        return Err(Error::SingularParent(format!(
            "object {} has determinant {det}",
            object.0
        )));
    }
    Ok(inverse)
}
