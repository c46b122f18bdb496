use cp_core::error::{Error, Result};
use glam::DMat4;

use crate::scene::{CameraData, CollectionId, HostScene, ObjectId};

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    Empty,
    Camera(CameraData),
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    pub hide_viewport: bool,
    pub hide_render: bool,
    pub parent: Option<ObjectId>,
    pub parent_inverse: DMat4,

    /// Evaluated world transform
    pub world: DMat4,

    /// Written but not yet evaluated
    pending_world: Option<DMat4>,
}

#[derive(Clone, Debug)]
struct Collection {
    name: String,
    objects: Vec<ObjectId>,
}

/// Scene graph kept entirely in memory.
///
/// Behaves like a host in the ways the importer depends on: names are made
/// unique with a `.001` style suffix, and written world transforms are only
/// evaluated on [`HostScene::update`].
#[derive(Clone, Debug)]
pub struct InMemoryScene {
    objects: Vec<SceneObject>,
    collections: Vec<Collection>,
    update_count: usize,
}

impl Default for InMemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            collections: vec![Collection {
                name: "Scene Collection".to_string(),
                objects: Vec::new(),
            }],
            update_count: 0,
        }
    }

    /// Add an already evaluated empty, linked to the root collection.
    pub fn add_empty(&mut self, name: &str, world: DMat4) -> ObjectId {
        let id = self.push_object(name, ObjectKind::Empty);
        self.objects[id.0 as usize].world = world;
        self.collections[0].objects.push(id);
        id
    }

    pub fn add_collection(&mut self, name: &str) -> CollectionId {
        self.collections.push(Collection {
            name: name.to_string(),
            objects: Vec::new(),
        });
        CollectionId(self.collections.len() as u32 - 1)
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0 as usize)
    }

    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .position(|o| o.name == name)
            .map(|i| ObjectId(i as u32))
    }

    pub fn collection_name(&self, id: CollectionId) -> Option<&str> {
        self.collections.get(id.0 as usize).map(|c| c.name.as_str())
    }

    pub fn objects_in(&self, id: CollectionId) -> Option<&[ObjectId]> {
        self.collections.get(id.0 as usize).map(|c| c.objects.as_slice())
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn update_count(&self) -> usize {
        self.update_count
    }

    /// Transform relative to the parent, as the host would store it.
    pub fn local_transform(&self, id: ObjectId) -> Result<DMat4> {
        let object = self.get(id)?;
        match object.parent {
            Some(parent) => {
                let parent_world = self.get(parent)?.world;
                Ok((parent_world * object.parent_inverse).inverse() * object.world)
            }
            None => Ok(object.world),
        }
    }

    fn push_object(&mut self, name: &str, kind: ObjectKind) -> ObjectId {
        let name = self.unique_name(name);
        self.objects.push(SceneObject {
            name,
            kind,
            hide_viewport: false,
            hide_render: false,
            parent: None,
            parent_inverse: DMat4::IDENTITY,
            world: DMat4::IDENTITY,
            pending_world: None,
        });
        ObjectId(self.objects.len() as u32 - 1)
    }

    fn unique_name(&self, name: &str) -> String {
        if self.find(name).is_none() {
            return name.to_string();
        }

        let mut n: u32 = 1;
        loop {
            let candidate = format!("{name}.{n:03}");
            if self.find(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    fn get(&self, id: ObjectId) -> Result<&SceneObject> {
        self.objects
            .get(id.0 as usize)
            .ok_or_else(|| Error::Host(format!("no object with id {}", id.0)))
    }

    fn get_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject> {
        self.objects
            .get_mut(id.0 as usize)
            .ok_or_else(|| Error::Host(format!("no object with id {}", id.0)))
    }

    fn collection_mut(&mut self, id: CollectionId) -> Result<&mut Collection> {
        self.collections
            .get_mut(id.0 as usize)
            .ok_or_else(|| Error::Host(format!("no collection with id {}", id.0)))
    }
}

impl HostScene for InMemoryScene {
    fn create_camera(&mut self, name: &str, data: CameraData) -> Result<ObjectId> {
        Ok(self.push_object(name, ObjectKind::Camera(data)))
    }

    fn object_name(&self, object: ObjectId) -> Result<String> {
        Ok(self.get(object)?.name.clone())
    }

    fn set_visibility(&mut self, object: ObjectId, hide_viewport: bool, hide_render: bool) -> Result<()> {
        let object = self.get_mut(object)?;
        object.hide_viewport = hide_viewport;
        object.hide_render = hide_render;
        Ok(())
    }

    fn root_collection(&self) -> CollectionId {
        CollectionId(0)
    }

    fn is_linked(&self, collection: CollectionId, object: ObjectId) -> Result<bool> {
        let objects = self
            .objects_in(collection)
            .ok_or_else(|| Error::Host(format!("no collection with id {}", collection.0)))?;
        Ok(objects.contains(&object))
    }

    fn link(&mut self, collection: CollectionId, object: ObjectId) -> Result<()> {
        self.get(object)?;
        let collection = self.collection_mut(collection)?;
        if collection.objects.contains(&object) {
            return Err(Error::Host(format!(
                "object {} already linked to '{}'",
                object.0, collection.name
            )));
        }
        collection.objects.push(object);
        Ok(())
    }

    fn set_parent(&mut self, child: ObjectId, parent: ObjectId, parent_inverse: DMat4) -> Result<()> {
        self.get(parent)?;
        if child == parent {
            return Err(Error::Host(format!("object {} cannot parent itself", child.0)));
        }
        let child = self.get_mut(child)?;
        child.parent = Some(parent);
        child.parent_inverse = parent_inverse;
        Ok(())
    }

    fn world_transform(&self, object: ObjectId) -> Result<DMat4> {
        Ok(self.get(object)?.world)
    }

    fn set_world_transform(&mut self, object: ObjectId, transform: DMat4) -> Result<()> {
        self.get_mut(object)?.pending_world = Some(transform);
        Ok(())
    }

    fn update(&mut self) {
        for object in &mut self.objects {
            if let Some(world) = object.pending_world.take() {
                object.world = world;
            }
        }
        self.update_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use super::*;

    #[test]
    fn test_names_are_made_unique() {
        let mut scene = InMemoryScene::new();
        let a = scene.add_empty("Camera", DMat4::IDENTITY);
        let b = scene.add_empty("Camera", DMat4::IDENTITY);
        let c = scene.add_empty("Camera", DMat4::IDENTITY);

        assert_eq!(scene.object_name(a).unwrap(), "Camera");
        assert_eq!(scene.object_name(b).unwrap(), "Camera.001");
        assert_eq!(scene.object_name(c).unwrap(), "Camera.002");
    }

    #[test]
    fn test_unique_name_skips_taken_suffixes() {
        let mut scene = InMemoryScene::new();
        scene.add_empty("Camera", DMat4::IDENTITY);
        scene.add_empty("Camera.001", DMat4::IDENTITY);
        let id = scene.add_empty("Camera", DMat4::IDENTITY);

        assert_eq!(scene.object_name(id).unwrap(), "Camera.002");
    }

    #[test]
    fn test_world_transform_is_stale_until_update() {
        let mut scene = InMemoryScene::new();
        let id = scene.add_empty("Empty", DMat4::IDENTITY);
        let moved = DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0));

        scene.set_world_transform(id, moved).unwrap();
        assert_eq!(scene.world_transform(id).unwrap(), DMat4::IDENTITY);

        scene.update();
        assert_eq!(scene.world_transform(id).unwrap(), moved);
        assert_eq!(scene.update_count(), 1);
    }

    #[test]
    fn test_double_link_is_host_error() {
        let mut scene = InMemoryScene::new();
        let id = scene.add_empty("Empty", DMat4::IDENTITY);

        let result = scene.link(scene.root_collection(), id);
        assert!(matches!(result, Err(Error::Host(_))));
    }

    #[test]
    fn test_unknown_ids_are_host_errors() {
        let mut scene = InMemoryScene::new();

        assert!(scene.world_transform(ObjectId(7)).is_err());
        assert!(scene.is_linked(CollectionId(3), ObjectId(0)).is_err());
        assert!(scene.set_visibility(ObjectId(1), true, true).is_err());
    }
}
