//! Drives a whole import run through a host that records every call.

use cp_core::error::Result;
use cp_core::{ImportOptions, ImportSession};
use cp_host::{
    materialize_all, Attachment, CameraData, CollectionId, HostScene, InMemoryScene, ObjectId,
};
use glam::{DMat4, DVec3};

/// Forwards to an in-memory scene and keeps a call log.
struct RecordingScene {
    inner: InMemoryScene,
    calls: Vec<String>,
}

impl HostScene for RecordingScene {
    fn create_camera(&mut self, name: &str, data: CameraData) -> Result<ObjectId> {
        self.calls.push(format!("create {name}"));
        self.inner.create_camera(name, data)
    }

    fn object_name(&self, object: ObjectId) -> Result<String> {
        self.inner.object_name(object)
    }

    fn set_visibility(&mut self, object: ObjectId, hide_viewport: bool, hide_render: bool) -> Result<()> {
        self.calls.push(format!("hide {} {hide_viewport} {hide_render}", object.0));
        self.inner.set_visibility(object, hide_viewport, hide_render)
    }

    fn root_collection(&self) -> CollectionId {
        self.inner.root_collection()
    }

    fn is_linked(&self, collection: CollectionId, object: ObjectId) -> Result<bool> {
        self.inner.is_linked(collection, object)
    }

    fn link(&mut self, collection: CollectionId, object: ObjectId) -> Result<()> {
        self.calls.push(format!("link {} {}", collection.0, object.0));
        self.inner.link(collection, object)
    }

    fn set_parent(&mut self, child: ObjectId, parent: ObjectId, parent_inverse: DMat4) -> Result<()> {
        self.calls.push(format!("parent {} {}", child.0, parent.0));
        self.inner.set_parent(child, parent, parent_inverse)
    }

    fn world_transform(&self, object: ObjectId) -> Result<DMat4> {
        self.inner.world_transform(object)
    }

    fn set_world_transform(&mut self, object: ObjectId, transform: DMat4) -> Result<()> {
        self.calls.push(format!("place {}", object.0));
        self.inner.set_world_transform(object, transform)
    }

    fn update(&mut self) {
        self.calls.push("update".to_string());
        self.inner.update();
    }
}

#[test]
fn test_import_run_call_sequence() {
    let options = ImportOptions::from_json(r#"{ "scale": 0.04 }"#).unwrap();
    let mut session = ImportSession::new(options).unwrap();

    let mut front = session.create("Front");
    front.position = DVec3::new(0.0, 0.0, 250.0);
    front.target_position = DVec3::ZERO;
    session.register(front).unwrap();

    let mut top = session.create("Top");
    top.position = DVec3::new(0.0, 250.0, 0.0);
    top.target_position = DVec3::ZERO;
    top.hidden = true;
    session.register(top).unwrap();

    let mut inner = InMemoryScene::new();
    let parent = inner.add_empty("Model", DMat4::from_translation(DVec3::new(0.0, 0.0, 1.0)));
    let mut scene = RecordingScene {
        inner,
        calls: Vec::new(),
    };

    let ids = materialize_all(
        &mut scene,
        &session,
        Attachment {
            parent: Some(parent),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(ids, [ObjectId(1), ObjectId(2)]);
    assert_eq!(
        scene.calls,
        [
            "create Front",
            "hide 1 false false",
            "link 0 1",
            "update",
            "parent 1 0",
            "update",
            "place 1",
            "create Top",
            "hide 2 true true",
            "link 0 2",
            "update",
            "parent 2 0",
            "update",
            "place 2",
        ]
    );

    scene.update();
    let top_world = scene.world_transform(ids[1]).unwrap();
    // Straight down the hint axis: up falls back to +Z
    assert!(top_world.y_axis.truncate().abs_diff_eq(DVec3::Z, 1e-12));
    assert!(top_world.w_axis.truncate().abs_diff_eq(DVec3::new(0.0, 10.0, 0.0), 1e-12));
}

#[test]
fn test_reset_between_runs() {
    let mut session = ImportSession::new(ImportOptions::default()).unwrap();
    let mut scene = InMemoryScene::new();

    let first = session.create("Run1");
    session.register(first).unwrap();
    materialize_all(&mut scene, &session, Attachment::default()).unwrap();

    session.reset_session();
    let second = session.create("Run2");
    session.register(second).unwrap();
    let ids = materialize_all(&mut scene, &session, Attachment::default()).unwrap();

    assert_eq!(ids.len(), 1);
    assert_eq!(scene.object_name(ids[0]).unwrap(), "Run2");
}
