use anyhow::Context;
use cp_core::{ImportOptions, ImportSession};
use cp_host::{materialize_all, Attachment, HostScene, InMemoryScene};
use glam::{DMat4, DVec3};
use log::info;

fn load_options() -> anyhow::Result<ImportOptions> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read options from {path}"))?;
            ImportOptions::from_json(&json).with_context(|| format!("Invalid options in {path}"))
        }
        None => Ok(ImportOptions::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Camera placement demo");
    println!("=====================\n");

    let options = load_options()?;
    info!("Using {options:?}");

    let mut session = ImportSession::new(options)?;

    let mut front = session.create("Front");
    front.position = DVec3::new(0.0, -80.0, 250.0);
    front.target_position = DVec3::ZERO;
    session.register(front)?;

    // Looks straight down the default up axis, so the solver falls back to +Z
    let mut top = session.create("Top");
    top.position = DVec3::new(0.0, 300.0, 0.0);
    top.target_position = DVec3::ZERO;
    session.register(top)?;

    let mut ortho = session.create("Side Ortho");
    ortho.position = DVec3::new(400.0, 0.0, 0.0);
    ortho.target_position = DVec3::ZERO;
    ortho.orthographic = true;
    session.register(ortho)?;

    let mut hidden = session.create("Front");
    hidden.position = DVec3::new(-120.0, -60.0, -200.0);
    hidden.target_position = DVec3::new(0.0, -20.0, 0.0);
    hidden.hidden = true;
    session.register(hidden)?;

    let mut scene = InMemoryScene::new();
    let model = scene.add_empty("Model", DMat4::from_translation(DVec3::new(0.0, 0.0, 1.0)));
    let ids = materialize_all(
        &mut scene,
        &session,
        Attachment {
            parent: Some(model),
            ..Default::default()
        },
    )?;
    scene.update();

    for id in ids {
        println!("{}", scene.object_name(id)?);
        let rows = scene.world_transform(id)?.transpose().to_cols_array_2d();
        for row in rows {
            println!(
                "  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]",
                row[0], row[1], row[2], row[3]
            );
        }
    }

    Ok(())
}
