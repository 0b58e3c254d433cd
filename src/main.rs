//! Decode a molecule, build one frame and log what the viewer would draw.

use std::path::Path;

use molscope::{
    molecule::MoleculeDataset, options::Options, MolError, MoleculeViewer,
};

fn load(
    dataset_path: &str,
    options_path: Option<&str>,
) -> Result<MoleculeViewer, MolError> {
    let options = match options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let json = std::fs::read_to_string(dataset_path)?;
    let dataset = MoleculeDataset::from_json(&json)?;

    let mut viewer = MoleculeViewer::new(options);
    viewer.load_dataset(dataset);
    Ok(viewer)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(dataset_path) = args.next() else {
        log::error!("Usage: molscope <dataset.json> [options.toml]");
        std::process::exit(1);
    };
    let options_path = args.next();

    let mut viewer = match load(&dataset_path, options_path.as_deref()) {
        Ok(viewer) => viewer,
        Err(e) => {
            log::error!("{dataset_path}: {e}");
            std::process::exit(1);
        }
    };

    let frame = viewer.render();
    let _ = viewer.end_frame(frame.commit);
    let _ = viewer.tick();

    let highlighted =
        frame.primitives.iter().filter(|p| p.highlighted()).count();
    let framing = frame.framing;
    log::info!(
        "{} primitives ({highlighted} highlighted), centroid {:?}, \
         radius {:.2}, distance {:.2}",
        frame.primitives.len(),
        framing.centroid,
        framing.bounding_radius,
        framing.distance,
    );
    let camera = viewer.camera(16.0 / 9.0);
    log::debug!("camera eye {:?} target {:?}", camera.eye, camera.target);
}
