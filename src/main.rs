//! Headless replay of scripted input against an orbit controller.
//!
//! ```text
//! orbitview <script.json> [options.toml]
//! ```
//!
//! The script is a viewport plus a list of frames, each a list of input
//! events. Every frame's events are pushed, pumped and followed by an
//! `update`; the resulting pose is logged (run with `RUST_LOG=info`).

use std::path::Path;

use orbitview::{
    camera::{Camera, OrbitController},
    input::{EventQueue, InputEvent, Viewport},
    options::Options,
    OrbitError,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct ReplayScript {
    viewport: Viewport,
    frames: Vec<Vec<InputEvent>>,
}

fn load_script(path: &Path) -> Result<ReplayScript, OrbitError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| OrbitError::Script(e.to_string()))
}

fn run(
    script_path: &Path,
    options_path: Option<&Path>,
) -> Result<(), OrbitError> {
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let script = load_script(script_path)?;
    let aspect = script.viewport.aspect().ok_or_else(|| {
        OrbitError::Script("viewport height must be non-zero".into())
    })?;

    let camera = Camera::from_options(&options.camera, aspect);
    let mut orbit = OrbitController::new(camera, options.controls)?
        .with_keybindings(options.keybindings);
    let mut surface = EventQueue::new(script.viewport);
    orbit.attach(&mut surface)?;

    for (frame, events) in script.frames.into_iter().enumerate() {
        for event in events {
            let _ = surface.push(event);
        }
        let consumed = orbit.pump(&mut surface);
        orbit.update();

        let s = orbit.spherical();
        log::info!(
            "frame {frame}: consumed={consumed} eye={:?} target={:?} \
             radius={:.3} phi={:.4} theta={:.4}",
            orbit.camera().eye,
            orbit.target(),
            s.radius,
            s.phi,
            s.theta,
        );
    }

    orbit.dispose(&mut surface);
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(script) = args.next() else {
        log::error!("Usage: orbitview <script.json> [options.toml]");
        std::process::exit(1);
    };
    let options = args.next();

    if let Err(e) = run(Path::new(&script), options.as_deref().map(Path::new)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
