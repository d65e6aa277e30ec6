//! Headless lander session.
//!
//! Drives the simulation through the host shell with a scripted key sequence,
//! logging the pose and what sits under the screen centre as it goes.
//!
//! ```text
//! RUST_LOG=info cargo run -p lander_headless -- [settings.json] [manifest.json]
//! ```

use std::time::Duration;

use glam::Vec3;
use lander::{
    Anchor, BoundingBox, DrawList, FrameClock, HostShell, Key, KeyBindings, LanderSettings,
    ManifestSource, MenuAction, Mesh, ShellEvent, Simulation,
};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FRAMES: u64 = 180;
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Built-in scene used when no manifest is given.
fn default_manifest(settings: &LanderSettings) -> ManifestSource {
    let mut source = ManifestSource::new();
    let meshes = vec![
        Mesh::new(
            "Moon",
            BoundingBox::new(Vec3::new(-50.0, -12.0, -50.0), Vec3::new(50.0, -10.0, 50.0)),
        )
        .with_anchor(Anchor::World),
        Mesh::new("Lander", BoundingBox::from_center(Vec3::ZERO, Vec3::splat(1.0))),
    ];
    for asset in &settings.mesh_assets {
        source.insert(asset.clone(), meshes.clone());
    }
    source
}

/// Key pressed on a given frame of the script.
fn scripted_key(frame: u64) -> Option<Key> {
    match frame {
        10 | 20 => Some(Key::A),
        40 => Some(Key::W),
        60 | 70 | 80 => Some(Key::E),
        120 => Some(Key::D),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => LanderSettings::from_path(path)?,
        None => LanderSettings::default(),
    };
    let mut source = match args.next() {
        Some(path) => ManifestSource::from_path(path)?,
        None => default_manifest(&settings),
    };

    let mut sim = Simulation::new(settings)?;
    sim.initialize(&mut source)?;
    sim.resize(WIDTH, HEIGHT);

    let mut shell = HostShell::new(&mut sim, KeyBindings::default());
    shell.handle_menu(&mut sim, MenuAction::NewGame);

    let mut clock = FrameClock::new();
    let mut draws = DrawList::new();

    for frame in 0..FRAMES {
        if let Some(key) = scripted_key(frame)
            && shell.handle_key(&mut sim, key) == ShellEvent::Exit
        {
            break;
        }

        std::thread::sleep(FRAME_TIME);
        clock.tick();
        draws.clear();
        shell.frame(&mut sim, &mut clock, &mut draws);

        if frame % 30 == 0 {
            let pose = sim.pose();
            log::info!(
                "frame {frame}: rotation {} translation {} gravity {} ({} draws)",
                pose.rotation,
                pose.translation,
                pose.gravity_offset,
                draws.calls.len()
            );
            let picked = sim.pick((WIDTH / 2) as i32, (HEIGHT / 2) as i32);
            log::info!("frame {frame}: centre pick -> {picked:?}");
        }
    }

    shell.handle_menu(&mut sim, MenuAction::Exit);
    log::info!("Session finished after {} frames", sim.frame_count());
    Ok(())
}
