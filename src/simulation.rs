//! Simulation Core
//!
//! [`Simulation`] is the frame-driven heart of the lander. It owns the camera,
//! the mesh registry and all animation state, and is itself owned by the host
//! shell, which drives it once per display frame.
//!
//! # Frame Cycle
//!
//! 1. Input events call [`Simulation::rotate_command`] /
//!    [`Simulation::thrust_command`], which retarget the animation.
//! 2. The host calls [`Simulation::update`]: clocks advance, every animated
//!    quantity is integrated, the camera follows the vehicle.
//! 3. The host calls [`Simulation::render`]: poses are composed and handed to
//!    the renderer.
//!
//! [`Simulation::pick`] may be called between frames at any time.
//!
//! While paused, [`Simulation::update`] is a complete no-op and commands are
//! dropped, so the scene freezes exactly where it was.
//!
//! # Example
//!
//! ```rust,ignore
//! use lander::{LanderSettings, Simulation, assets::ManifestSource, render::DrawList};
//!
//! let mut sim = Simulation::new(LanderSettings::default())?;
//! sim.initialize(&mut ManifestSource::from_path("assets/manifest.json")?)?;
//! sim.resize(1280, 720);
//!
//! let mut draws = DrawList::new();
//! loop {
//!     sim.update(clock.total(), clock.delta());
//!     sim.render(&mut draws);
//! }
//! ```

use crate::animation::{AnimationClock, AnimationState, Timeline};
use crate::assets::MeshSource;
use crate::control::{CommandAccumulator, LanderCommand, SpeedState};
use crate::errors::Result;
use crate::picking::{PickHit, RayPicker};
use crate::render::MeshRenderer;
use crate::scene::{Camera, CameraFollower, Mesh, MeshHandle, MeshRegistry, Pose, ViewLayout};
use crate::settings::LanderSettings;

/// The lander simulation.
pub struct Simulation {
    settings: LanderSettings,

    camera: Camera,
    follower: CameraFollower,
    meshes: MeshRegistry,

    animation: AnimationState,
    accumulator: CommandAccumulator,
    clock: AnimationClock,

    paused: bool,
    game_started: bool,
    game_finished: bool,

    time: f32,
    frame_count: u64,
}

impl Simulation {
    /// Creates a simulation at rest. Fails only if `settings` are invalid.
    pub fn new(settings: LanderSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::from_valid(settings))
    }

    fn from_valid(settings: LanderSettings) -> Self {
        let cam = &settings.camera;
        let mut camera = Camera::new_perspective(cam.landscape_fov, 1.0, cam.near, cam.far);
        camera.set_up_vector(cam.landscape_up);

        let follower = CameraFollower::new(settings.camera);
        let animation = AnimationState::new(&settings.gravity);
        follower.follow(&mut camera, animation.pose().position());

        Self {
            accumulator: CommandAccumulator::new(&settings.controls),
            settings,
            camera,
            follower,
            meshes: MeshRegistry::new(),
            animation,
            clock: AnimationClock::new(),
            paused: false,
            game_started: false,
            game_finished: false,
            time: 0.0,
            frame_count: 0,
        }
    }

    /// Loads every configured mesh asset into the registry.
    pub fn initialize(&mut self, source: &mut impl MeshSource) -> Result<()> {
        for asset in &self.settings.mesh_assets {
            let meshes = source.load(asset)?;
            if meshes.is_empty() {
                log::warn!("Mesh asset '{asset}' contains no meshes");
            }
            self.meshes.extend(meshes);
        }
        log::info!("Simulation initialized with {} meshes", self.meshes.len());
        Ok(())
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshHandle {
        self.meshes.insert(mesh)
    }

    // ========================================================================
    // Frame cycle
    // ========================================================================

    /// Advances all animation state by `delta` seconds and moves the camera.
    pub fn update(&mut self, total: f32, delta: f32) {
        if self.paused {
            return;
        }
        self.time = total;
        self.frame_count += 1;

        self.clock.advance(delta);
        self.animation
            .integrate(&mut self.clock, &self.settings.pacing, &self.settings.gravity);
        self.follower
            .follow(&mut self.camera, self.animation.pose().position());
    }

    /// Hands every mesh and its world transform to `renderer`.
    pub fn render(&self, renderer: &mut impl MeshRenderer) {
        let pose = self.pose();
        for (handle, mesh) in self.meshes.iter() {
            renderer.draw(handle, mesh, &pose.world_transform(mesh.anchor));
        }
    }

    /// Window-size-dependent setup. Both dimensions must be non-zero.
    pub fn resize(&mut self, width: u32, height: u32) -> ViewLayout {
        let layout = self.follower.on_resize(&mut self.camera, width, height);
        self.follower
            .follow(&mut self.camera, self.animation.pose().position());
        layout
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Host entry point for rotate codes. Other codes are ignored.
    pub fn rotate_command(&mut self, code: i32) {
        match LanderCommand::from_code(code) {
            Some(command) if command.is_rotation() => self.apply_command(command),
            _ => log::debug!("Ignoring rotate code {code}"),
        }
    }

    /// Host entry point for thrust codes. Other codes are ignored.
    pub fn thrust_command(&mut self, code: i32) {
        match LanderCommand::from_code(code) {
            Some(command) if command.is_thrust() => self.apply_command(command),
            _ => log::debug!("Ignoring thrust code {code}"),
        }
    }

    /// Applies a command and starts a new motion leg. Dropped while paused.
    pub fn apply_command(&mut self, command: LanderCommand) {
        if self.paused {
            log::debug!("Paused, dropping {command:?}");
            return;
        }
        self.accumulator.apply(command, &mut self.animation);
        self.clock.reset(Timeline::Motion);
    }

    /// Returns the vehicle and everything it was doing to rest.
    pub fn restart(&mut self) {
        self.animation = AnimationState::new(&self.settings.gravity);
        self.accumulator.reset();
        self.clock = AnimationClock::new();
        self.follower
            .follow(&mut self.camera, self.animation.pose().position());
        log::info!("Simulation restarted");
    }

    // ========================================================================
    // Picking
    // ========================================================================

    /// Name of the nearest mesh under the screen point.
    #[must_use]
    pub fn pick(&self, x: i32, y: i32) -> Option<&str> {
        let hit = self.pick_hit(x, y)?;
        self.meshes.get(hit.handle).map(|mesh| mesh.name.as_str())
    }

    /// Nearest mesh under the screen point with its distance along the ray.
    #[must_use]
    pub fn pick_hit(&self, x: i32, y: i32) -> Option<PickHit> {
        let ray = self.camera.world_ray(x, y)?;
        RayPicker::pick(&ray, &self.meshes, &self.pose())
    }

    // ========================================================================
    // Host flags
    // ========================================================================

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_game_started(&mut self, started: bool) {
        self.game_started = started;
    }

    #[inline]
    #[must_use]
    pub fn game_started(&self) -> bool {
        self.game_started
    }

    pub fn set_game_finished(&mut self, finished: bool) {
        self.game_finished = finished;
    }

    #[inline]
    #[must_use]
    pub fn game_finished(&self) -> bool {
        self.game_finished
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Composed pose from the current animated values.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.animation.pose()
    }

    #[inline]
    #[must_use]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    #[inline]
    #[must_use]
    pub fn speed(&self) -> SpeedState {
        self.accumulator.speed()
    }

    #[inline]
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    #[must_use]
    pub fn meshes(&self) -> &MeshRegistry {
        &self.meshes
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &LanderSettings {
        &self.settings
    }

    /// `total` of the last unpaused update.
    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Number of unpaused updates so far.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::from_valid(LanderSettings::default())
    }
}
