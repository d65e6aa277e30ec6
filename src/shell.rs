//! Host Shell
//!
//! Platform-agnostic glue between a windowing frontend and the
//! [`Simulation`]. Frontends translate their native key events into [`Key`]
//! and menu clicks into [`MenuAction`]; the shell maps those onto command
//! codes and the pause / game flags, and tracks which menu entries are live.
//!
//! The shell starts with the menu open and the simulation paused.

use rustc_hash::FxHashMap;

use crate::control::LanderCommand;
use crate::render::MeshRenderer;
use crate::simulation::Simulation;
use crate::utils::FrameClock;

/// Keyboard key (platform-agnostic).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    // Letter keys
    A,
    D,
    E,
    Q,
    S,
    W,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Space,
    Enter,
    Escape,
}

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(LanderCommand),
    /// Show or hide the menu, pausing while it is shown.
    ToggleMenu,
}

/// Key to action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: FxHashMap<Key, KeyAction>,
}

impl Default for KeyBindings {
    /// W/S pitch, A/D yaw, E/Q thrust, Escape menu.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind(Key::W, KeyAction::Command(LanderCommand::RotateUp))
            .bind(Key::S, KeyAction::Command(LanderCommand::RotateDown))
            .bind(Key::A, KeyAction::Command(LanderCommand::RotateLeft))
            .bind(Key::D, KeyAction::Command(LanderCommand::RotateRight))
            .bind(Key::E, KeyAction::Command(LanderCommand::ThrustForward))
            .bind(Key::Q, KeyAction::Command(LanderCommand::ThrustBackward))
            .bind(Key::Escape, KeyAction::ToggleMenu);
        bindings
    }
}

impl KeyBindings {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn bind(&mut self, key: Key, action: KeyAction) -> &mut Self {
        self.map.insert(key, action);
        self
    }

    #[must_use]
    pub fn action(&self, key: Key) -> Option<KeyAction> {
        self.map.get(&key).copied()
    }
}

/// Menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewGame,
    Continue,
    Restart,
    Exit,
}

/// Outcome of feeding an event to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    Handled,
    /// Unbound key or disabled menu entry.
    Ignored,
    /// The host should close.
    Exit,
}

/// Menu state and event routing for one simulation.
#[derive(Debug, Clone)]
pub struct HostShell {
    bindings: KeyBindings,
    menu_visible: bool,
    new_game_enabled: bool,
    restart_enabled: bool,
    continue_enabled: bool,
}

impl HostShell {
    /// Opens the menu and pauses `sim`.
    pub fn new(sim: &mut Simulation, bindings: KeyBindings) -> Self {
        sim.set_paused(true);
        Self {
            bindings,
            menu_visible: true,
            new_game_enabled: true,
            restart_enabled: false,
            continue_enabled: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    #[must_use]
    pub fn is_enabled(&self, action: MenuAction) -> bool {
        match action {
            MenuAction::NewGame => self.new_game_enabled,
            MenuAction::Continue => self.continue_enabled,
            MenuAction::Restart => self.restart_enabled,
            MenuAction::Exit => true,
        }
    }

    pub fn handle_key(&mut self, sim: &mut Simulation, key: Key) -> ShellEvent {
        let Some(action) = self.bindings.action(key) else {
            return ShellEvent::Ignored;
        };
        match action {
            KeyAction::Command(command) if command.is_rotation() => {
                sim.rotate_command(command.code());
            }
            KeyAction::Command(command) => sim.thrust_command(command.code()),
            KeyAction::ToggleMenu => {
                self.menu_visible = !self.menu_visible;
                sim.set_paused(self.menu_visible);
            }
        }
        ShellEvent::Handled
    }

    pub fn handle_menu(&mut self, sim: &mut Simulation, action: MenuAction) -> ShellEvent {
        if !self.is_enabled(action) {
            return ShellEvent::Ignored;
        }
        log::info!("Menu: {action:?}");

        self.menu_visible = false;
        sim.set_paused(false);
        match action {
            MenuAction::NewGame => {
                self.new_game_enabled = false;
                self.restart_enabled = true;
                self.continue_enabled = true;
                sim.set_game_started(true);
            }
            MenuAction::Continue => sim.set_game_started(true),
            MenuAction::Restart => {
                sim.set_game_started(true);
                sim.restart();
            }
            MenuAction::Exit => {
                sim.set_game_started(false);
                return ShellEvent::Exit;
            }
        }
        ShellEvent::Handled
    }

    /// One display frame: update, render, then consume the game flags.
    ///
    /// `clock` must already be ticked for this frame. A started or finished
    /// game resets it so total time restarts at zero.
    pub fn frame(
        &mut self,
        sim: &mut Simulation,
        clock: &mut FrameClock,
        renderer: &mut impl MeshRenderer,
    ) {
        sim.update(clock.total_seconds(), clock.dt_seconds());
        sim.render(renderer);

        if sim.game_finished() {
            sim.set_game_finished(false);
            *clock = FrameClock::new();
        }
        if sim.game_started() {
            sim.set_game_started(false);
            *clock = FrameClock::new();
        }
    }
}
