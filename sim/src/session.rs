use bevy_ecs::{prelude::*, system::SystemParam};
use bevy_math::Vec3;
use tracing::{debug, info};

use crate::{
    config::{SimConfig, TargetRng},
    constants::{MISSION_COMPLETE_TEXT, MISSION_START_TEXT},
    input::InputState,
    locomotion::Player,
    messages::{ControlEvent, SoundEffect},
    mission::MissionText,
    projectiles::{ProjectileId, Projectiles},
    tasks::{DelayedTask, DelayedTasks},
    target::Target,
};

// ============================================================================
// Game Session
// ============================================================================

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    pub started: bool,
    // Look/move input is captured by the game (pointer lock)
    pub controls_locked: bool,
}

// ============================================================================
// Simulation Context
// ============================================================================

// Every piece of mutable game state a frame step or control event can touch.
#[derive(SystemParam)]
pub struct SimContext<'w> {
    pub config: Res<'w, SimConfig>,
    pub session: ResMut<'w, GameSession>,
    pub input: ResMut<'w, InputState>,
    pub player: ResMut<'w, Player>,
    pub projectiles: ResMut<'w, Projectiles>,
    pub target: ResMut<'w, Target>,
    pub mission: ResMut<'w, MissionText>,
    pub tasks: ResMut<'w, DelayedTasks>,
    pub rng: ResMut<'w, TargetRng>,
    pub sounds: MessageWriter<'w, SoundEffect>,
}

impl SimContext<'_> {
    pub fn start_game(&mut self) -> bool {
        if self.session.started {
            debug!("game already started");
            return false;
        }

        self.session.started = true;
        self.session.controls_locked = true;
        let duration = self.config.message_duration();
        self.mission.show(MISSION_START_TEXT, duration, &mut self.tasks);
        self.spawn_target();
        info!("game started");
        true
    }

    // Releasing the lock also releases held keys so nothing stays pressed.
    pub fn set_controls_locked(&mut self, locked: bool) -> bool {
        if locked && !self.session.started {
            debug!("cannot lock controls before the game starts");
            return false;
        }
        if self.session.controls_locked == locked {
            return false;
        }

        self.session.controls_locked = locked;
        if !locked {
            self.input.release_all();
        }
        debug!("controls locked: {locked}");
        true
    }

    // Shooting only needs a started game, not a locked pointer.
    pub fn fire(&mut self) -> Option<ProjectileId> {
        if !self.session.started {
            return None;
        }

        let id = self.projectiles.spawn(self.player.position, self.player.facing)?;
        self.sounds.write(SoundEffect::Shoot);
        Some(id)
    }

    // Full kill contract: destroy, hit sound, message, and a delayed respawn.
    pub fn eliminate_target(&mut self) -> Option<Vec3> {
        let position = self.target.destroy()?;
        self.sounds.write(SoundEffect::Hit);
        let duration = self.config.message_duration();
        self.mission.show(MISSION_COMPLETE_TEXT, duration, &mut self.tasks);
        let delay = self.config.respawn_delay();
        self.tasks.schedule(DelayedTask::SpawnTarget, delay);
        Some(position)
    }

    pub fn run_task(&mut self, task: DelayedTask) {
        match task {
            DelayedTask::SpawnTarget => {
                self.spawn_target();
            }
            DelayedTask::ClearMessage { stamp } => {
                self.mission.clear_if_current(stamp);
            }
        }
    }

    fn spawn_target(&mut self) -> Option<Vec3> {
        let player_position = self.player.position;
        self.target.spawn(player_position, &self.config, &mut self.rng.0)
    }

    // Back to the menu. Bindings survive; pending tasks are dropped.
    pub fn reset(&mut self) {
        *self.session = GameSession::default();
        self.input.release_all();
        *self.player = Player::default();
        self.projectiles.clear();
        self.target.clear();
        self.mission.clear();
        self.tasks.clear();
        info!("game reset");
    }

    pub fn apply(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::KeyDown(key) => self.input.key_down(key),
            ControlEvent::KeyUp(key) => self.input.key_up(key),
            ControlEvent::Fire => {
                self.fire();
            }
            ControlEvent::StartGame => {
                self.start_game();
            }
            ControlEvent::SetControlsLocked(locked) => {
                self.set_controls_locked(*locked);
            }
            ControlEvent::Rebind { action, key } => {
                self.input.rebind(*action, key);
            }
            ControlEvent::Reset => self.reset(),
        }
    }
}

// ============================================================================
// Control Events System
// ============================================================================

pub fn control_events_system(mut events: MessageReader<ControlEvent>, mut ctx: SimContext) {
    for event in events.read() {
        ctx.apply(event);
    }
}
