use anyhow::{Context, Result};
#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use bevy::{
    log::LogPlugin,
    window::{CursorGrabMode, CursorOptions, WindowPosition},
};
use clap::Parser;

use client::{
    constants::{LOG_FILTER, SKY_COLOR, WINDOW_TITLE},
    resources::{ActiveSounds, LookAngles, ProjectileVisuals, RebindFlow, TargetVisual},
    systems::{
        audio::audio_system,
        input::{
            input_keyboard_system, input_look_system, input_menu_system, input_reset_system,
            input_shooting_system, input_unlock_system,
        },
        sync::{sync_camera_system, sync_cursor_system, sync_projectiles_system, sync_target_system},
        ui::{
            setup_world_system, ui_controls_list_system, ui_menu_visibility_system, ui_mission_text_system,
            ui_rebind_prompt_system,
        },
    },
};
use sim::{
    ControlEvent, InputState, SimConfig, SoundEffect, TargetRng, collision_system, control_events_system,
    constants::{PLAYER_SPEED, PROJECTILE_SPEED},
    delayed_tasks_system, locomotion_system, projectiles_system,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "First-person target range", long_about = None)]
struct Args {
    // Window X position
    #[arg(long)]
    window_x: Option<i32>,

    // Window Y position
    #[arg(long)]
    window_y: Option<i32>,

    // Window width
    #[arg(long, default_value = "1200")]
    window_width: u32,

    // Window height
    #[arg(long, default_value = "800")]
    window_height: u32,

    // Log filter directives, e.g. "sim=debug"
    #[arg(long, default_value = LOG_FILTER)]
    log_filter: String,

    // Seed for target placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    // Player walking speed in units per second
    #[arg(long, default_value_t = PLAYER_SPEED)]
    player_speed: f32,

    // Projectile speed in units per second
    #[arg(long, default_value_t = PROJECTILE_SPEED)]
    projectile_speed: f32,

    // Key for moving forward
    #[arg(long)]
    bind_forward: Option<String>,

    // Key for moving backward
    #[arg(long)]
    bind_backward: Option<String>,

    // Key for strafing left
    #[arg(long)]
    bind_left: Option<String>,

    // Key for strafing right
    #[arg(long)]
    bind_right: Option<String>,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let config = SimConfig {
        player_speed: args.player_speed,
        projectile_speed: args.projectile_speed,
        ..SimConfig::default()
    };
    config.validate().context("invalid command line settings")?;

    // Configure window position
    let window_position = if let (Some(x), Some(y)) = (args.window_x, args.window_y) {
        WindowPosition::At(IVec2::new(x, y))
    } else {
        WindowPosition::Automatic
    };

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    resolution: (args.window_width, args.window_height).into(),
                    position: window_position,
                    ..default()
                }),
                // The cursor is only captured once the game starts
                primary_cursor_options: Some(CursorOptions {
                    visible: true,
                    grab_mode: CursorGrabMode::None,
                    hit_test: true,
                }),
                ..default()
            })
            .set(LogPlugin {
                level: bevy::log::Level::INFO,
                filter: args.log_filter.clone(),
                ..default()
            }),
    )
    .insert_resource(ClearColor(SKY_COLOR))
    // Messages must exist before the simulation resources go in
    .add_message::<ControlEvent>()
    .add_message::<SoundEffect>();

    // Logging is up from here on
    let mut input = InputState::default();
    let rebound = input.rebind_controls(
        args.bind_forward.as_deref(),
        args.bind_backward.as_deref(),
        args.bind_left.as_deref(),
        args.bind_right.as_deref(),
    );
    if rebound > 0 {
        info!("{rebound} key binding(s) set from the command line");
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("target placement seed {seed}");
    sim::init_world(app.world_mut(), config, input, TargetRng::seeded(seed));

    app.init_resource::<LookAngles>()
        .init_resource::<RebindFlow>()
        .init_resource::<ProjectileVisuals>()
        .init_resource::<TargetVisual>()
        .init_resource::<ActiveSounds>()
        .add_systems(Startup, setup_world_system)
        .add_systems(
            Update,
            (
                // Translate window input into control events
                (
                    input_menu_system,
                    input_keyboard_system,
                    input_unlock_system,
                    input_reset_system,
                    input_shooting_system,
                    input_look_system,
                )
                    .chain(),
                // One simulation frame
                (
                    delayed_tasks_system,
                    control_events_system,
                    locomotion_system,
                    projectiles_system,
                    collision_system,
                )
                    .chain(),
                // Present the frame
                (
                    sync_camera_system,
                    sync_projectiles_system,
                    sync_target_system,
                    sync_cursor_system,
                    audio_system,
                    ui_mission_text_system,
                    ui_menu_visibility_system,
                    ui_controls_list_system,
                    ui_rebind_prompt_system,
                ),
            )
                .chain(),
        )
        .run();

    Ok(())
}
