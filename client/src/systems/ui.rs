use bevy::prelude::*;

use crate::{
    constants::*,
    markers::{
        ControlsListUIMarker, CrosshairUIMarker, MainCameraMarker, MenuUIMarker, MissionTextUIMarker,
        RebindPromptUIMarker,
    },
    resources::{LookAngles, RebindFlow, SoundAssets, VisualAssets},
};
use sim::{
    InputState, SimConfig,
    input::Action,
    locomotion::Player,
    mission::MissionText,
    session::GameSession,
};

// ============================================================================
// World Setup System
// ============================================================================

pub fn setup_world_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<SimConfig>,
    player: Res<Player>,
    look: Res<LookAngles>,
) {
    commands.insert_resource(SoundAssets {
        shoot: asset_server.load(SOUND_SHOOT),
        hit: asset_server.load(SOUND_HIT),
    });

    commands.insert_resource(VisualAssets {
        projectile_mesh: meshes.add(Sphere::new(config.projectile_radius)),
        projectile_material: materials.add(StandardMaterial {
            base_color: PROJECTILE_COLOR,
            emissive: LinearRgba::from(PROJECTILE_COLOR),
            ..default()
        }),
        target_mesh: meshes.add(Cuboid::from_length(config.target_size)),
        target_material: materials.add(TARGET_COLOR),
    });

    // Ground plane
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(GROUND_COLOR)),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // First-person camera (moved every frame by the camera sync system)
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(player.position).with_rotation(look.rotation()),
        MainCameraMarker,
        IsDefaultUiCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_DIRECTIONAL_BRIGHTNESS,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(LIGHT_DIRECTIONAL_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: LIGHT_AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: false,
    });

    spawn_crosshair(&mut commands);
    spawn_mission_text(&mut commands);
    spawn_menu(&mut commands);
}

fn spawn_crosshair(commands: &mut Commands) {
    let color = Color::srgba(1.0, 1.0, 1.0, 0.8);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(50.0),
                top: Val::Percent(50.0),
                width: Val::Px(0.0),
                height: Val::Px(0.0),
                ..default()
            },
            Visibility::Hidden,
            CrosshairUIMarker,
        ))
        .with_children(|parent| {
            // Horizontal line
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(-CROSSHAIR_SIZE / 2.0),
                    top: Val::Px(-CROSSHAIR_THICKNESS / 2.0),
                    width: Val::Px(CROSSHAIR_SIZE),
                    height: Val::Px(CROSSHAIR_THICKNESS),
                    ..default()
                },
                BackgroundColor(color),
            ));
            // Vertical line
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(-CROSSHAIR_THICKNESS / 2.0),
                    top: Val::Px(-CROSSHAIR_SIZE / 2.0),
                    width: Val::Px(CROSSHAIR_THICKNESS),
                    height: Val::Px(CROSSHAIR_SIZE),
                    ..default()
                },
                BackgroundColor(color),
            ));
        });
}

fn spawn_mission_text(commands: &mut Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(40.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: MISSION_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                MissionTextUIMarker,
            ));
        });
}

fn spawn_menu(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            Visibility::Inherited,
            MenuUIMarker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(WINDOW_TITLE),
                TextFont {
                    font_size: MENU_TITLE_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new("Enter: Start Game    C: Change Controls"),
                TextFont {
                    font_size: MENU_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: MENU_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                ControlsListUIMarker,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: MENU_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.2)),
                RebindPromptUIMarker,
            ));
        });
}

// ============================================================================
// UI Update Systems
// ============================================================================

// Mirror the simulation's mission text slot
pub fn ui_mission_text_system(mission: Res<MissionText>, mut text: Single<&mut Text, With<MissionTextUIMarker>>) {
    if !mission.is_changed() {
        return;
    }

    text.0 = mission.text().unwrap_or_default().to_string();
}

// Menu is up until the game starts; the crosshair only shows in game
pub fn ui_menu_visibility_system(
    session: Res<GameSession>,
    mut menu: Single<&mut Visibility, (With<MenuUIMarker>, Without<CrosshairUIMarker>)>,
    mut crosshair: Single<&mut Visibility, (With<CrosshairUIMarker>, Without<MenuUIMarker>)>,
) {
    if !session.is_changed() {
        return;
    }

    let (menu_visibility, crosshair_visibility) = if session.started {
        (Visibility::Hidden, Visibility::Inherited)
    } else {
        (Visibility::Inherited, Visibility::Hidden)
    };
    **menu = menu_visibility;
    **crosshair = crosshair_visibility;
}

pub fn ui_controls_list_system(
    input: Res<InputState>,
    mut text: Single<&mut Text, With<ControlsListUIMarker>>,
) {
    if !input.is_changed() {
        return;
    }

    text.0 = controls_text(&input);
}

pub fn ui_rebind_prompt_system(
    rebind_flow: Res<RebindFlow>,
    mut text: Single<&mut Text, With<RebindPromptUIMarker>>,
) {
    if !rebind_flow.is_changed() {
        return;
    }

    text.0 = rebind_flow.current().map_or_else(String::new, |action| {
        format!(
            "Press a key for {} (Backspace keeps the current key, Escape stops)",
            action.label()
        )
    });
}

// One line per action with its key upper-cased, then the fixed shoot control
#[must_use]
pub fn controls_text(input: &InputState) -> String {
    let mut lines: Vec<String> = Action::ALL
        .iter()
        .map(|&action| format!("{}: {}", action.label(), input.binding(action).to_uppercase()))
        .collect();
    lines.push("Shoot: Left Click".to_string());
    lines.join("\n")
}
