use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::simulation::params::SECONDS_PER_DAY;
use crate::simulation::scenario::Scenario;
use crate::visualization::view::{distance_label, View};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct NameLabel(pub usize);

#[derive(Component)]
struct DistanceLabel(pub usize);

#[derive(Component)]
struct StatsText;

const LABEL_FONT: f32 = 16.0;
const OVERLAY_FONT: f32 = 22.0;
const NAME_OFFSET: f32 = 26.0; // label heights above the marker, in pixels
const DISTANCE_OFFSET: f32 = 12.0;

const HELP_LINES: [&str; 3] = [
    "Zoom in:  arrow right",
    "Zoom out: arrow left",
    "Colored trail = distance traveled in 70 days",
];

fn orbit_color() -> Color {
    Color::srgb_u8(50, 50, 50)
}

fn body_color(c: [u8; 3]) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

pub fn run_2d(scenario: Scenario) -> AppExit {
    let view = View::from_config(&scenario.view);

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(scenario.engine.tick_hz))
        .insert_resource(view.clone())
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar system".into(),
                resolution: WindowResolution::new(view.width, view.height),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, (setup_bodies_system, setup_overlay_system))
        .add_systems(FixedUpdate, (zoom_system, physics_step_system).chain())
        .add_systems(Update, (sync_transforms_system, sync_labels_system, draw_paths_system, stats_system))
        .run()
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, view: Res<View>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    info!(
        "run_2d: starting Bevy 2D viewer with {} bodies, {:?} updates at {} Hz",
        scenario.system.bodies.len(),
        scenario.engine.integrator,
        scenario.engine.tick_hz,
    );

    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let at = view.to_screen(&body.x);
        let color = body_color(body.color);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(at.x, at.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        commands.spawn((
            Text2dBundle {
                text: Text::from_section(body.name.clone(), label_style()),
                transform: Transform::from_xyz(at.x, at.y + NAME_OFFSET, 2.0),
                ..Default::default()
            },
            NameLabel(i),
        ));

        // The primary carries no distance annotation
        if !body.primary {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(distance_label(body.distance_to_primary), label_style()),
                    transform: Transform::from_xyz(at.x, at.y + DISTANCE_OFFSET, 2.0),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

fn label_style() -> TextStyle {
    TextStyle {
        font_size: LABEL_FONT,
        color: Color::WHITE,
        ..Default::default()
    }
}

fn setup_overlay_system(mut commands: Commands) {
    let style = TextStyle {
        font_size: OVERLAY_FONT,
        color: Color::WHITE,
        ..Default::default()
    };

    for (row, line) in HELP_LINES.iter().enumerate() {
        commands.spawn(TextBundle::from_section(*line, style.clone()).with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(20.0 + 30.0 * row as f32),
            left: Val::Px(20.0),
            ..Default::default()
        }));
    }

    commands.spawn((
        TextBundle::from_section(String::new(), style).with_style(Style {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            left: Val::Px(20.0),
            ..Default::default()
        }),
        StatsText,
    ));
}

/// Held arrow keys scale the view once per tick
fn zoom_system(keys: Res<ButtonInput<KeyCode>>, mut view: ResMut<View>) {
    if keys.pressed(KeyCode::ArrowLeft) {
        view.zoom_out();
    }
    if keys.pressed(KeyCode::ArrowRight) {
        view.zoom_in();
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut diverged: Local<bool>) {
    scenario.step();

    // Report once; close encounters are not corrected
    if !*diverged && !scenario.system.is_finite() {
        *diverged = true;
        warn!(
            "simulation state became non-finite after {} steps (t = {:.1} days)",
            scenario.system.steps,
            scenario.system.t / SECONDS_PER_DAY,
        );
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, view: Res<View>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let at = view.to_screen(&b.x);
            transform.translation.x = at.x;
            transform.translation.y = at.y;
        }
    }
}

fn sync_labels_system(
    scenario: Res<Scenario>,
    view: Res<View>,
    mut names: Query<(&NameLabel, &mut Transform), Without<DistanceLabel>>,
    mut distances: Query<(&DistanceLabel, &mut Transform, &mut Text), Without<NameLabel>>,
) {
    let bodies = &scenario.system.bodies;

    for (NameLabel(i), mut transform) in &mut names {
        if let Some(b) = bodies.get(*i) {
            let at = view.to_screen(&b.x);
            transform.translation.x = at.x;
            transform.translation.y = at.y + NAME_OFFSET;
        }
    }

    for (DistanceLabel(i), mut transform, mut text) in &mut distances {
        if let Some(b) = bodies.get(*i) {
            let at = view.to_screen(&b.x);
            transform.translation.x = at.x;
            transform.translation.y = at.y + DISTANCE_OFFSET;

            text.sections[0].value = distance_label(b.distance_to_primary);
        }
    }
}

/// Orbit in grey underneath, recent trail in the body's color
fn draw_paths_system(scenario: Res<Scenario>, view: Res<View>, mut gizmos: Gizmos) {
    for b in &scenario.system.bodies {
        if b.orbit.len() > 2 {
            gizmos.linestrip_2d(b.orbit.iter().map(|p| view.to_screen(p)), orbit_color());
        }
        if b.trail.len() > 2 {
            gizmos.linestrip_2d(b.trail.iter().map(|p| view.to_screen(p)), body_color(b.color));
        }
    }
}

fn stats_system(scenario: Res<Scenario>, view: Res<View>, mut query: Query<&mut Text, With<StatsText>>) {
    for mut text in &mut query {
        text.sections[0].value = format!(
            "Day {:.0}   {:.2} px/AU",
            scenario.system.t / SECONDS_PER_DAY,
            view.au_pixels(),
        );
    }
}
