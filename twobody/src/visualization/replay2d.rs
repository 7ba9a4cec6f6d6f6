use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::states::{BodyRole, NVec2};
use crate::simulation::trajectory::Trajectory;

/// Component tagging each marker with the body it follows
#[derive(Component)]
struct BodyMarker(pub BodyRole);

/// Precomputed run plus the frame currently on screen
#[derive(Resource)]
struct Replay {
    trajectory: Trajectory,
    frame: usize,
}

/// Half-width of the visible square in metres
const VIEW_EXTENT: f64 = 5.0e8;

/// Half-height of the default window in pixels
const VIEW_PIXELS: f64 = 360.0;

const SCALE: f64 = VIEW_PIXELS / VIEW_EXTENT;

fn to_screen(p: NVec2) -> Vec2 {
    Vec2::new((p.x * SCALE) as f32, (p.y * SCALE) as f32)
}

fn marker_style(role: BodyRole) -> (f32, Color) {
    match role {
        BodyRole::Primary => (8.0, Color::srgb(0.2, 0.4, 1.0)),
        BodyRole::Secondary => (4.0, Color::srgb(1.0, 0.2, 0.2)),
    }
}

/// Play `trajectory` back in a window, one frame per update, looping forever
pub fn run_2d(trajectory: Trajectory) {
    if trajectory.is_empty() {
        log::warn!("run_2d: nothing to replay");
        return;
    }
    log::info!("run_2d: replaying {} frames", trajectory.len());

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Replay { trajectory, frame: 0 })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "twobody".into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // env_logger already owns the global logger
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_markers_system)
        .add_systems(Update, (advance_frame_system, (sync_markers_system, draw_trails_system)).chain())
        .run();
}

fn setup_markers_system(mut commands: Commands, replay: Res<Replay>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    let Some(frame) = replay.trajectory.get_frame(0) else {
        return;
    };

    for (role, position) in [(BodyRole::Primary, frame.primary), (BodyRole::Secondary, frame.secondary)] {
        let (radius, color) = marker_style(role);
        let p = to_screen(position);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(p.x, p.y, 1.0),
                ..Default::default()
            },
            BodyMarker(role),
        ));
    }
}

fn advance_frame_system(mut replay: ResMut<Replay>) {
    let len = replay.trajectory.len();
    replay.frame = (replay.frame + 1) % len;
}

fn sync_markers_system(replay: Res<Replay>, mut query: Query<(&BodyMarker, &mut Transform)>) {
    let Some(frame) = replay.trajectory.get_frame(replay.frame) else {
        return;
    };

    for (BodyMarker(role), mut transform) in &mut query {
        let position = match role {
            BodyRole::Primary => frame.primary,
            BodyRole::Secondary => frame.secondary,
        };
        let p = to_screen(position);
        transform.translation.x = p.x;
        transform.translation.y = p.y;
    }
}

fn draw_trails_system(replay: Res<Replay>, mut gizmos: Gizmos) {
    let Some(frame) = replay.trajectory.get_frame(replay.frame) else {
        return;
    };

    for (role, trail) in [(BodyRole::Primary, frame.primary_trail), (BodyRole::Secondary, frame.secondary_trail)] {
        let (_, color) = marker_style(role);
        gizmos.linestrip_2d(trail.iter().copied().map(to_screen), color);
    }
}
