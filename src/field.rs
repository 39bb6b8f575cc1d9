//! Decorative particle field floating behind the page.

use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;
use rand::{Rng, RngCore, SeedableRng};

use crate::nav::AppScreen;
use crate::theme;

pub struct FieldPlugin;
impl Plugin for FieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FieldSettings>()
            .add_systems(OnEnter(AppScreen::Home), spawn_field)
            .add_systems(OnExit(AppScreen::Home), dismantle_field)
            .add_systems(Update, drift.run_if(in_state(AppScreen::Home)));
    }
}

#[derive(Resource, Clone)]
pub struct FieldSettings {
    pub count: usize,
    pub speed_min: f32,
    pub speed_max: f32,
    pub size_max: f32,
    /// Cancellation token for the drift loop; `false` freezes the field.
    pub running: bool,
    /// Seed the generator for a reproducible field.
    pub seed: Option<u64>,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            count: 50,
            speed_min: 0.5,
            speed_max: 1.5,
            size_max: 3.0,
            running: true,
            seed: None,
        }
    }
}

/// A floating point of the background field. Position lives on the entity
/// `Transform`; `speed` and `size` never change after spawn.
#[derive(Component)]
pub struct Particle {
    pub speed: f32,
    pub size: f32,
}

/// Rolls the attributes for a fresh field on a window of logical size
/// (`width`, `height`). Positions are in world coordinates, origin at the
/// window center.
pub fn seed_particles(
    rng: &mut dyn RngCore,
    width: f32,
    height: f32,
    settings: &FieldSettings,
) -> Vec<(Particle, Vec2)> {
    let half_w = width * 0.5;
    let half_h = height * 0.5;
    (0..settings.count)
        .map(|_| {
            let pos = Vec2::new(
                rng.gen_range(-half_w..half_w),
                rng.gen_range(-half_h..half_h),
            );
            let particle = Particle {
                speed: rng.gen_range(settings.speed_min..settings.speed_max),
                size: rng.gen_range(0.0..settings.size_max),
            };
            (particle, pos)
        })
        .collect()
}

fn spawn_field(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Res<FieldSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // No window, no field.
    let Ok(win) = windows.get_single() else {
        return;
    };

    let mut rng: Box<dyn RngCore> = match settings.seed {
        Some(seed) => Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let disc = Mesh2dHandle(meshes.add(Circle::new(1.0)));
    let tint = materials.add(ColorMaterial::from(theme::particle_tint()));

    for (particle, pos) in seed_particles(&mut *rng, win.width(), win.height(), &settings) {
        let size = particle.size;
        commands.spawn((
            particle,
            MaterialMesh2dBundle {
                mesh: disc.clone(),
                material: tint.clone(),
                transform: Transform::from_translation(pos.extend(0.0))
                    .with_scale(Vec3::new(size, size, 1.0)),
                ..default()
            },
        ));
    }
}

fn drift(
    settings: Res<FieldSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut q: Query<(&Particle, &mut Transform)>,
) {
    if !settings.running {
        return;
    }
    let Ok(win) = windows.get_single() else {
        return;
    };
    let half_h = win.height() * 0.5;

    for (p, mut t) in &mut q {
        t.translation.y += p.speed;
        if t.translation.y > half_h {
            t.translation.y = -half_h;
        }
    }
}

fn dismantle_field(mut commands: Commands, q: Query<Entity, With<Particle>>) {
    let mut dropped = 0;
    for e in &q {
        commands.entity(e).despawn();
        dropped += 1;
    }
    debug!("field dismantled, {dropped} particles dropped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use rand::rngs::StdRng;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<AppScreen>()
            .init_resource::<FieldSettings>()
            .add_systems(OnExit(AppScreen::Home), dismantle_field)
            .add_systems(Update, drift.run_if(in_state(AppScreen::Home)));
        app.world_mut().spawn((
            Window {
                resolution: (1280.0, 800.0).into(),
                ..default()
            },
            PrimaryWindow,
        ));
        app
    }

    fn spawn_particle(app: &mut App, y: f32, speed: f32) -> Entity {
        app.world_mut()
            .spawn((
                Particle { speed, size: 2.0 },
                Transform::from_xyz(33.0, y, 0.0),
            ))
            .id()
    }

    fn particle_y(app: &App, e: Entity) -> f32 {
        app.world().get::<Transform>(e).unwrap().translation.y
    }

    #[test]
    fn seeding_is_deterministic_and_in_range() {
        let settings = FieldSettings {
            seed: Some(7),
            ..default()
        };
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = seed_particles(&mut a, 1280.0, 800.0, &settings);
        let second = seed_particles(&mut b, 1280.0, 800.0, &settings);

        assert_eq!(first.len(), 50);
        for ((pa, va), (pb, vb)) in first.iter().zip(&second) {
            assert_eq!(va, vb);
            assert_eq!(pa.speed, pb.speed);
            assert_eq!(pa.size, pb.size);
        }
        for (p, pos) in &first {
            assert!((-640.0..640.0).contains(&pos.x));
            assert!((-400.0..400.0).contains(&pos.y));
            assert!((0.5..1.5).contains(&p.speed));
            assert!((0.0..3.0).contains(&p.size));
        }
    }

    #[test]
    fn drift_moves_each_particle_by_exactly_its_speed() {
        let mut app = test_app();
        let slow = spawn_particle(&mut app, -120.0, 0.5);
        let fast = spawn_particle(&mut app, 10.0, 1.5);
        app.update();
        assert_eq!(particle_y(&app, slow), -119.5);
        assert_eq!(particle_y(&app, fast), 11.5);
    }

    #[test]
    fn drift_wraps_to_the_bottom_edge_exactly() {
        let mut app = test_app();
        let wrapping = spawn_particle(&mut app, 399.8, 0.5);
        app.update();
        assert_eq!(particle_y(&app, wrapping), -400.0);
    }

    #[test]
    fn particle_at_the_edge_does_not_wrap() {
        // 399.0 + 1.0 lands exactly on the edge; the wrap is strict.
        let mut app = test_app();
        let edge = spawn_particle(&mut app, 399.0, 1.0);
        app.update();
        assert_eq!(particle_y(&app, edge), 400.0);
    }

    #[test]
    fn seeded_field_after_one_tick_matches_the_step_rule() {
        let settings = FieldSettings {
            seed: Some(42),
            ..default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let seeded = seed_particles(&mut rng, 1280.0, 800.0, &settings);

        let mut app = test_app();
        let spawned: Vec<(Entity, f32, f32)> = seeded
            .iter()
            .map(|(p, pos)| {
                let e = app
                    .world_mut()
                    .spawn((
                        Particle {
                            speed: p.speed,
                            size: p.size,
                        },
                        Transform::from_translation(pos.extend(0.0)),
                    ))
                    .id();
                (e, pos.y, p.speed)
            })
            .collect();

        app.update();
        for (e, y0, speed) in spawned {
            let expected = if y0 + speed > 400.0 { -400.0 } else { y0 + speed };
            assert_eq!(particle_y(&app, e), expected);
        }
    }

    #[test]
    fn only_y_changes_across_ticks() {
        let mut app = test_app();
        let e = spawn_particle(&mut app, 0.0, 0.75);
        for _ in 0..5 {
            app.update();
        }
        let t = app.world().get::<Transform>(e).unwrap();
        let p = app.world().get::<Particle>(e).unwrap();
        assert_eq!(t.translation.x, 33.0);
        assert_eq!(p.speed, 0.75);
        assert_eq!(p.size, 2.0);
        assert_eq!(t.translation.y, 3.75);
    }

    #[test]
    fn paused_field_does_not_move() {
        let mut app = test_app();
        app.world_mut().resource_mut::<FieldSettings>().running = false;
        let e = spawn_particle(&mut app, 50.0, 1.0);
        app.update();
        assert_eq!(particle_y(&app, e), 50.0);
    }

    #[test]
    fn leaving_home_dismantles_the_field_and_stops_the_loop() {
        let mut app = test_app();
        spawn_particle(&mut app, 0.0, 1.0);
        spawn_particle(&mut app, 100.0, 0.5);
        app.update();

        app.world_mut()
            .resource_mut::<NextState<AppScreen>>()
            .set(AppScreen::Buy);
        app.update();

        let mut query = app.world_mut().query::<&Particle>();
        assert_eq!(query.iter(app.world()).count(), 0);

        // A stray particle spawned afterwards must not be driven either.
        let stray = spawn_particle(&mut app, 10.0, 1.0);
        app.update();
        assert_eq!(particle_y(&app, stray), 10.0);
    }
}
