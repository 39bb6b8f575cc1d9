use bevy::diagnostic::{EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use tomcoin_site::{content, theme, AppScreen, FieldPlugin, NavPlugin, PagePlugin, ViewportClass};

fn main() {
    App::new()
        .insert_resource(ClearColor(theme::page_fill()))
        .insert_resource(Msaa::Sample4)
        .init_state::<AppScreen>()
        .init_state::<ViewportClass>()
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_plugins(EntityCountDiagnosticsPlugin)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: content::WINDOW_TITLE.into(),
                resolution: (1280., 860.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((FieldPlugin, NavPlugin, PagePlugin))
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
