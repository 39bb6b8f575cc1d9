//! Section navigation: which section is active, the eased scroll offset,
//! and the narrow-viewport menu.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::collections::HashMap;

use crate::content;

#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppScreen {
    #[default]
    Home,
    Buy,
}

#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ViewportClass {
    #[default]
    Wide,
    Narrow,
}

#[derive(Resource, Clone)]
pub struct SiteSettings {
    /// Window widths below this render the narrow (menu-button) header.
    pub narrow_breakpoint: f32,
    pub scroll_stiffness: f32,
    pub show_diagnostics: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 768.0,
            scroll_stiffness: 6.0,
            show_diagnostics: false,
        }
    }
}

#[derive(Resource)]
pub struct NavState {
    pub active_section: &'static str,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active_section: content::HOME_ID,
            menu_open: false,
        }
    }
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

/// Section id → y offset within the page content, re-recorded on every
/// layout pass. Requests for ids not in here are dropped.
#[derive(Resource, Default)]
pub struct SectionRegistry {
    offsets: HashMap<&'static str, f32>,
}

impl SectionRegistry {
    pub fn record(&mut self, id: &'static str, offset: f32) {
        self.offsets.insert(id, offset);
    }

    pub fn offset_of(&self, id: &str) -> Option<f32> {
        self.offsets.get(id).copied()
    }
}

/// Current scroll offset of the page body plus the in-flight glide target.
/// A new request overwrites the target; there is no queue.
#[derive(Resource, Default)]
pub struct ScrollAnim {
    pub offset: f32,
    pub target: Option<f32>,
}

#[derive(Event)]
pub struct ScrollRequest {
    pub section: &'static str,
}

pub struct NavPlugin;
impl Plugin for NavPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SiteSettings>()
            .init_resource::<NavState>()
            .init_resource::<SectionRegistry>()
            .init_resource::<ScrollAnim>()
            .add_event::<ScrollRequest>()
            .add_systems(
                Update,
                (classify_viewport, shortcuts, handle_scroll_requests, ease_scroll).chain(),
            )
            // The menu is a narrow-viewport artifact.
            .add_systems(OnEnter(ViewportClass::Wide), |mut nav: ResMut<NavState>| {
                nav.menu_open = false;
            });
    }
}

fn classify_viewport(
    settings: Res<SiteSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    viewport: Res<State<ViewportClass>>,
    mut next: ResMut<NextState<ViewportClass>>,
) {
    let Ok(win) = windows.get_single() else {
        return;
    };
    let desired = if win.width() < settings.narrow_breakpoint {
        ViewportClass::Narrow
    } else {
        ViewportClass::Wide
    };
    if *viewport.get() != desired {
        next.set(desired);
    }
}

fn handle_scroll_requests(
    mut ev: EventReader<ScrollRequest>,
    registry: Res<SectionRegistry>,
    viewport: Res<State<ViewportClass>>,
    mut nav: ResMut<NavState>,
    mut anim: ResMut<ScrollAnim>,
) {
    for req in ev.read() {
        let Some(y) = registry.offset_of(req.section) else {
            debug!("dropping scroll request for unknown section {:?}", req.section);
            continue;
        };
        nav.active_section = req.section;
        anim.target = Some(y.max(0.0));
        if *viewport.get() == ViewportClass::Narrow {
            nav.menu_open = false;
        }
    }
}

/// Exponential approach toward `target`, the same smoothing the body scroll
/// shares with a camera follow: `t = 1 - exp(-stiffness * dt)`.
pub fn glide(current: f32, target: f32, stiffness: f32, dt: f32) -> f32 {
    let t = (1.0 - (-stiffness * dt).exp()).clamp(0.0, 1.0);
    current + (target - current) * t
}

fn ease_scroll(time: Res<Time>, settings: Res<SiteSettings>, mut anim: ResMut<ScrollAnim>) {
    let Some(target) = anim.target else {
        return;
    };
    anim.offset = glide(anim.offset, target, settings.scroll_stiffness, time.delta_seconds());
    if (anim.offset - target).abs() < 0.5 {
        anim.offset = target;
        anim.target = None;
    }
}

fn shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<SiteSettings>,
    mut nav: ResMut<NavState>,
    mut ev_scroll: EventWriter<ScrollRequest>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        nav.menu_open = false;
    }
    if keys.just_pressed(KeyCode::Home) {
        ev_scroll.send(ScrollRequest {
            section: content::HOME_ID,
        });
    }
    if keys.just_pressed(KeyCode::F3) {
        settings.show_diagnostics = !settings.show_diagnostics;
    }
}
