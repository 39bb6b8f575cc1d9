//! The page itself: header with nav, the scrolling section stack, the FAQ
//! accordion, the buy screen, and the diagnostics overlay.

use bevy::diagnostic::{
    DiagnosticsStore, EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy_egui::{
    egui::{self, Align2, RichText},
    EguiContexts, EguiPlugin,
};

use crate::content;
use crate::nav::{
    AppScreen, NavState, ScrollAnim, ScrollRequest, SectionRegistry, SiteSettings, ViewportClass,
};
use crate::theme;

pub struct PagePlugin;
impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<FaqOpen>()
            .add_systems(Update, home_ui.run_if(in_state(AppScreen::Home)))
            .add_systems(Update, buy_ui.run_if(in_state(AppScreen::Buy)))
            .add_systems(Update, diagnostics_ui);
    }
}

/// At most one FAQ entry is expanded at a time; toggling the open one
/// collapses it.
#[derive(Resource, Default)]
pub struct FaqOpen(pub Option<usize>);

impl FaqOpen {
    pub fn toggle(&mut self, index: usize) {
        self.0 = if self.0 == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[allow(clippy::too_many_arguments)]
fn home_ui(
    mut contexts: EguiContexts,
    mut nav: ResMut<NavState>,
    mut registry: ResMut<SectionRegistry>,
    mut anim: ResMut<ScrollAnim>,
    mut faq: ResMut<FaqOpen>,
    mut ev_scroll: EventWriter<ScrollRequest>,
    viewport: Res<State<ViewportClass>>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    let narrow = *viewport.get() == ViewportClass::Narrow;
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("header")
        .frame(theme::header_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(content::BRAND)
                        .size(24.0)
                        .strong()
                        .color(theme::ink()),
                );
                ui.add_space(12.0);
                if narrow {
                    if ui.button(RichText::new("menu").color(theme::ink())).clicked() {
                        nav.toggle_menu();
                    }
                } else {
                    for section in &content::SECTIONS {
                        let mut label = RichText::new(section.label).color(theme::ink());
                        if nav.active_section == section.id {
                            label = label.strong();
                        }
                        if ui.button(label).clicked() {
                            ev_scroll.send(ScrollRequest {
                                section: section.id,
                            });
                        }
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let buy = egui::Button::new(RichText::new("buy tom").color(theme::canary()))
                        .fill(theme::ink())
                        .rounding(egui::Rounding::same(8.0));
                    if ui.add(buy).clicked() {
                        next_screen.set(AppScreen::Buy);
                    }
                });
            });
        });

    if narrow && nav.menu_open {
        egui::Window::new("menu")
            .title_bar(false)
            .resizable(false)
            .anchor(Align2::RIGHT_TOP, egui::vec2(-8.0, 8.0))
            .frame(theme::card_frame())
            .show(ctx, |ui| {
                for section in &content::SECTIONS {
                    let label = RichText::new(section.label).size(16.0).color(theme::ink());
                    if ui.button(label).clicked() {
                        ev_scroll.send(ScrollRequest {
                            section: section.id,
                        });
                    }
                }
            });
    }

    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical().auto_shrink([false, false]);
            if anim.target.is_some() {
                area = area.vertical_scroll_offset(anim.offset);
            }
            let output = area.show(ui, |ui| {
                let origin = ui.cursor().min.y;
                ui.vertical_centered(|ui| {
                    ui.set_max_width(880.0);

                    registry.record("home", ui.cursor().min.y - origin);
                    hero(ui);
                    registry.record("about", ui.cursor().min.y - origin);
                    about(ui);
                    registry.record("how-to-buy", ui.cursor().min.y - origin);
                    how_to_buy(ui, narrow);
                    registry.record("tokenomics", ui.cursor().min.y - origin);
                    tokenomics(ui);
                    registry.record("roadmap", ui.cursor().min.y - origin);
                    roadmap(ui);
                    registry.record("faq", ui.cursor().min.y - origin);
                    faq_accordion(ui, &mut faq);
                    footer(ui);
                });
            });
            // While gliding the offset is forced; otherwise follow the user.
            if anim.target.is_none() {
                anim.offset = output.state.offset.y;
            }
        });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(56.0);
    ui.label(RichText::new(text).size(36.0).strong().color(theme::ink()));
    ui.add_space(16.0);
}

fn hero(ui: &mut egui::Ui) {
    ui.add_space(64.0);
    ui.label(
        RichText::new(content::BRAND)
            .size(60.0)
            .strong()
            .color(theme::ink()),
    );
    ui.add_space(12.0);
    ui.label(
        RichText::new(content::HERO_TAGLINE)
            .size(20.0)
            .color(theme::ink()),
    );
    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        for link in &content::SOCIAL_LINKS {
            ui.hyperlink_to(link.name, link.url);
            ui.add_space(6.0);
        }
    });
}

fn about(ui: &mut egui::Ui) {
    section_heading(ui, "About");
    theme::card_frame().show(ui, |ui| {
        for para in content::ABOUT_PARAGRAPHS {
            ui.label(RichText::new(para).size(16.0).color(theme::ink()));
            ui.add_space(8.0);
        }
    });
}

fn how_to_buy(ui: &mut egui::Ui, narrow: bool) {
    section_heading(ui, "How to Buy");
    if narrow {
        for step in &content::BUY_STEPS {
            buy_step_card(ui, step);
            ui.add_space(12.0);
        }
    } else {
        ui.columns(4, |cols| {
            for (col, step) in cols.iter_mut().zip(&content::BUY_STEPS) {
                buy_step_card(col, step);
            }
        });
    }
}

fn buy_step_card(ui: &mut egui::Ui, step: &content::BuyStep) {
    theme::card_frame().show(ui, |ui| {
        ui.label(
            RichText::new(step.title)
                .size(18.0)
                .strong()
                .color(theme::ink()),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(step.blurb).color(theme::ink()));
    });
}

fn tokenomics(ui: &mut egui::Ui) {
    section_heading(ui, "Tokenomics");
    theme::card_frame().show(ui, |ui| {
        ui.label(RichText::new("Token Supply:").size(22.0).color(theme::ink()));
        ui.label(
            RichText::new(content::TOKEN_SUPPLY)
                .size(34.0)
                .strong()
                .color(theme::ink()),
        );
        ui.add_space(10.0);
        for line in content::TOKENOMICS_LINES {
            ui.label(RichText::new(line).color(theme::ink()));
        }
    });
}

fn roadmap(ui: &mut egui::Ui) {
    section_heading(ui, "Roadmap");
    theme::card_frame().show(ui, |ui| {
        for phase in content::ROADMAP_PHASES {
            ui.label(RichText::new(phase).size(18.0).strong().color(theme::ink()));
            ui.add_space(10.0);
        }
    });
}

fn faq_accordion(ui: &mut egui::Ui, faq: &mut FaqOpen) {
    section_heading(ui, "FAQ");
    theme::card_frame().show(ui, |ui| {
        for (i, entry) in content::FAQ_ENTRIES.iter().enumerate() {
            let open = faq.0 == Some(i);
            let header = egui::CollapsingHeader::new(
                RichText::new(entry.question).strong().color(theme::ink()),
            )
            .id_salt(("faq", i))
            .open(Some(open))
            .show(ui, |ui| {
                ui.label(RichText::new(entry.answer).color(theme::ink()));
            });
            if header.header_response.clicked() {
                faq.toggle(i);
            }
        }
    });
}

fn footer(ui: &mut egui::Ui) {
    ui.add_space(48.0);
    ui.separator();
    ui.add_space(12.0);
    ui.label(
        RichText::new(content::FOOTER_LINE)
            .size(13.0)
            .color(theme::ink()),
    );
    ui.add_space(24.0);
}

fn buy_ui(mut contexts: EguiContexts, mut next_screen: ResMut<NextState<AppScreen>>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(contexts.ctx_mut(), |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.set_max_width(560.0);
                theme::card_frame().show(ui, |ui| {
                    ui.label(
                        RichText::new(content::BUY_TITLE)
                            .size(30.0)
                            .strong()
                            .color(theme::ink()),
                    );
                    ui.label(RichText::new(content::BUY_DESCRIPTION).color(theme::ink()));
                    ui.add_space(12.0);
                    theme::notice_frame().show(ui, |ui| {
                        ui.label(
                            RichText::new(content::BUY_DISCLAIMER)
                                .strong()
                                .color(theme::notice_text()),
                        );
                        ui.add_space(6.0);
                        ui.label(RichText::new(content::BUY_SIGNOFF).color(theme::notice_text()));
                    });
                    ui.add_space(12.0);
                    if ui.button("back").clicked() {
                        next_screen.set(AppScreen::Home);
                    }
                });
            });
        });
}

fn diagnostics_ui(
    mut contexts: EguiContexts,
    settings: Res<SiteSettings>,
    diagnostics: Res<DiagnosticsStore>,
) {
    if !settings.show_diagnostics {
        return;
    }
    egui::Window::new("Diagnostics").show(contexts.ctx_mut(), |ui| {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                ui.label(format!("FPS: {:.1}", value));
            }
        }
        if let Some(entity_count) = diagnostics.get(&EntityCountDiagnosticsPlugin::ENTITY_COUNT) {
            if let Some(value) = entity_count.value() {
                ui.label(format!("Entities: {}", value));
            }
        }
    });
}
