//! Page palette and shared widget frames. One source of truth for the
//! yellow-on-black look of the original site.

use bevy::prelude::*;
use bevy_egui::egui::{self, Color32, Margin, Rounding, Stroke};

/// Page background, the tailwind `yellow-400` of the original.
pub fn page_fill() -> Color {
    Color::srgb(0.980, 0.800, 0.082)
}

/// Constant translucent ink tint shared by every particle.
pub fn particle_tint() -> Color {
    Color::srgba(0.05, 0.04, 0.0, 0.18)
}

/// Header bar fill, `yellow-400` at 90% opacity.
pub fn header_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(250, 204, 21, 230)
}

/// Card fill, white at 80% opacity.
pub fn card_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 204)
}

pub fn ink() -> Color32 {
    Color32::BLACK
}

/// Accent text on ink-filled buttons, matching the page yellow.
pub fn canary() -> Color32 {
    Color32::from_rgb(250, 204, 21)
}

pub fn notice_fill() -> Color32 {
    Color32::from_rgb(254, 252, 232)
}

pub fn notice_border() -> Color32 {
    Color32::from_rgb(254, 240, 138)
}

pub fn notice_text() -> Color32 {
    Color32::from_rgb(133, 77, 14)
}

pub fn header_frame() -> egui::Frame {
    egui::Frame {
        fill: header_fill(),
        inner_margin: Margin::symmetric(16.0, 10.0),
        ..Default::default()
    }
}

pub fn card_frame() -> egui::Frame {
    egui::Frame {
        fill: card_fill(),
        rounding: Rounding::same(18.0),
        inner_margin: Margin::same(20.0),
        ..Default::default()
    }
}

/// Bordered disclaimer block on the buy screen.
pub fn notice_frame() -> egui::Frame {
    egui::Frame {
        fill: notice_fill(),
        stroke: Stroke::new(1.0, notice_border()),
        rounding: Rounding::same(10.0),
        inner_margin: Margin::same(14.0),
        ..Default::default()
    }
}
