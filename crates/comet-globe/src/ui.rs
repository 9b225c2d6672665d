//! egui overlay: status line, detail panel and filter panel.

use crate::{
    filter::{FilterPanel, SLIDER_RANGE},
    presenter::HudPresenter,
};
use egui::{Align2, Color32, RichText};

/// Caption of the button that rebuilds markers from the current bounds.
pub const APPLY_LABEL: &str = "filter application";

/// Draws the status line and, when a marker is selected, its detail panel.
pub fn draw_hud(ctx: &egui::Context, hud: &HudPresenter) {
    egui::Area::new(egui::Id::new("status"))
        .anchor(Align2::CENTER_TOP, [0.0, 10.0])
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(RichText::new(hud.status()).color(Color32::WHITE));
        });

    if let Some(details) = hud.details() {
        egui::Window::new("details")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(Align2::LEFT_BOTTOM, [10.0, -10.0])
            .show(ctx, |ui| {
                ui.heading(details.heading());
                for line in details.body_lines() {
                    ui.label(line);
                }
            });
    }
}

/// Draws the altitude filter panel. Returns `true` when the apply button was
/// pressed this frame.
pub fn draw_filter_panel(ctx: &egui::Context, filter: &mut FilterPanel, marker_count: usize) -> bool {
    let mut apply = false;

    egui::Window::new("Filters")
        .anchor(Align2::RIGHT_TOP, [-10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.add(
                egui::Slider::new(&mut filter.min_altitude, SLIDER_RANGE)
                    .text("Minimum altitude (km)"),
            );
            ui.add(
                egui::Slider::new(&mut filter.max_altitude, SLIDER_RANGE)
                    .text("Maximum altitude (km)"),
            );

            apply = ui.button(APPLY_LABEL).clicked();

            ui.separator();
            ui.label(format!("Markers: {}", marker_count));
        });

    apply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::Presenter;
    use neo_catalog::{Details, Record};

    #[test]
    fn idle_frame_does_not_apply() {
        let ctx = egui::Context::default();
        let mut panel = FilterPanel::default();
        let mut applied = true;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            applied = draw_filter_panel(ctx, &mut panel, 3);
        });

        assert!(!applied);
        assert_eq!(panel.min_altitude, 0.0);
        assert_eq!(panel.max_altitude, 100_000.0);
    }

    #[test]
    fn hud_draws_with_and_without_details() {
        let ctx = egui::Context::default();
        let mut hud = HudPresenter::default();
        hud.show_status("Loaded 1 Near-Earth comets");

        let _ = ctx.run(egui::RawInput::default(), |ctx| draw_hud(ctx, &hud));

        hud.show_details(&Details::from_record(&Record::default()));
        let _ = ctx.run(egui::RawInput::default(), |ctx| draw_hud(ctx, &hud));
        assert!(hud.details().is_some());
    }
}
