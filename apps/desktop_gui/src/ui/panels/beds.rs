use eframe::egui;
use shared::domain::Ward;
use storage::HospitalStore;

use crate::ui::theme::Palette;
use crate::ui::widgets::{card_frame, empty_state, section_header};

const CARD_COLUMNS: usize = 2;

pub fn show(ui: &mut egui::Ui, store: &HospitalStore, query: &str, palette: Palette) {
    let summary = store.bed_summary();
    let trailing = format!(
        "{} of {} beds available",
        summary.available, summary.total
    );
    section_header(ui, "Bed Availability", Some(&trailing), palette);

    let wards = store.search_wards(query);
    if wards.is_empty() {
        empty_state(ui, "No wards match the search", palette);
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("ward_cards")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for row in wards.chunks(CARD_COLUMNS) {
                ui.columns(CARD_COLUMNS, |columns| {
                    for (column, ward) in columns.iter_mut().zip(row) {
                        ward_card(column, ward, palette);
                    }
                });
                ui.add_space(8.0);
            }
        });
}

fn ward_card(ui: &mut egui::Ui, ward: &Ward, palette: Palette) {
    card_frame(ui, palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{} Ward", ward.name()))
                    .size(16.0)
                    .strong(),
            );
            if ward.is_critical() {
                ui.label(
                    egui::RichText::new("LOW")
                        .small()
                        .strong()
                        .color(palette.critical),
                );
            }
        });

        let available_color = if ward.is_critical() {
            palette.critical
        } else {
            palette.accent
        };
        ui.label(
            egui::RichText::new(format!("Available: {}", ward.available()))
                .size(14.0)
                .color(available_color),
        );
        ui.label(egui::RichText::new(format!("Total: {}", ward.total())).size(14.0));
        ui.add(
            egui::ProgressBar::new(ward.occupancy_ratio())
                .text(format!("{} occupied", ward.occupied())),
        );
    });
}
