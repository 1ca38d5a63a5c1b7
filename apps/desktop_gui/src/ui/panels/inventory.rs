use eframe::egui;
use storage::HospitalStore;

use crate::ui::theme::Palette;
use crate::ui::widgets::{column_heading, empty_state, section_header};

pub fn show(ui: &mut egui::Ui, store: &HospitalStore, query: &str, palette: Palette) {
    section_header(
        ui,
        "Inventory Management",
        Some("Current Stock Levels"),
        palette,
    );

    let items = store.search_inventory(query);
    egui::ScrollArea::vertical()
        .id_salt("inventory_table")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("inventory_grid")
                .num_columns(3)
                .striped(true)
                .min_col_width(150.0)
                .spacing(egui::vec2(24.0, 8.0))
                .show(ui, |ui| {
                    for heading in ["Item", "Current Stock", "Unit"] {
                        column_heading(ui, heading, palette);
                    }
                    ui.end_row();

                    for item in &items {
                        ui.label(item.name.as_str());
                        ui.label(item.stock.to_string());
                        ui.label(item.unit.as_str());
                        ui.end_row();
                    }
                });

            if items.is_empty() {
                empty_state(ui, "No inventory items match the search", palette);
            }
        });
}
