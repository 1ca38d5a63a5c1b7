use eframe::egui;

use crate::ui::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Success,
    Error,
}

impl NoticeSeverity {
    pub fn title(self) -> &'static str {
        match self {
            NoticeSeverity::Success => "Success",
            NoticeSeverity::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            message: message.into(),
        }
    }
}

/// Centered dialog with a single OK button. Returns `true` once dismissed.
pub fn show_notice(ctx: &egui::Context, notice: &Notice, palette: Palette) -> bool {
    let mut dismissed = false;
    let color = match notice.severity {
        NoticeSeverity::Success => palette.success,
        NoticeSeverity::Error => palette.critical,
    };

    egui::Window::new(notice.severity.title())
        .id(egui::Id::new("notice_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.label(egui::RichText::new(&notice.message).color(color));
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        dismissed = true;
    }
    dismissed
}

pub fn section_header(ui: &mut egui::Ui, title: &str, trailing: Option<&str>, palette: Palette) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(title).size(20.0).strong());
        if let Some(trailing) = trailing {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(trailing).color(palette.muted_text));
            });
        }
    });
    ui.add_space(6.0);
}

pub fn column_heading(ui: &mut egui::Ui, text: &str, palette: Palette) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .small()
            .strong()
            .color(palette.muted_text),
    );
}

pub fn card_frame(ui: &egui::Ui, palette: Palette) -> egui::Frame {
    egui::Frame::group(ui.style())
        .fill(palette.card_fill)
        .corner_radius(8)
        .inner_margin(egui::Margin::same(12))
}

pub fn empty_state(ui: &mut egui::Ui, text: &str, palette: Palette) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).italics().color(palette.muted_text));
    });
}
