use eframe::egui;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    Light,
    Dark,
}

impl ThemePreset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Light => "Light",
            ThemePreset::Dark => "Dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemePreset::Light => Palette {
                accent: egui::Color32::from_rgb(37, 99, 235),
                muted_text: egui::Color32::from_rgb(107, 114, 128),
                critical: egui::Color32::from_rgb(220, 38, 38),
                success: egui::Color32::from_rgb(22, 163, 74),
                card_fill: egui::Color32::WHITE,
                header_fill: egui::Color32::from_rgb(249, 250, 251),
            },
            ThemePreset::Dark => Palette {
                accent: egui::Color32::from_rgb(96, 165, 250),
                muted_text: egui::Color32::from_rgb(156, 163, 175),
                critical: egui::Color32::from_rgb(248, 113, 113),
                success: egui::Color32::from_rgb(74, 222, 128),
                card_fill: egui::Color32::from_rgb(31, 41, 55),
                header_fill: egui::Color32::from_rgb(17, 24, 39),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub accent: egui::Color32,
    pub muted_text: egui::Color32,
    pub critical: egui::Color32,
    pub success: egui::Color32,
    pub card_fill: egui::Color32,
    pub header_fill: egui::Color32,
}

pub fn visuals_for_theme(theme: ThemePreset) -> egui::Visuals {
    let palette = theme.palette();
    let mut visuals = match theme {
        ThemePreset::Light => egui::Visuals::light(),
        ThemePreset::Dark => egui::Visuals::dark(),
    };
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
    visuals.selection.stroke = egui::Stroke::new(1.0, palette.accent);
    visuals.hyperlink_color = palette.accent;
    visuals
}

pub fn apply_spacing(style: &mut egui::Style) {
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 26.0);
}
