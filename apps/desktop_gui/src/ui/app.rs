use std::time::Duration;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use storage::HospitalStore;

use crate::config::Settings;
use crate::controller::commands::QueueCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{dispatch_command, execute_command};
use crate::ui::panels::{self, queue::QueueTabState};
use crate::ui::theme::{apply_spacing, visuals_for_theme, ThemePreset};
use crate::ui::widgets::{show_notice, Notice};

const COMMAND_QUEUE_CAPACITY: usize = 64;
const WAIT_TIME_REFRESH: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Queue,
    Beds,
    Inventory,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Queue, Tab::Beds, Tab::Inventory];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Queue => "OPD Queue",
            Tab::Beds => "Bed Management",
            Tab::Inventory => "Inventory",
        }
    }
}

pub struct HospitalApp {
    cmd_tx: Sender<QueueCommand>,
    cmd_rx: Receiver<QueueCommand>,

    store: HospitalStore,
    settings: Settings,

    active_tab: Tab,
    search_query: String,
    queue_tab: QueueTabState,

    notice: Option<Notice>,
    status: String,

    theme: ThemePreset,
    applied_theme: Option<ThemePreset>,
}

impl HospitalApp {
    pub fn new(settings: Settings, store: HospitalStore) -> Self {
        let (cmd_tx, cmd_rx) = bounded::<QueueCommand>(COMMAND_QUEUE_CAPACITY);
        let status = format!("{} patients in queue", store.queue_len());
        Self {
            cmd_tx,
            cmd_rx,
            store,
            theme: settings.theme,
            settings,
            active_tab: Tab::Queue,
            search_query: String::new(),
            queue_tab: QueueTabState::default(),
            notice: None,
            status,
            applied_theme: None,
        }
    }

    fn process_commands(&mut self, now: DateTime<Utc>) {
        while let Ok(cmd) = self.cmd_rx.try_recv() {
            let event = execute_command(&mut self.store, cmd, now);
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::PatientAdded { id } => {
                self.queue_tab.form.clear();
                self.status = format!(
                    "Added patient {id}; {} in queue",
                    self.store.queue_len()
                );
                self.notice = Some(Notice::success("Patient added successfully"));
            }
            UiEvent::PatientRemoved { id } => {
                self.queue_tab.selected = None;
                self.status = format!(
                    "Removed patient {id}; {} in queue",
                    self.store.queue_len()
                );
                self.notice = Some(Notice::success("Patient removed successfully"));
            }
            UiEvent::Error(err) => {
                tracing::debug!(
                    context = ?err.context(),
                    category = ?err.category(),
                    "showing error dialog"
                );
                self.status = err.message().to_string();
                self.notice = Some(Notice::error(err.message()));
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.theme);
        apply_spacing(&mut style);
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let palette = self.theme.palette();
        egui::TopBottomPanel::top("app_header")
            .frame(
                egui::Frame::NONE
                    .fill(palette.header_fill)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&self.settings.hospital_name)
                            .size(22.0)
                            .strong()
                            .color(palette.accent),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let other = match self.theme {
                            ThemePreset::Light => ThemePreset::Dark,
                            ThemePreset::Dark => ThemePreset::Light,
                        };
                        if ui
                            .button(format!("{} theme", other.label()))
                            .clicked()
                        {
                            self.theme = other;
                        }
                        ui.add(
                            egui::TextEdit::singleline(&mut self.search_query)
                                .hint_text("Search...")
                                .desired_width(240.0),
                        );
                    });
                });
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    for tab in Tab::ALL {
                        ui.selectable_value(&mut self.active_tab, tab, tab.label());
                    }
                });
            });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        let palette = self.theme.palette();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).small().color(palette.muted_text));
        });
    }

    fn show_active_tab(&mut self, ctx: &egui::Context, now: DateTime<Utc>) {
        let palette = self.theme.palette();
        let blocked = self.notice.is_some();
        let mut command = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| match self.active_tab {
                Tab::Queue => {
                    command = panels::queue::show(
                        ui,
                        &self.store,
                        &mut self.queue_tab,
                        &self.search_query,
                        &self.settings.departments,
                        palette,
                        now,
                    );
                }
                Tab::Beds => panels::beds::show(ui, &self.store, &self.search_query, palette),
                Tab::Inventory => {
                    panels::inventory::show(ui, &self.store, &self.search_query, palette)
                }
            });
        });

        if let Some(cmd) = command {
            dispatch_command(&self.cmd_tx, cmd, &mut self.status);
            ctx.request_repaint();
        }
    }

    fn show_notice_dialog(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        if show_notice(ctx, notice, self.theme.palette()) {
            self.notice = None;
        }
    }
}

impl eframe::App for HospitalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Utc::now();
        self.process_commands(now);
        self.apply_theme_if_needed(ctx);

        self.show_header(ctx);
        self.show_status_bar(ctx);
        self.show_active_tab(ctx, now);
        self.show_notice_dialog(ctx);

        ctx.request_repaint_after(WAIT_TIME_REFRESH);
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
