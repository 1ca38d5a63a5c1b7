use chrono::{DateTime, Utc};
use eframe::egui;
use shared::domain::{Patient, PatientId};
use storage::HospitalStore;

use crate::controller::commands::QueueCommand;
use crate::ui::theme::Palette;
use crate::ui::widgets::{card_frame, column_heading, empty_state, section_header};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub name: String,
    pub department: String,
}

impl PatientForm {
    pub fn clear(&mut self) {
        self.name.clear();
        self.department.clear();
    }

    fn to_command(&self) -> QueueCommand {
        QueueCommand::AddPatient {
            name: self.name.clone(),
            department: self.department.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueueTabState {
    pub form: PatientForm,
    pub selected: Option<PatientId>,
}

/// Drops a selection the current filter hides, so only a visible row can be removed.
pub fn reconcile_selection(selected: Option<PatientId>, visible: &[&Patient]) -> Option<PatientId> {
    selected.filter(|id| visible.iter().any(|patient| patient.id == *id))
}

pub fn waiting_label(count: usize) -> String {
    match count {
        1 => "1 patient waiting".to_string(),
        n => format!("{n} patients waiting"),
    }
}

pub fn show(
    ui: &mut egui::Ui,
    store: &HospitalStore,
    state: &mut QueueTabState,
    query: &str,
    departments: &[String],
    palette: Palette,
    now: DateTime<Utc>,
) -> Option<QueueCommand> {
    let mut command = None;

    section_header(
        ui,
        "Current Queue Status",
        Some(&waiting_label(store.queue_len())),
        palette,
    );

    card_frame(ui, palette).show(ui, |ui| {
        ui.label(egui::RichText::new("Add New Patient").strong());
        egui::Grid::new("add_patient_form")
            .num_columns(2)
            .spacing(egui::vec2(10.0, 6.0))
            .show(ui, |ui| {
                ui.label("Patient Name:");
                let name_response = ui.add(
                    egui::TextEdit::singleline(&mut state.form.name)
                        .hint_text("Full name")
                        .desired_width(240.0),
                );
                ui.end_row();

                ui.label("Department:");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.form.department)
                            .hint_text("Department")
                            .desired_width(240.0),
                    );
                    egui::ComboBox::from_id_salt("department_picker")
                        .selected_text("Pick")
                        .show_ui(ui, |ui| {
                            for department in departments {
                                let current = state.form.department == *department;
                                if ui.selectable_label(current, department.as_str()).clicked() {
                                    state.form.department = department.clone();
                                }
                            }
                        });
                });
                ui.end_row();

                let submitted_with_enter = name_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if submitted_with_enter {
                    command = Some(state.form.to_command());
                }
            });

        ui.add_space(4.0);
        if ui.button("Add Patient").clicked() {
            command = Some(state.form.to_command());
        }
    });

    ui.add_space(10.0);

    let visible = store.search_patients(query);
    state.selected = reconcile_selection(state.selected, &visible);

    let table_height = (ui.available_height() - 48.0).max(120.0);
    egui::ScrollArea::vertical()
        .id_salt("queue_table")
        .max_height(table_height)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("queue_grid")
                .num_columns(4)
                .striped(true)
                .min_col_width(120.0)
                .spacing(egui::vec2(24.0, 8.0))
                .show(ui, |ui| {
                    for heading in ["ID", "Patient Name", "Department", "Wait Time"] {
                        column_heading(ui, heading, palette);
                    }
                    ui.end_row();

                    for patient in &visible {
                        let is_selected = state.selected == Some(patient.id);
                        let cells = [
                            patient.id.0.to_string(),
                            patient.name.clone(),
                            patient.department.clone(),
                            patient.wait_label(now),
                        ];
                        for cell in cells {
                            if ui.selectable_label(is_selected, cell).clicked() {
                                state.selected = Some(patient.id);
                            }
                        }
                        ui.end_row();
                    }
                });

            if visible.is_empty() {
                let text = if store.queue_len() == 0 {
                    "No patients waiting"
                } else {
                    "No patients match the search"
                };
                empty_state(ui, text, palette);
            }
        });

    ui.add_space(6.0);
    if ui.button("Remove Selected Patient").clicked() {
        command = Some(QueueCommand::RemovePatient {
            selected: state.selected,
        });
    }

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: i64) -> Patient {
        Patient {
            id: PatientId(id),
            name: format!("Patient {id}"),
            department: "ENT".to_string(),
            checked_in_at: Utc::now(),
        }
    }

    #[test]
    fn selection_survives_only_while_visible() {
        let first = patient(1);
        let second = patient(2);
        let visible = vec![&first, &second];

        assert_eq!(
            reconcile_selection(Some(PatientId(2)), &visible),
            Some(PatientId(2))
        );
        assert_eq!(reconcile_selection(Some(PatientId(9)), &visible), None);
        assert_eq!(reconcile_selection(None, &visible), None);
        assert_eq!(reconcile_selection(Some(PatientId(1)), &[]), None);
    }

    #[test]
    fn waiting_label_pluralizes() {
        assert_eq!(waiting_label(0), "0 patients waiting");
        assert_eq!(waiting_label(1), "1 patient waiting");
        assert_eq!(waiting_label(3), "3 patients waiting");
    }

    #[test]
    fn form_builds_add_command_from_raw_input() {
        let mut form = PatientForm {
            name: " Ada ".to_string(),
            department: "ENT".to_string(),
        };
        assert_eq!(
            form.to_command(),
            QueueCommand::AddPatient {
                name: " Ada ".to_string(),
                department: "ENT".to_string(),
            }
        );
        form.clear();
        assert_eq!(form, PatientForm::default());
    }
}
