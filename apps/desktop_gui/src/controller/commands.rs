//! Queue commands issued by the UI and applied at the start of the next frame.

use shared::domain::PatientId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueCommand {
    AddPatient {
        name: String,
        department: String,
    },
    RemovePatient {
        selected: Option<PatientId>,
    },
}

impl QueueCommand {
    pub fn name(&self) -> &'static str {
        match self {
            QueueCommand::AddPatient { .. } => "add_patient",
            QueueCommand::RemovePatient { .. } => "remove_patient",
        }
    }
}
