//! Command orchestration from UI actions through the command queue to the store.

use chrono::{DateTime, Utc};
use crossbeam_channel::{Sender, TrySendError};
use storage::HospitalStore;

use crate::controller::commands::QueueCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn dispatch_command(cmd_tx: &Sender<QueueCommand>, cmd: QueueCommand, status: &mut String) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui command queue full");
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui command queue disconnected");
            *status = "Command processor disconnected; restart the application".to_string();
        }
    }
}

pub fn execute_command(store: &mut HospitalStore, cmd: QueueCommand, now: DateTime<Utc>) -> UiEvent {
    match cmd {
        QueueCommand::AddPatient { name, department } => {
            match store.add_patient(&name, &department, now) {
                Ok(id) => UiEvent::PatientAdded { id },
                Err(err) => {
                    tracing::warn!(%err, "add patient rejected");
                    UiEvent::Error(UiError::from_registry(UiErrorContext::AddPatient, &err))
                }
            }
        }
        QueueCommand::RemovePatient { selected: None } => {
            tracing::warn!("remove patient requested without a selection");
            UiEvent::Error(UiError::no_selection())
        }
        QueueCommand::RemovePatient { selected: Some(id) } => match store.remove_patient(id) {
            Ok(removed) => UiEvent::PatientRemoved { id: removed.id },
            Err(err) => {
                tracing::warn!(%err, "remove patient rejected");
                UiEvent::Error(UiError::from_registry(UiErrorContext::RemovePatient, &err))
            }
        },
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
