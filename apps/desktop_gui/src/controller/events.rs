//! Command outcomes and user-facing error modeling for the desktop controller.

use shared::{
    domain::PatientId,
    error::{ErrorCode, RegistryError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    PatientAdded { id: PatientId },
    PatientRemoved { id: PatientId },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Selection,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    AddPatient,
    RemovePatient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn no_selection() -> Self {
        Self {
            category: UiErrorCategory::Selection,
            context: UiErrorContext::RemovePatient,
            message: "Please select a patient to remove".to_string(),
        }
    }

    pub fn from_registry(context: UiErrorContext, err: &RegistryError) -> Self {
        let (category, message) = match (err.code(), err) {
            (_, RegistryError::PatientNotFound(id)) => (
                UiErrorCategory::NotFound,
                format!("Patient {id} is no longer in the queue"),
            ),
            (ErrorCode::Validation, _) if context == UiErrorContext::AddPatient => (
                UiErrorCategory::Validation,
                "Please fill in all fields".to_string(),
            ),
            (ErrorCode::Validation, _) => (UiErrorCategory::Validation, err.to_string()),
            (ErrorCode::NotFound, _) => (UiErrorCategory::NotFound, err.to_string()),
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
