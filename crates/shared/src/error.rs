use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PatientId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
    #[error("patient {0} is not in the queue")]
    PatientNotFound(PatientId),
    #[error("{ward} ward reports {available} available beds but only has {total}")]
    BedsExceedCapacity {
        ward: String,
        total: u32,
        available: u32,
    },
}

impl RegistryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::BlankField { .. } | RegistryError::BedsExceedCapacity { .. } => {
                ErrorCode::Validation
            }
            RegistryError::PatientNotFound(_) => ErrorCode::NotFound,
        }
    }
}
