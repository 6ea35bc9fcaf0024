use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ProgramType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownChipType,
    MalformedChip,
    MalformedProgram,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChipError {
    #[error("unknown chip type '{name}' for {program} program")]
    UnknownChipType { name: String, program: ProgramType },
    #[error("malformed chip: {reason}")]
    MalformedChip { reason: String },
    #[error("malformed program: {reason}")]
    MalformedProgram { reason: String },
}

impl ChipError {
    pub fn unknown_type(name: impl Into<String>, program: ProgramType) -> Self {
        Self::UnknownChipType {
            name: name.into(),
            program,
        }
    }

    pub fn malformed_chip(reason: impl Into<String>) -> Self {
        Self::MalformedChip {
            reason: reason.into(),
        }
    }

    pub fn malformed_program(reason: impl Into<String>) -> Self {
        Self::MalformedProgram {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ChipError::UnknownChipType { .. } => ErrorCode::UnknownChipType,
            ChipError::MalformedChip { .. } => ErrorCode::MalformedChip,
            ChipError::MalformedProgram { .. } => ErrorCode::MalformedProgram,
        }
    }
}

/// Wire form of a [`ChipError`] handed to presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl From<ChipError> for ApiError {
    fn from(value: ChipError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}
