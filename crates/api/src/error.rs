// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Every variant carries enough structure for the transport layer to
//! select a status code and build a response body without inspecting
//! message text. The `Display` impl produces the canonical user-facing
//! message for each failure.

use rota_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent
/// the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or more required request fields were absent or empty.
    MissingFields {
        /// The full set of fields the operation requires.
        required: &'static [&'static str],
    },
    /// The submitted role is not a member of the fixed role set.
    InvalidRole {
        /// The role string that was rejected.
        role: String,
    },
    /// The submitted phone number does not match the required format.
    InvalidPhone {
        /// The phone string that was rejected.
        phone: String,
    },
    /// The staff member is already assigned to the shift.
    AlreadyAssigned,
    /// The referenced staff member or shift does not exist.
    UnknownStaffOrShift,
    /// The staff member's role does not match the shift's required role.
    RoleMismatch {
        /// The staff member's actual role.
        staff_role: String,
        /// The role the shift requires.
        required_role: String,
    },
    /// A write to the store failed.
    WriteFailure {
        /// The canonical user-facing message for the failed write.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields { .. } => write!(f, "Missing required fields"),
            Self::InvalidRole { .. } => {
                write!(f, "Invalid role. Must be one of: Cook, Server, Manager")
            }
            Self::InvalidPhone { .. } => {
                write!(f, "Invalid phone format. Must be in format 306-555-1234")
            }
            Self::AlreadyAssigned => {
                write!(f, "Staff member is already assigned to this shift")
            }
            Self::UnknownStaffOrShift => write!(f, "Invalid staff or shift ID"),
            Self::RoleMismatch { .. } => {
                write!(
                    f,
                    "Staff role does not match the required role for this shift"
                )
            }
            Self::WriteFailure { message } | Self::Internal { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            // A unique violation on the assignment pair means a concurrent
            // request committed the same link first.
            PersistenceError::UniqueViolation(_) => Self::AlreadyAssigned,
            _ => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}
