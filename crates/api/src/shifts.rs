// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift creation and listing workflows.
//!
//! Shift creation is deliberately permissive: beyond field presence, no
//! date-format, time-ordering, or role validation is performed. The
//! `role_required` field is free text and may name a role no staff
//! member can hold; such shifts are storable but unassignable through
//! the role-match rule.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use rota_domain::Shift;
use rota_persistence::ShiftStore;

use crate::error::ApiError;

/// Fields required to create a shift.
const REQUIRED_FIELDS: &[&str] = &["day", "start_time", "end_time", "role_required"];

/// Request payload for creating a shift.
///
/// All fields are optional at the deserialization boundary so the
/// workflow can report the full required set when any are absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShiftRequest {
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub role_required: Option<String>,
}

/// Response payload for a successful shift creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateShiftResponse {
    pub message: String,
    pub shift_id: i64,
}

/// Creates a new shift.
///
/// # Arguments
///
/// * `store` - The shift store
/// * `request` - The creation request
///
/// # Errors
///
/// Returns an error if a required field is absent or empty, or the
/// store write fails.
pub fn create_shift<S: ShiftStore>(
    store: &mut S,
    request: &CreateShiftRequest,
) -> Result<CreateShiftResponse, ApiError> {
    let day: &str = non_empty(request.day.as_deref())?;
    let start_time: &str = non_empty(request.start_time.as_deref())?;
    let end_time: &str = non_empty(request.end_time.as_deref())?;
    let role_required: &str = non_empty(request.role_required.as_deref())?;

    let shift = Shift::new(
        day.to_string(),
        start_time.to_string(),
        end_time.to_string(),
        role_required.to_string(),
    );
    let shift_id: i64 = store.insert_shift(&shift).map_err(|e| {
        warn!("Shift insert failed: {}", e);
        ApiError::WriteFailure {
            message: "Failed to create shift".to_string(),
        }
    })?;

    info!(shift_id, "Shift created");

    Ok(CreateShiftResponse {
        message: "Shift created successfully".to_string(),
        shift_id,
    })
}

/// Retrieves all shifts in insertion order.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_shifts<S: ShiftStore>(store: &mut S) -> Result<Vec<Shift>, ApiError> {
    store.list_shifts().map_err(|e| ApiError::Internal {
        message: e.to_string(),
    })
}

/// Returns the field value if present and non-empty.
fn non_empty(value: Option<&str>) -> Result<&str, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingFields {
            required: REQUIRED_FIELDS,
        }),
    }
}
