// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The assignment validation workflow.
//!
//! Assigning a staff member to a shift runs a fixed gauntlet of checks,
//! in order: field presence, duplicate assignment, staff and shift
//! existence, then role match. The order is part of the API contract —
//! a request naming a nonexistent staff member AND duplicating an
//! existing assignment reports the duplicate, because the duplicate
//! check runs first.
//!
//! The store's unique constraint on the assignment pair backs up the
//! duplicate check: two concurrent requests that both pass the check
//! cannot both commit, the loser surfaces as a unique violation and is
//! reported as a duplicate.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use rota_domain::{AssignmentDetail, Shift, StaffMember};
use rota_persistence::{AssignmentStore, PersistenceError, ShiftStore, StaffStore};

use crate::error::ApiError;

/// Fields required to create an assignment.
const REQUIRED_FIELDS: &[&str] = &["staff_id", "shift_id"];

/// Request payload for assigning a staff member to a shift.
///
/// Both fields are optional at the deserialization boundary so the
/// workflow can report the full required set when either is absent.
/// IDs arrive as JSON numbers or as numeric strings (HTML form values
/// serialize as strings); both are normalized to integers.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignShiftRequest {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub staff_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub shift_id: Option<i64>,
}

/// Deserializes an ID from either a JSON number or a numeric string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Number(i64),
        Text(String),
    }

    match Option::<IdValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdValue::Number(id)) => Ok(Some(id)),
        Some(IdValue::Text(text)) => text.trim().parse::<i64>().map(Some).map_err(|_| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&text),
                &"an integer identifier",
            )
        }),
    }
}

/// Response payload for a successful assignment.
#[derive(Debug, Clone, Serialize)]
pub struct AssignShiftResponse {
    pub message: String,
    pub assignment_id: i64,
}

/// Assigns a staff member to a shift.
///
/// # Arguments
///
/// * `store` - The backing store
/// * `request` - The assignment request
///
/// # Errors
///
/// In check order:
///
/// - [`ApiError::MissingFields`] if either ID is absent
/// - [`ApiError::AlreadyAssigned`] if the pair is already linked
/// - [`ApiError::UnknownStaffOrShift`] if either ID resolves to nothing
/// - [`ApiError::RoleMismatch`] if the staff member's role differs from
///   the shift's required role
/// - [`ApiError::WriteFailure`] if the final insert fails
pub fn assign_shift<S>(
    store: &mut S,
    request: &AssignShiftRequest,
) -> Result<AssignShiftResponse, ApiError>
where
    S: AssignmentStore + StaffStore + ShiftStore,
{
    let staff_id: i64 = present_id(request.staff_id)?;
    let shift_id: i64 = present_id(request.shift_id)?;

    if store.assignment_exists(staff_id, shift_id)? {
        warn!(
            staff_id,
            shift_id, "Rejected duplicate assignment of staff member to shift"
        );
        return Err(ApiError::AlreadyAssigned);
    }

    // Existence failures are deliberately indistinguishable: the caller
    // learns only that one of the two IDs was invalid.
    let staff: StaffMember = store
        .get_staff(staff_id)?
        .ok_or(ApiError::UnknownStaffOrShift)?;
    let shift: Shift = store
        .get_shift(shift_id)?
        .ok_or(ApiError::UnknownStaffOrShift)?;

    if staff.role.as_str() != shift.role_required {
        warn!(
            staff_id,
            shift_id,
            "Rejected assignment with role mismatch: staff={}, required={}",
            staff.role.as_str(),
            shift.role_required
        );
        return Err(ApiError::RoleMismatch {
            staff_role: staff.role.as_str().to_string(),
            required_role: shift.role_required,
        });
    }

    let assignment_id: i64 = match store.insert_assignment(staff_id, shift_id) {
        Ok(id) => id,
        // A concurrent request won the race between the duplicate check
        // and this insert.
        Err(PersistenceError::UniqueViolation(_)) => return Err(ApiError::AlreadyAssigned),
        Err(e) => {
            warn!("Assignment insert failed: {}", e);
            return Err(ApiError::WriteFailure {
                message: "Failed to create assignment".to_string(),
            });
        }
    };

    info!(assignment_id, staff_id, shift_id, "Assignment created");

    Ok(AssignShiftResponse {
        message: "Shift assigned to staff member successfully".to_string(),
        assignment_id,
    })
}

/// Retrieves the joined schedule view, ordered by day ascending then
/// start time ascending.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_assignments<S: AssignmentStore>(
    store: &mut S,
) -> Result<Vec<AssignmentDetail>, ApiError> {
    store.list_assignment_details().map_err(|e| ApiError::Internal {
        message: e.to_string(),
    })
}

/// Returns the ID if present.
///
/// Presence is all that matters here: an ID of zero never resolves to a
/// stored row, so it falls out of the existence check as
/// [`ApiError::UnknownStaffOrShift`] rather than being rejected up front.
fn present_id(value: Option<i64>) -> Result<i64, ApiError> {
    value.ok_or(ApiError::MissingFields {
        required: REQUIRED_FIELDS,
    })
}
