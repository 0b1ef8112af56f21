// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff creation and listing workflows.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use rota_domain::{Role, StaffMember, validate_phone_number, validate_role};
use rota_persistence::StaffStore;

use crate::error::ApiError;

/// Fields required to create a staff member.
const REQUIRED_FIELDS: &[&str] = &["name", "role", "phone"];

/// Request payload for creating a staff member.
///
/// All fields are optional at the deserialization boundary so the
/// workflow can report the full required set when any are absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaffRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// Response payload for a successful staff creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateStaffResponse {
    pub message: String,
    pub staff_id: i64,
}

/// Creates a new staff member.
///
/// Validation order is part of the API contract: field presence first,
/// then role membership, then phone format. Whitespace in the name and
/// phone is preserved verbatim, so `" Cook"` fails role validation and
/// a padded phone number fails format validation.
///
/// # Arguments
///
/// * `store` - The staff store
/// * `request` - The creation request
///
/// # Errors
///
/// Returns an error if a required field is absent or empty, the role or
/// phone is invalid, or the store write fails.
pub fn create_staff<S: StaffStore>(
    store: &mut S,
    request: &CreateStaffRequest,
) -> Result<CreateStaffResponse, ApiError> {
    let name: &str = non_empty(request.name.as_deref())?;
    let role_str: &str = non_empty(request.role.as_deref())?;
    let phone: &str = non_empty(request.phone.as_deref())?;

    if !validate_role(role_str) {
        warn!("Rejected staff creation with invalid role: {}", role_str);
        return Err(ApiError::InvalidRole {
            role: role_str.to_string(),
        });
    }

    if !validate_phone_number(phone) {
        warn!("Rejected staff creation with invalid phone format");
        return Err(ApiError::InvalidPhone {
            phone: phone.to_string(),
        });
    }

    // Role membership was just checked, so this parse cannot fail.
    let role: Role = Role::parse(role_str).map_err(|e| ApiError::Internal {
        message: e.to_string(),
    })?;

    let member = StaffMember::new(name.to_string(), role, phone.to_string());
    let staff_id: i64 = store.insert_staff(&member).map_err(|e| {
        warn!("Staff insert failed: {}", e);
        ApiError::WriteFailure {
            message: "Failed to create staff member".to_string(),
        }
    })?;

    info!(staff_id, "Staff member created");

    Ok(CreateStaffResponse {
        message: "Staff member created successfully".to_string(),
        staff_id,
    })
}

/// Retrieves all staff members in insertion order.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_staff<S: StaffStore>(store: &mut S) -> Result<Vec<StaffMember>, ApiError> {
    store.list_staff().map_err(|e| ApiError::Internal {
        message: e.to_string(),
    })
}

/// Returns the field value if present and non-empty.
///
/// Absent and empty-string fields are equivalent: both produce the
/// missing-fields error naming the full required set.
fn non_empty(value: Option<&str>) -> Result<&str, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingFields {
            required: REQUIRED_FIELDS,
        }),
    }
}
