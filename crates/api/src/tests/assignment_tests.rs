// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment validation workflow tests using the in-memory store.
//!
//! These tests pin the check order of the workflow: presence, then
//! duplicate, then existence, then role match, then the commit.

use crate::tests::{InMemoryStore, assign_request, shift_request, staff_request};
use crate::{
    ApiError, AssignShiftRequest, assign_shift, create_shift, create_staff, list_assignments,
};

/// Seeds the store with one staff member and one shift, returning their IDs.
fn seed(store: &mut InMemoryStore, role: &str, role_required: &str) -> (i64, i64) {
    let staff = create_staff(store, &staff_request("Alice", role, "306-555-1234"))
        .expect("staff creation should succeed");
    let shift = create_shift(store, &shift_request("2026-03-02", "09:00", role_required))
        .expect("shift creation should succeed");
    (staff.staff_id, shift.shift_id)
}

#[test]
fn test_assign_shift_succeeds_when_roles_match() {
    let mut store = InMemoryStore::new();
    let (staff_id, shift_id) = seed(&mut store, "Cook", "Cook");

    let response = assign_shift(&mut store, &assign_request(staff_id, shift_id))
        .expect("assignment should succeed");

    assert_eq!(response.message, "Shift assigned to staff member successfully");
    assert_eq!(response.assignment_id, 1);
}

#[test]
fn test_assign_shift_rejects_absent_ids() {
    let mut store = InMemoryStore::new();

    let request = AssignShiftRequest {
        staff_id: Some(1),
        shift_id: None,
    };
    let err = assign_shift(&mut store, &request).expect_err("assignment should fail");

    assert_eq!(
        err,
        ApiError::MissingFields {
            required: &["staff_id", "shift_id"],
        }
    );
}

#[test]
fn test_assign_shift_zero_id_is_present_but_unknown() {
    // Zero passes the presence check and falls out of the existence
    // lookup, since no stored row ever has ID zero.
    let mut store = InMemoryStore::new();
    let (staff_id, _) = seed(&mut store, "Cook", "Cook");

    let err = assign_shift(&mut store, &assign_request(staff_id, 0))
        .expect_err("assignment should fail");

    assert_eq!(err, ApiError::UnknownStaffOrShift);
}

#[test]
fn test_assign_request_accepts_string_ids() {
    // Browser form values serialize as strings; both forms normalize to
    // the same integer IDs.
    let request: AssignShiftRequest =
        serde_json::from_str(r#"{"staff_id":"1","shift_id":"2"}"#)
            .expect("string IDs should deserialize");
    assert_eq!(request.staff_id, Some(1));
    assert_eq!(request.shift_id, Some(2));

    let request: AssignShiftRequest = serde_json::from_str(r#"{"staff_id":1,"shift_id":2}"#)
        .expect("numeric IDs should deserialize");
    assert_eq!(request.staff_id, Some(1));
    assert_eq!(request.shift_id, Some(2));
}

#[test]
fn test_assign_request_rejects_non_numeric_string_ids() {
    let result = serde_json::from_str::<AssignShiftRequest>(r#"{"staff_id":"abc","shift_id":1}"#);

    assert!(result.is_err());
}

#[test]
fn test_assign_shift_rejects_duplicate_assignment() {
    let mut store = InMemoryStore::new();
    let (staff_id, shift_id) = seed(&mut store, "Cook", "Cook");

    assign_shift(&mut store, &assign_request(staff_id, shift_id))
        .expect("first assignment should succeed");
    let err = assign_shift(&mut store, &assign_request(staff_id, shift_id))
        .expect_err("second assignment should fail");

    assert_eq!(err, ApiError::AlreadyAssigned);
    assert_eq!(
        err.to_string(),
        "Staff member is already assigned to this shift"
    );
}

#[test]
fn test_assign_shift_rejects_unknown_staff() {
    let mut store = InMemoryStore::new();
    let (_, shift_id) = seed(&mut store, "Cook", "Cook");

    let err = assign_shift(&mut store, &assign_request(999, shift_id))
        .expect_err("assignment should fail");

    assert_eq!(err, ApiError::UnknownStaffOrShift);
    assert_eq!(err.to_string(), "Invalid staff or shift ID");
}

#[test]
fn test_assign_shift_rejects_unknown_shift() {
    let mut store = InMemoryStore::new();
    let (staff_id, _) = seed(&mut store, "Cook", "Cook");

    let err = assign_shift(&mut store, &assign_request(staff_id, 999))
        .expect_err("assignment should fail");

    assert_eq!(err, ApiError::UnknownStaffOrShift);
}

#[test]
fn test_assign_shift_rejects_role_mismatch() {
    let mut store = InMemoryStore::new();
    let (staff_id, shift_id) = seed(&mut store, "Server", "Cook");

    let err = assign_shift(&mut store, &assign_request(staff_id, shift_id))
        .expect_err("assignment should fail");

    assert_eq!(
        err,
        ApiError::RoleMismatch {
            staff_role: "Server".to_string(),
            required_role: "Cook".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Staff role does not match the required role for this shift"
    );
}

#[test]
fn test_assign_shift_role_match_is_exact_string_equality() {
    // A shift requiring a role no staff member can hold is storable but
    // never assignable.
    let mut store = InMemoryStore::new();
    let (staff_id, shift_id) = seed(&mut store, "Cook", "Astronaut");

    let err = assign_shift(&mut store, &assign_request(staff_id, shift_id))
        .expect_err("assignment should fail");

    assert!(matches!(err, ApiError::RoleMismatch { .. }));
}

#[test]
fn test_duplicate_check_runs_before_existence_check() {
    // A request that is both a duplicate and names a missing shift must
    // report the duplicate. Exercised by assigning, then checking that
    // the duplicate is reported even when the rest of the gauntlet would
    // also fail.
    let mut store = InMemoryStore::new();
    let (staff_id, shift_id) = seed(&mut store, "Server", "Cook");

    // Force the link in directly, bypassing the role-match rule.
    use rota_persistence::AssignmentStore;
    store
        .insert_assignment(staff_id, shift_id)
        .expect("direct insert should succeed");

    // The pair now exists, and the role mismatch would also reject it.
    // The duplicate check fires first.
    let err = assign_shift(&mut store, &assign_request(staff_id, shift_id))
        .expect_err("assignment should fail");
    assert_eq!(err, ApiError::AlreadyAssigned);
}

#[test]
fn test_unique_violation_on_commit_reports_duplicate() {
    // Simulates losing the race between the duplicate check and the
    // insert: the store reports a unique violation, the caller sees the
    // same duplicate error as the explicit check.
    use rota_persistence::{AssignmentStore, PersistenceError};

    let mut store = InMemoryStore::new();
    let (staff_id, shift_id) = seed(&mut store, "Cook", "Cook");

    store
        .insert_assignment(staff_id, shift_id)
        .expect("direct insert should succeed");
    let err = store
        .insert_assignment(staff_id, shift_id)
        .expect_err("duplicate insert should fail");
    assert!(matches!(err, PersistenceError::UniqueViolation(_)));

    let err = assign_shift(&mut store, &assign_request(staff_id, shift_id))
        .expect_err("assignment should fail");
    assert_eq!(err, ApiError::AlreadyAssigned);
}

#[test]
fn test_assign_shift_reports_write_failure() {
    let mut store = InMemoryStore::new();
    let (staff_id, shift_id) = seed(&mut store, "Cook", "Cook");
    store.fail_writes = true;

    let err = assign_shift(&mut store, &assign_request(staff_id, shift_id))
        .expect_err("assignment should fail");

    assert_eq!(
        err,
        ApiError::WriteFailure {
            message: "Failed to create assignment".to_string(),
        }
    );
}

#[test]
fn test_list_assignments_is_ordered_by_day_then_start_time() {
    let mut store = InMemoryStore::new();

    let staff = create_staff(&mut store, &staff_request("Alice", "Cook", "306-555-1234"))
        .expect("staff creation should succeed");

    // Created deliberately out of schedule order.
    let late = create_shift(&mut store, &shift_request("2026-03-04", "09:00", "Cook"))
        .expect("shift creation should succeed");
    let evening = create_shift(&mut store, &shift_request("2026-03-02", "17:00", "Cook"))
        .expect("shift creation should succeed");
    let morning = create_shift(&mut store, &shift_request("2026-03-02", "09:00", "Cook"))
        .expect("shift creation should succeed");

    for shift_id in [late.shift_id, evening.shift_id, morning.shift_id] {
        assign_shift(&mut store, &assign_request(staff.staff_id, shift_id))
            .expect("assignment should succeed");
    }

    let details = list_assignments(&mut store).expect("listing should succeed");
    let schedule: Vec<(&str, &str)> = details
        .iter()
        .map(|d| (d.day.as_str(), d.start_time.as_str()))
        .collect();
    assert_eq!(
        schedule,
        [
            ("2026-03-02", "09:00"),
            ("2026-03-02", "17:00"),
            ("2026-03-04", "09:00"),
        ]
    );
}
