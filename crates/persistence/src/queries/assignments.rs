// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment queries.
//!
//! This module contains backend-agnostic queries for assignment rows and
//! the joined schedule view. All queries use Diesel DSL and work across
//! all supported database backends.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use rota_domain::AssignmentDetail;

use crate::diesel_schema::{assignments, shifts, staff};
use crate::error::PersistenceError;

/// Type alias for a joined assignment row.
///
/// Column order: assignment ID, staff ID, staff name, staff role,
/// shift ID, day, start time, end time, role required.
type AssignmentDetailRow = (i64, i64, String, String, i64, String, String, String, String);

backend_fn! {
/// Checks whether a staff member is already assigned to a shift.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `staff_id` - The staff member ID
/// * `shift_id` - The shift ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn assignment_exists(
    conn: &mut _,
    staff_id: i64,
    shift_id: i64,
) -> Result<bool, PersistenceError> {
    debug!(
        "Checking for existing assignment: staff_id={}, shift_id={}",
        staff_id, shift_id
    );

    let existing: Option<i64> = assignments::table
        .filter(assignments::staff_id.eq(staff_id))
        .filter(assignments::shift_id.eq(shift_id))
        .select(assignments::assignment_id)
        .first(conn)
        .optional()?;

    Ok(existing.is_some())
}
}

backend_fn! {
/// Retrieves the full joined schedule view.
///
/// Each row recombines the staff member's name and role with the shift's
/// schedule fields. Rows are ordered by day ascending, then start time
/// ascending, which is the schedule display contract.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_assignment_details(
    conn: &mut _,
) -> Result<Vec<AssignmentDetail>, PersistenceError> {
    debug!("Listing joined assignment details");

    let rows: Vec<AssignmentDetailRow> = assignments::table
        .inner_join(staff::table)
        .inner_join(shifts::table)
        .select((
            assignments::assignment_id,
            staff::staff_id,
            staff::name,
            staff::role,
            shifts::shift_id,
            shifts::day,
            shifts::start_time,
            shifts::end_time,
            shifts::role_required,
        ))
        .order((shifts::day.asc(), shifts::start_time.asc()))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(
                assignment_id,
                staff_id,
                staff_name,
                staff_role,
                shift_id,
                day,
                start_time,
                end_time,
                role_required,
            )| AssignmentDetail {
                assignment_id,
                staff_id,
                staff_name,
                staff_role,
                shift_id,
                day,
                start_time,
                end_time,
                role_required,
            },
        )
        .collect())
}
}
