// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment mutations.
//!
//! This module contains backend-agnostic mutations for persisting
//! staff-shift assignments. All mutations use Diesel DSL with
//! backend-specific helpers abstracted via the `PersistenceBackend` trait.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new staff-shift assignment and returns the assigned ID.
///
/// The (`staff_id`, `shift_id`) pair is protected by a unique constraint:
/// a concurrent duplicate insert surfaces as
/// [`PersistenceError::UniqueViolation`] rather than a second row. Both
/// IDs are also foreign keys, so rows referencing missing staff or shifts
/// are rejected by the database.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `staff_id` - The staff member ID
/// * `shift_id` - The shift ID
///
/// # Errors
///
/// Returns [`PersistenceError::UniqueViolation`] if the pair is already
/// assigned, or another error if the insert fails.
pub fn insert_assignment(
    conn: &mut _,
    staff_id: i64,
    shift_id: i64,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating assignment: staff_id={}, shift_id={}",
        staff_id, shift_id
    );

    diesel::insert_into(assignments::table)
        .values((
            assignments::staff_id.eq(staff_id),
            assignments::shift_id.eq(shift_id),
        ))
        .execute(conn)?;

    let assignment_id: i64 = conn.get_last_insert_rowid()?;

    info!(assignment_id, "Assignment created");

    Ok(assignment_id)
}
}
