// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff member queries.
//!
//! This module contains backend-agnostic queries for retrieving staff
//! members. All queries use Diesel DSL and work across all supported
//! database backends.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use rota_domain::{Role, StaffMember};

use crate::diesel_schema::staff;
use crate::error::PersistenceError;

/// Diesel Queryable struct for staff rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = staff)]
struct StaffRow {
    staff_id: i64,
    name: String,
    role: String,
    phone: String,
}

impl StaffRow {
    /// Converts a stored row into a domain staff member.
    ///
    /// The role column is constrained at write time, so a row that fails to
    /// parse indicates storage written outside this crate.
    fn into_domain(self) -> Result<StaffMember, PersistenceError> {
        let role: Role = Role::parse(&self.role).map_err(|e| {
            PersistenceError::DatabaseError(format!("Stored staff role is invalid: {e}"))
        })?;
        Ok(StaffMember::with_id(
            self.staff_id,
            self.name,
            role,
            self.phone,
        ))
    }
}

backend_fn! {
/// Retrieves all staff members in insertion order.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_staff(conn: &mut _) -> Result<Vec<StaffMember>, PersistenceError> {
    debug!("Listing all staff members");

    let rows: Vec<StaffRow> = staff::table
        .order(staff::staff_id.asc())
        .select(StaffRow::as_select())
        .load(conn)?;

    rows.into_iter().map(StaffRow::into_domain).collect()
}
}

backend_fn! {
/// Retrieves a staff member by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `staff_id` - The staff member ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the staff member is not found.
pub fn get_staff_by_id(
    conn: &mut _,
    staff_id: i64,
) -> Result<Option<StaffMember>, PersistenceError> {
    debug!("Looking up staff member by ID: {}", staff_id);

    let row: Option<StaffRow> = staff::table
        .filter(staff::staff_id.eq(staff_id))
        .select(StaffRow::as_select())
        .first(conn)
        .optional()?;

    row.map(StaffRow::into_domain).transpose()
}
}
