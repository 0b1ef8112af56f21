// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff member mutations.
//!
//! This module contains backend-agnostic mutations for persisting staff
//! members. All mutations use Diesel DSL with backend-specific helpers
//! abstracted via the `PersistenceBackend` trait.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use rota_domain::StaffMember;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::staff;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new staff member and returns the assigned ID.
///
/// The caller is responsible for validating the staff member's fields
/// before insertion; this function persists the row verbatim.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `member` - The staff member to persist
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_staff(conn: &mut _, member: &StaffMember) -> Result<i64, PersistenceError> {
    info!(
        "Creating staff member: name={}, role={}",
        member.name,
        member.role.as_str()
    );

    diesel::insert_into(staff::table)
        .values((
            staff::name.eq(&member.name),
            staff::role.eq(member.role.as_str()),
            staff::phone.eq(&member.phone),
        ))
        .execute(conn)?;

    let staff_id: i64 = conn.get_last_insert_rowid()?;

    info!(staff_id, "Staff member created");

    Ok(staff_id)
}
}
