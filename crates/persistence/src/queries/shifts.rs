// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift queries.
//!
//! This module contains backend-agnostic queries for retrieving shifts.
//! All queries use Diesel DSL and work across all supported database
//! backends.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use rota_domain::Shift;

use crate::diesel_schema::shifts;
use crate::error::PersistenceError;

/// Diesel Queryable struct for shift rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = shifts)]
struct ShiftRow {
    shift_id: i64,
    day: String,
    start_time: String,
    end_time: String,
    role_required: String,
}

impl ShiftRow {
    fn into_domain(self) -> Shift {
        Shift::with_id(
            self.shift_id,
            self.day,
            self.start_time,
            self.end_time,
            self.role_required,
        )
    }
}

backend_fn! {
/// Retrieves all shifts in insertion order.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_shifts(conn: &mut _) -> Result<Vec<Shift>, PersistenceError> {
    debug!("Listing all shifts");

    let rows: Vec<ShiftRow> = shifts::table
        .order(shifts::shift_id.asc())
        .select(ShiftRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ShiftRow::into_domain).collect())
}
}

backend_fn! {
/// Retrieves a shift by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `shift_id` - The shift ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the shift is not found.
pub fn get_shift_by_id(conn: &mut _, shift_id: i64) -> Result<Option<Shift>, PersistenceError> {
    debug!("Looking up shift by ID: {}", shift_id);

    let row: Option<ShiftRow> = shifts::table
        .filter(shifts::shift_id.eq(shift_id))
        .select(ShiftRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(ShiftRow::into_domain))
}
}
