// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift mutations.
//!
//! This module contains backend-agnostic mutations for persisting shifts.
//! All mutations use Diesel DSL with backend-specific helpers abstracted
//! via the `PersistenceBackend` trait.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use rota_domain::Shift;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::shifts;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new shift and returns the assigned ID.
///
/// Shift fields are stored verbatim. Day and time strings are opaque text
/// at this layer.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `shift` - The shift to persist
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_shift(conn: &mut _, shift: &Shift) -> Result<i64, PersistenceError> {
    info!(
        "Creating shift: day={}, start_time={}, end_time={}, role_required={}",
        shift.day, shift.start_time, shift.end_time, shift.role_required
    );

    diesel::insert_into(shifts::table)
        .values((
            shifts::day.eq(&shift.day),
            shifts::start_time.eq(&shift.start_time),
            shifts::end_time.eq(&shift.end_time),
            shifts::role_required.eq(&shift.role_required),
        ))
        .execute(conn)?;

    let shift_id: i64 = conn.get_last_insert_rowid()?;

    info!(shift_id, "Shift created");

    Ok(shift_id)
}
}
