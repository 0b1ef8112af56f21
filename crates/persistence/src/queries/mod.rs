// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `staff` — Staff member queries
//! - `shifts` — Shift queries
//! - `assignments` — Assignment and joined schedule queries
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod assignments;
pub mod shifts;
pub mod staff;

// Re-export backend-specific query functions used by lib.rs
pub use assignments::{
    assignment_exists_mysql, assignment_exists_sqlite, list_assignment_details_mysql,
    list_assignment_details_sqlite,
};
pub use shifts::{
    get_shift_by_id_mysql, get_shift_by_id_sqlite, list_shifts_mysql, list_shifts_sqlite,
};
pub use staff::{get_staff_by_id_mysql, get_staff_by_id_sqlite, list_staff_mysql, list_staff_sqlite};
