// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence
//! layer. Most mutations use Diesel DSL and are backend-agnostic, with
//! minimal use of backend-specific helpers (e.g., `last_insert_rowid()`
//! for `SQLite`).
//!
//! ## Module Organization
//!
//! - `staff` — Staff member mutations
//! - `shifts` — Shift mutations
//! - `assignments` — Assignment mutations
//!
//! ## Backend-Specific Code
//!
//! Backend-specific helpers (e.g., `get_last_insert_rowid()`) are imported
//! from the `backend` module. All other code uses Diesel DSL exclusively.

pub mod assignments;
pub mod shifts;
pub mod staff;

// Re-export backend-specific mutation functions used by lib.rs
pub use assignments::{insert_assignment_mysql, insert_assignment_sqlite};
pub use shifts::{insert_shift_mysql, insert_shift_sqlite};
pub use staff::{insert_staff_mysql, insert_staff_sqlite};
