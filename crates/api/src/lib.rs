// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Rota staff scheduler.
//!
//! This crate contains the request workflows that sit between the HTTP
//! transport and the store: field-presence and format validation, the
//! assignment validation gauntlet, and the canonical success and error
//! messages of the API contract.
//!
//! Workflows are free functions generic over the store traits from
//! `rota_persistence`, so they run identically against the production
//! database adapter and the in-memory test stores.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod assignments;
mod error;
mod shifts;
mod staff;

#[cfg(test)]
mod tests;

pub use assignments::{AssignShiftRequest, AssignShiftResponse, assign_shift, list_assignments};
pub use error::ApiError;
pub use shifts::{CreateShiftRequest, CreateShiftResponse, create_shift, list_shifts};
pub use staff::{CreateStaffRequest, CreateStaffResponse, create_staff, list_staff};
