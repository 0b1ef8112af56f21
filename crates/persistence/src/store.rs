// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage traits for the scheduling workflows.
//!
//! These traits are the seam between the request workflows and the
//! database. The production implementation is [`crate::Persistence`];
//! workflow tests substitute lightweight in-memory implementations.

use rota_domain::{AssignmentDetail, Shift, StaffMember};

use crate::error::PersistenceError;

/// Storage operations for staff members.
pub trait StaffStore {
    /// Inserts a staff member and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert_staff(&mut self, member: &StaffMember) -> Result<i64, PersistenceError>;

    /// Retrieves all staff members in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_staff(&mut self) -> Result<Vec<StaffMember>, PersistenceError>;

    /// Retrieves a staff member by ID, or `None` if no such row exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_staff(&mut self, staff_id: i64) -> Result<Option<StaffMember>, PersistenceError>;
}

/// Storage operations for shifts.
pub trait ShiftStore {
    /// Inserts a shift and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert_shift(&mut self, shift: &Shift) -> Result<i64, PersistenceError>;

    /// Retrieves all shifts in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_shifts(&mut self) -> Result<Vec<Shift>, PersistenceError>;

    /// Retrieves a shift by ID, or `None` if no such row exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_shift(&mut self, shift_id: i64) -> Result<Option<Shift>, PersistenceError>;
}

/// Storage operations for staff-shift assignments.
pub trait AssignmentStore {
    /// Inserts an assignment link and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::UniqueViolation`] if the
    /// (`staff_id`, `shift_id`) pair is already assigned, or another
    /// error if the insert fails.
    fn insert_assignment(&mut self, staff_id: i64, shift_id: i64)
    -> Result<i64, PersistenceError>;

    /// Checks whether a staff member is already assigned to a shift.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn assignment_exists(&mut self, staff_id: i64, shift_id: i64)
    -> Result<bool, PersistenceError>;

    /// Retrieves the joined schedule view, ordered by day ascending then
    /// start time ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_assignment_details(&mut self) -> Result<Vec<AssignmentDetail>, PersistenceError>;
}
