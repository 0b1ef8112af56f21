// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod assignment_tests;

use rota_domain::{Assignment, AssignmentDetail, Shift, StaffMember};
use rota_persistence::{AssignmentStore, PersistenceError, ShiftStore, StaffStore};

use crate::{AssignShiftRequest, CreateShiftRequest, CreateStaffRequest};

/// In-memory store fake for exercising workflows without a database.
///
/// Mirrors the storage contract: sequential IDs starting at 1, a unique
/// constraint on the assignment pair, and the (day, start time) ordering
/// of the joined schedule view. Setting `fail_writes` makes every insert
/// fail, for exercising write-failure paths.
#[derive(Default)]
pub struct InMemoryStore {
    staff: Vec<StaffMember>,
    shifts: Vec<Shift>,
    assignments: Vec<Assignment>,
    pub fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        if self.fail_writes {
            Err(PersistenceError::DatabaseError(
                "simulated write failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl StaffStore for InMemoryStore {
    fn insert_staff(&mut self, member: &StaffMember) -> Result<i64, PersistenceError> {
        self.check_writable()?;
        let staff_id = i64::try_from(self.staff.len()).unwrap() + 1;
        self.staff.push(StaffMember::with_id(
            staff_id,
            member.name.clone(),
            member.role,
            member.phone.clone(),
        ));
        Ok(staff_id)
    }

    fn list_staff(&mut self) -> Result<Vec<StaffMember>, PersistenceError> {
        Ok(self.staff.clone())
    }

    fn get_staff(&mut self, staff_id: i64) -> Result<Option<StaffMember>, PersistenceError> {
        Ok(self
            .staff
            .iter()
            .find(|m| m.staff_id == Some(staff_id))
            .cloned())
    }
}

impl ShiftStore for InMemoryStore {
    fn insert_shift(&mut self, shift: &Shift) -> Result<i64, PersistenceError> {
        self.check_writable()?;
        let shift_id = i64::try_from(self.shifts.len()).unwrap() + 1;
        self.shifts.push(Shift::with_id(
            shift_id,
            shift.day.clone(),
            shift.start_time.clone(),
            shift.end_time.clone(),
            shift.role_required.clone(),
        ));
        Ok(shift_id)
    }

    fn list_shifts(&mut self) -> Result<Vec<Shift>, PersistenceError> {
        Ok(self.shifts.clone())
    }

    fn get_shift(&mut self, shift_id: i64) -> Result<Option<Shift>, PersistenceError> {
        Ok(self
            .shifts
            .iter()
            .find(|s| s.shift_id == Some(shift_id))
            .cloned())
    }
}

impl AssignmentStore for InMemoryStore {
    fn insert_assignment(
        &mut self,
        staff_id: i64,
        shift_id: i64,
    ) -> Result<i64, PersistenceError> {
        self.check_writable()?;
        if self
            .assignments
            .iter()
            .any(|a| a.staff_id == staff_id && a.shift_id == shift_id)
        {
            return Err(PersistenceError::UniqueViolation(
                "UNIQUE constraint failed: assignments.staff_id, assignments.shift_id".to_string(),
            ));
        }
        let assignment_id = i64::try_from(self.assignments.len()).unwrap() + 1;
        self.assignments.push(Assignment {
            assignment_id: Some(assignment_id),
            staff_id,
            shift_id,
        });
        Ok(assignment_id)
    }

    fn assignment_exists(
        &mut self,
        staff_id: i64,
        shift_id: i64,
    ) -> Result<bool, PersistenceError> {
        Ok(self
            .assignments
            .iter()
            .any(|a| a.staff_id == staff_id && a.shift_id == shift_id))
    }

    fn list_assignment_details(&mut self) -> Result<Vec<AssignmentDetail>, PersistenceError> {
        let mut details: Vec<AssignmentDetail> = self
            .assignments
            .iter()
            .filter_map(|a| {
                let member = self.staff.iter().find(|m| m.staff_id == Some(a.staff_id))?;
                let shift = self.shifts.iter().find(|s| s.shift_id == Some(a.shift_id))?;
                Some(AssignmentDetail {
                    assignment_id: a.assignment_id.unwrap_or_default(),
                    staff_id: a.staff_id,
                    staff_name: member.name.clone(),
                    staff_role: member.role.as_str().to_string(),
                    shift_id: a.shift_id,
                    day: shift.day.clone(),
                    start_time: shift.start_time.clone(),
                    end_time: shift.end_time.clone(),
                    role_required: shift.role_required.clone(),
                })
            })
            .collect();
        details.sort_by(|a, b| {
            (a.day.as_str(), a.start_time.as_str()).cmp(&(b.day.as_str(), b.start_time.as_str()))
        });
        Ok(details)
    }
}

pub fn staff_request(name: &str, role: &str, phone: &str) -> CreateStaffRequest {
    CreateStaffRequest {
        name: Some(name.to_string()),
        role: Some(role.to_string()),
        phone: Some(phone.to_string()),
    }
}

pub fn shift_request(day: &str, start_time: &str, role_required: &str) -> CreateShiftRequest {
    CreateShiftRequest {
        day: Some(day.to_string()),
        start_time: Some(start_time.to_string()),
        end_time: Some("17:00".to_string()),
        role_required: Some(role_required.to_string()),
    }
}

pub fn assign_request(staff_id: i64, shift_id: i64) -> AssignShiftRequest {
    AssignShiftRequest {
        staff_id: Some(staff_id),
        shift_id: Some(shift_id),
    }
}
