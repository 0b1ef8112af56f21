// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a staff role classification.
///
/// Roles are a fixed, closed domain set. Matching is case-sensitive and
/// exact: "cook" is not a valid role, "Cook" is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Kitchen staff.
    Cook,
    /// Front-of-house staff.
    Server,
    /// Shift supervision.
    Manager,
}

impl Role {
    /// The valid roles, in the fixed display order used for error messages.
    pub const VALID_ROLES: [&'static str; 3] = ["Cook", "Server", "Manager"];

    /// Parses a role from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid role exactly.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Cook" => Ok(Self::Cook),
            "Server" => Ok(Self::Server),
            "Manager" => Ok(Self::Manager),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cook => "Cook",
            Self::Server => "Server",
            Self::Manager => "Manager",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a staff member.
///
/// Staff members are immutable after creation; this system defines no
/// update or delete operations for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// The canonical numeric identifier assigned by the store.
    /// `None` indicates the staff member has not been persisted yet.
    pub staff_id: Option<i64>,
    /// The staff member's name (informational, not unique).
    pub name: String,
    /// The staff member's role classification.
    pub role: Role,
    /// Phone number in the exact format `DDD-DDD-DDDD`.
    pub phone: String,
}

impl StaffMember {
    /// Creates a new `StaffMember` without a persisted ID.
    #[must_use]
    pub const fn new(name: String, role: Role, phone: String) -> Self {
        Self {
            staff_id: None,
            name,
            role,
            phone,
        }
    }

    /// Creates a `StaffMember` with an existing store-assigned ID.
    #[must_use]
    pub const fn with_id(staff_id: i64, name: String, role: Role, phone: String) -> Self {
        Self {
            staff_id: Some(staff_id),
            name,
            role,
            phone,
        }
    }
}

/// Represents a scheduled shift.
///
/// Day and times are opaque ISO-8601 text: shift creation deliberately
/// performs no date-format, time-ordering, or role-enum validation.
/// `role_required` is free text and may name a role no staff member can
/// hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The canonical numeric identifier assigned by the store.
    /// `None` indicates the shift has not been persisted yet.
    pub shift_id: Option<i64>,
    /// The calendar date of the shift (ISO 8601 date string).
    pub day: String,
    /// Wall-clock start time (e.g., "09:00").
    pub start_time: String,
    /// Wall-clock end time (e.g., "17:00").
    pub end_time: String,
    /// The role this shift requires, compared by exact string equality.
    pub role_required: String,
}

impl Shift {
    /// Creates a new `Shift` without a persisted ID.
    #[must_use]
    pub const fn new(
        day: String,
        start_time: String,
        end_time: String,
        role_required: String,
    ) -> Self {
        Self {
            shift_id: None,
            day,
            start_time,
            end_time,
            role_required,
        }
    }

    /// Creates a `Shift` with an existing store-assigned ID.
    #[must_use]
    pub const fn with_id(
        shift_id: i64,
        day: String,
        start_time: String,
        end_time: String,
        role_required: String,
    ) -> Self {
        Self {
            shift_id: Some(shift_id),
            day,
            start_time,
            end_time,
            role_required,
        }
    }
}

/// Represents a staff-shift assignment link.
///
/// Assignments are a many-to-many join annotated with nothing beyond the
/// link itself. The pair (`staff_id`, `shift_id`) is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The canonical numeric identifier assigned by the store.
    pub assignment_id: Option<i64>,
    /// The assigned staff member.
    pub staff_id: i64,
    /// The shift being covered.
    pub shift_id: i64,
}

/// A fully-joined assignment read view for schedule display.
///
/// Recombines the staff member's name/role with the shift's schedule and
/// role fields. Collections of details are ordered by (day ascending,
/// start time ascending) — the schedule display contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDetail {
    /// The assignment identifier.
    pub assignment_id: i64,
    /// The assigned staff member's identifier.
    pub staff_id: i64,
    /// The assigned staff member's name.
    pub staff_name: String,
    /// The assigned staff member's role.
    pub staff_role: String,
    /// The shift identifier.
    pub shift_id: i64,
    /// The calendar date of the shift.
    pub day: String,
    /// Wall-clock start time.
    pub start_time: String,
    /// Wall-clock end time.
    pub end_time: String,
    /// The role the shift requires.
    pub role_required: String,
}
