// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Role;

/// Checks whether a string names a valid staff role.
///
/// Matching is exact and case-sensitive against the fixed role set.
/// This function is pure, deterministic, and has no side effects.
#[must_use]
pub fn validate_role(role: &str) -> bool {
    Role::parse(role).is_ok()
}

/// Checks whether a phone number matches the required `DDD-DDD-DDDD` format.
///
/// The match is full-string: exactly three digits, a hyphen, three digits,
/// a hyphen, four digits. No surrounding whitespace is tolerated.
#[must_use]
pub fn validate_phone_number(phone: &str) -> bool {
    let bytes: &[u8] = phone.as_bytes();
    if bytes.len() != 12 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        3 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Returns the valid roles in their fixed display order.
///
/// Used both for validation and for building user-facing error messages.
#[must_use]
pub const fn valid_roles() -> [&'static str; 3] {
    Role::VALID_ROLES
}
