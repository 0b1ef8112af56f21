// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod backend_validation_tests;

use rota_domain::{Role, Shift, StaffMember};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

pub fn sample_staff(name: &str, role: Role) -> StaffMember {
    StaffMember::new(name.to_string(), role, "306-555-1234".to_string())
}

pub fn sample_shift(day: &str, start_time: &str, role_required: &str) -> Shift {
    Shift::new(
        day.to_string(),
        start_time.to_string(),
        "17:00".to_string(),
        role_required.to_string(),
    )
}
