// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::{DomainError, Role, valid_roles, validate_phone_number, validate_role};

#[test]
fn test_all_fixed_roles_are_valid() {
    assert!(validate_role("Cook"));
    assert!(validate_role("Server"));
    assert!(validate_role("Manager"));
}

#[test]
fn test_unknown_roles_are_invalid() {
    assert!(!validate_role("Chef"));
    assert!(!validate_role("Dishwasher"));
    assert!(!validate_role(""));
}

#[test]
fn test_role_matching_is_case_sensitive() {
    assert!(!validate_role("cook"));
    assert!(!validate_role("COOK"));
    assert!(!validate_role("server"));
    assert!(!validate_role("manager"));
}

#[test]
fn test_role_matching_is_exact() {
    assert!(!validate_role(" Cook"));
    assert!(!validate_role("Cook "));
    assert!(!validate_role("Cooks"));
}

#[test]
fn test_valid_roles_order_is_fixed() {
    assert_eq!(valid_roles(), ["Cook", "Server", "Manager"]);
}

#[test]
fn test_role_parse_round_trips() {
    for role_str in valid_roles() {
        let role: Role = Role::parse(role_str).unwrap();
        assert_eq!(role.as_str(), role_str);
        assert_eq!(role.to_string(), role_str);
    }
}

#[test]
fn test_role_parse_rejects_unknown() {
    let err: DomainError = Role::parse("Barista").unwrap_err();
    assert!(matches!(err, DomainError::InvalidRole(_)));
}

#[test]
fn test_role_serde_uses_exact_strings() {
    let json: String = serde_json::to_string(&Role::Server).unwrap();
    assert_eq!(json, "\"Server\"");
    let role: Role = serde_json::from_str("\"Manager\"").unwrap();
    assert_eq!(role, Role::Manager);
}

#[test]
fn test_valid_phone_numbers() {
    assert!(validate_phone_number("306-555-1234"));
    assert!(validate_phone_number("000-000-0000"));
    assert!(validate_phone_number("999-999-9999"));
}

#[test]
fn test_phone_rejects_missing_hyphens() {
    assert!(!validate_phone_number("3065551234"));
    assert!(!validate_phone_number("306555-1234"));
    assert!(!validate_phone_number("306-5551234"));
}

#[test]
fn test_phone_rejects_wrong_digit_counts() {
    assert!(!validate_phone_number("30-555-1234"));
    assert!(!validate_phone_number("3066-555-1234"));
    assert!(!validate_phone_number("306-55-1234"));
    assert!(!validate_phone_number("306-555-123"));
    assert!(!validate_phone_number("306-555-12345"));
}

#[test]
fn test_phone_rejects_wrong_separators() {
    assert!(!validate_phone_number("306.555.1234"));
    assert!(!validate_phone_number("306 555 1234"));
    assert!(!validate_phone_number("306/555/1234"));
}

#[test]
fn test_phone_rejects_letters() {
    assert!(!validate_phone_number("30a-555-1234"));
    assert!(!validate_phone_number("306-555-123x"));
    assert!(!validate_phone_number("abc-def-ghij"));
}

#[test]
fn test_phone_rejects_empty_and_whitespace() {
    assert!(!validate_phone_number(""));
    assert!(!validate_phone_number(" 306-555-1234"));
    assert!(!validate_phone_number("306-555-1234 "));
}

#[test]
fn test_phone_rejects_non_ascii_digits() {
    // Fullwidth digits have the right character count but are not ASCII.
    assert!(!validate_phone_number("３０６-５５５-１２３４"));
}
