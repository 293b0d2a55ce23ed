//! # Reference Vectors
//!
//! Literal inputs with their expected outcome. The rejected cases cover
//! one rule each; the accepted cases cover the ordinary path, the key
//! wraparound (N mod 97 == 0) and the overseas department.

use nir_core::{is_valid, parse, MalformedNir, Nir, Sex};

fn assert_rejected(input: &str, reason: &str) {
    assert_eq!(parse(input), None, "{input:?} should be rejected: {reason}");
    assert!(!is_valid(input), "{input:?} should be invalid: {reason}");
    assert_eq!(input.parse::<Nir>(), Err(MalformedNir));
}

#[test]
fn too_short() {
    assert_rejected("2230", "too short");
}

#[test]
fn incorrect_sex() {
    assert_rejected("323115935012322", "sex digit 3");
}

#[test]
fn incorrect_year() {
    assert_rejected("2ab115935012322", "year not numeric");
}

#[test]
fn incorrect_month() {
    assert_rejected("223ab5935012322", "month not numeric");
    assert_rejected("223145935012322", "month 14");
    assert_rejected("223005935012322", "month 00");
}

#[test]
fn incorrect_department() {
    assert_rejected("22311xx35012322", "department not numeric");
    assert_rejected("223119635012322", "department 96");
}

#[test]
fn incorrect_city() {
    assert_rejected("2231159zzz12322", "city not numeric");
}

#[test]
fn incorrect_serial_number() {
    assert_rejected("2231159123zzz22", "serial not numeric");
}

#[test]
fn incorrect_control_key() {
    assert_rejected("223115935012321", "key 21, expected 22");
    assert_rejected("223115935012397", "key 97 is never computed");
}

#[test]
fn signs_and_whitespace_are_not_digits() {
    assert_rejected("2+3115935012322", "signed year");
    assert_rejected("223 15935012322", "space in month");
    assert_rejected(" 23115935012322", "leading space");
    assert_rejected("22311593501232 ", "trailing space");
}

#[test]
fn valid_reference_number() {
    let nir = parse("223115935012322").expect("reference number is valid");
    assert_eq!(nir.sex(), Sex::Female);
    assert_eq!(nir.year(), 23);
    assert_eq!(nir.month(), 11);
    assert_eq!(nir.department(), 59);
    assert_eq!(nir.city(), 350);
    assert_eq!(nir.serial(), 123);
    assert_eq!(nir.control_key(), 22);
    assert!(is_valid("223115935012322"));
}

#[test]
fn key_wraps_to_zero() {
    // 1000101000036 is a multiple of 97.
    let nir = parse("100010100003600").expect("wrapped key is valid");
    assert_eq!(nir.sex(), Sex::Male);
    assert_eq!(nir.year(), 0);
    assert_eq!(nir.month(), 1);
    assert_eq!(nir.department(), 1);
    assert_eq!(nir.city(), 0);
    assert_eq!(nir.serial(), 36);
    assert_eq!(nir.control_key(), 0);
    assert_rejected("100010100003697", "97 must be written as 00");
}

#[test]
fn overseas_department() {
    let nir = parse("299019912345680").expect("department 99 is valid");
    assert_eq!(nir.department(), 99);
    assert!(nir.is_overseas());
    assert_rejected("299019712345680", "department 97");
    assert_rejected("299019812345680", "department 98");
}

#[test]
fn male_number() {
    let nir = parse("185057800608491").expect("valid male number");
    assert_eq!(nir.sex(), Sex::Male);
    assert_eq!(nir.year(), 85);
    assert_eq!(nir.month(), 5);
    assert_eq!(nir.department(), 78);
    assert_eq!(nir.city(), 6);
    assert_eq!(nir.serial(), 84);
    assert_eq!(nir.control_key(), 91);
}
