//! Shared constant tests.

use csim_core::common::constants::{ADDRESS_BITS, MAX_SET_BITS, OP_COLUMN, low_mask};

#[test]
fn address_width_is_64_bits() {
    assert_eq!(ADDRESS_BITS, u64::BITS);
}

#[test]
fn set_bits_limit_fits_in_the_address() {
    assert!(MAX_SET_BITS < ADDRESS_BITS);
}

#[test]
fn operation_is_in_second_column() {
    assert_eq!(" L 10,1".chars().nth(OP_COLUMN), Some('L'));
}

#[test]
fn low_mask_widths() {
    assert_eq!(low_mask(0), 0);
    assert_eq!(low_mask(1), 0b1);
    assert_eq!(low_mask(4), 0xf);
    assert_eq!(low_mask(63), u64::MAX >> 1);
    assert_eq!(low_mask(64), u64::MAX);
    assert_eq!(low_mask(200), u64::MAX);
}
