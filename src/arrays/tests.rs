#![cfg(test)]

use super::*;

#[test]
fn test_sums_agree() {
    assert_eq!(
        bad::sum_of_buffer(),
        good::sum_of_buffer(),
        "Both spellings should sum the same buffer."
    );
    assert_eq!(good::sum_of_buffer(), 256);
}

#[test]
fn test_length_is_part_of_the_type() {
    assert_eq!(good::sum(&[2_i32; 4]), 8);
    assert_eq!(good::sum(&[0_i32; 0]), 0, "An empty array sums to zero.");
}

#[test]
fn test_wrong_length_goes_unnoticed() {
    let buf = [1_i32; 8];
    // SAFETY: 3 is within the 8 values `buf` holds — but nothing checked that for us.
    let partial = unsafe { bad::sum(buf.as_ptr(), 3) };
    assert_eq!(
        partial, 3,
        "A wrong length is undetectable at the call site."
    );
}
