//! Tax file number validation.
//!
//! Two validators with deliberately different strength. [`validate_tfn`] is
//! the fast format pre-filter used on declaration input: it only checks the
//! digit count. [`tfn_passes_checksum`] additionally runs the ATO weighted
//! modulus 11 algorithm and is the one to use when a number must actually
//! be plausible, not just well-formed.

/// Digit weights for the ATO tax file number check algorithm.
const CHECKSUM_WEIGHTS: [u32; 9] = [1, 4, 3, 7, 5, 8, 6, 9, 10];

/// Strips formatting characters, keeping only ASCII digits.
fn clean_tfn(tfn: &str) -> String {
    tfn.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates the format of a tax file number.
///
/// Strips all non-digit characters (spaces, hyphens) and accepts the input
/// iff exactly nine digits remain. This is a format check only: it does not
/// verify the ATO check digit, so a mistyped number can still pass. See
/// [`tfn_passes_checksum`] for the stronger check.
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::validate_tfn;
///
/// assert!(validate_tfn("123456789"));
/// assert!(validate_tfn("123-456-789"));
/// assert!(!validate_tfn("12345678"));
/// ```
pub fn validate_tfn(tfn: &str) -> bool {
    clean_tfn(tfn).len() == 9
}

/// Runs the ATO weighted modulus 11 check on a tax file number.
///
/// Strips formatting like [`validate_tfn`], then requires nine digits whose
/// weighted sum is divisible by 11. Numbers that fail the format check fail
/// the checksum too.
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::tfn_passes_checksum;
///
/// assert!(tfn_passes_checksum("123456782"));
/// assert!(!tfn_passes_checksum("123456789"));
/// ```
pub fn tfn_passes_checksum(tfn: &str) -> bool {
    let digits = clean_tfn(tfn);
    if digits.len() != 9 {
        return false;
    }

    let weighted_sum: u32 = digits
        .chars()
        .zip(CHECKSUM_WEIGHTS)
        .map(|(c, weight)| c.to_digit(10).unwrap_or(0) * weight)
        .sum();

    weighted_sum % 11 == 0
}
