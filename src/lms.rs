use crate::classify::{is_lms, Type};
use crate::Char;

/// Whether the LMS substrings starting at `i` and `j` are identical.
///
/// An LMS substring runs from its LMS position up to and including the next
/// one. The sentinel's substring is never equal to anything else.
pub(crate) fn lms_equal<C: Char>(s: &[C], types: &[Type], i: usize, j: usize) -> bool {
    let n = s.len();

    if i == n || j == n {
        return false;
    }

    debug_assert!(is_lms(types, i) && is_lms(types, j));

    let mut k = 0;
    loop {
        let (a, b) = (i + k, j + k);
        let (a_lms, b_lms) = (is_lms(types, a), is_lms(types, b));

        if k > 0 && (a_lms || b_lms) {
            // both ends must line up on a real character
            return a_lms && b_lms && a < n && b < n && s[a] == s[b];
        }

        // a and b are not LMS here, so neither is the sentinel
        if s[a] != s[b] {
            return false;
        }

        k += 1;
    }
}
