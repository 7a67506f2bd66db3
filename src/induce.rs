use crate::bucket::BucketArray;
use crate::classify::Type;
use crate::Char;
use contracts::*;

/// Marks a slot of the working array that holds no suffix yet.
pub(crate) const EMPTY: usize = usize::MAX;

/// Left-to-right pass placing L-type predecessors at their bucket heads.
#[debug_requires(sa.len() == s.len() + 1, "working array covers the sentinel")]
#[debug_requires(types.len() == sa.len())]
pub(crate) fn induce_l<C: Char>(
    s: &[C],
    sa: &mut [usize],
    types: &[Type],
    buckets: &mut BucketArray,
) {
    for i in 0..sa.len() {
        let j = sa[i];
        if j == EMPTY || j == 0 {
            continue;
        }

        // s[j-1] is L-type?
        if types[j - 1] == Type::L {
            let slot = buckets.next_head(s[j - 1]);
            debug_assert!(slot > i, "L-type suffix induced behind the scan");
            sa[slot] = j - 1;
        }
    }

    buckets.reset_heads();
}

/// Right-to-left pass placing S-type predecessors at their bucket tails.
///
/// Tails are filled from scratch, so LMS seeds left in a tail region are
/// overwritten by their own induced copies.
#[debug_requires(sa.len() == s.len() + 1, "working array covers the sentinel")]
#[debug_requires(types.len() == sa.len())]
pub(crate) fn induce_s<C: Char>(
    s: &[C],
    sa: &mut [usize],
    types: &[Type],
    buckets: &mut BucketArray,
) {
    for i in (0..sa.len()).rev() {
        let j = sa[i];
        if j == EMPTY || j == 0 {
            continue;
        }

        // s[j-1] is S-type?
        if types[j - 1] == Type::S {
            let slot = buckets.next_tail(s[j - 1]);
            debug_assert!(slot < i, "S-type suffix induced behind the scan");
            sa[slot] = j - 1;
        }
    }

    buckets.reset_tails();
}
