use crate::Char;
use std::cmp::Ordering::*;

/// Whether the suffix at a position is Larger or Smaller than its right neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Type {
    L,
    S,
}

/// Tags every position of `s`, the implicit sentinel at `s.len()` included.
pub(crate) fn classify<C: Char>(s: &[C]) -> Vec<Type> {
    let n = s.len();
    let mut types = vec![Type::S; n + 1];

    if n == 0 {
        return types;
    }

    // everything is greater than the sentinel
    types[n - 1] = Type::L;

    for i in (0..n - 1).rev() {
        types[i] = match s[i].cmp(&s[i + 1]) {
            Greater => Type::L,
            Equal => types[i + 1],
            Less => Type::S,
        };
    }

    types
}

/// s[i] is LMS?
#[inline]
pub(crate) fn is_lms(types: &[Type], i: usize) -> bool {
    i != 0 && types[i] == Type::S && types[i - 1] == Type::L
}
