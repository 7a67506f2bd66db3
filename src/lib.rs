//! Provide suffix array construction that runs in O(N+|Σ|) time using induced sorting (SA-IS).
//!
//! The implementation follows the algorithm proposed in the paper [*Linear Suffix Array Construction by Almost Pure Induced-Sorting*](https://doi.org/10.1109/DCC.2009.42).
//! Caller input is restricted to an [`Alphabet`] window, printable ASCII by default;
//! the sentinel is implicit and never part of the input.
//!
//! # Example
//! ```
//! let sa = sais::construct(b"banana").unwrap();
//!
//! // "" < "a" < "ana" < "anana" < "banana" < "na" < "nana"
//! assert_eq!(sa, vec![6, 5, 3, 1, 0, 4, 2]);
//! ```
use contracts::*;
use log::{debug, trace};
use std::ops::Index;

mod alphabet;
mod bucket;
mod classify;
mod error;
mod induce;
mod lms;
mod reduce;

pub use alphabet::Alphabet;
pub use error::Error;

use bucket::BucketArray;
use classify::classify;
use induce::{induce_l, induce_s, EMPTY};
use reduce::{accurate_lms_sort, guess_lms, make_summary_suffix_array, summarize};

mod private {
    use num::PrimInt;
    use std::fmt::Debug;

    pub trait Char: PrimInt + Debug {
        fn to_u(&self) -> usize;
    }

    macro_rules! impl_char {
        ($uint:ty) => {
            impl Char for $uint {
                #[inline]
                fn to_u(&self) -> usize {
                    *self as usize
                }
            }
        };
    }

    impl_char!(u8);

    impl_char!(u16);

    #[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
    impl_char!(u32);

    #[cfg(target_pointer_width = "64")]
    impl_char!(u64);

    impl_char!(usize);
}

/// A trait that represents a character: primitive unsigned integer type that fit into `usize`.
///
/// This is a [sealed trait](https://rust-lang.github.io/api-guidelines/future-proofing.html).
pub trait Char: private::Char {}

macro_rules! impl_char {
    ($uint:ty) => {
        impl Char for $uint {}
    };
}

impl_char!(u8);

impl_char!(u16);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl_char!(u32);

#[cfg(target_pointer_width = "64")]
impl_char!(u64);

impl_char!(usize);

#[debug_ensures(
    ret.as_ref().map_or(true, |sa| sa.len() == s.len() + 1 && sa[0] == s.len()),
    "sentinel suffix ranks first"
)]
fn sais<C: Char>(s: &[C], alphabet: Alphabet, depth: usize) -> Result<Vec<usize>, Error> {
    if s.is_empty() {
        return Ok(vec![0]);
    }

    let mut buckets = BucketArray::new(s, alphabet)?;
    let types = classify(s);

    let mut sa = guess_lms(s, &types, &mut buckets);

    induce_l(s, &mut sa, &types, &mut buckets);

    induce_s(s, &mut sa, &types, &mut buckets);

    let summary = summarize(s, &sa, &types);

    trace!(
        "depth {}: {} characters, {} LMS substrings, {} names, unique: {}",
        depth,
        s.len(),
        summary.string.len(),
        summary.alphabet_size,
        summary.is_unique()
    );

    let summary_sa = make_summary_suffix_array(&summary, depth)?;

    let mut sa = accurate_lms_sort(s, &summary_sa, &summary.offsets, &mut buckets);

    induce_l(s, &mut sa, &types, &mut buckets);

    induce_s(s, &mut sa, &types, &mut buckets);

    debug_assert!(sa.iter().all(|&e| e != EMPTY), "unfilled slot at depth {}", depth);

    Ok(sa)
}

/// Construct suffix array of printable ASCII text.
///
/// Runs in O(N) time. The result has `text.len() + 1` entries, the first of
/// which is the empty suffix at `text.len()`.
/// # Arguments
/// - `text`: Input string, every character in `b' '..=b'~'`
/// # Example
/// ```
/// let sa = sais::construct(b"abracadabra").unwrap();
///
/// assert_eq!(sa, vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
///
/// assert!(sais::construct(b"tab\t").is_err());
/// ```
pub fn construct<C: Char>(text: &[C]) -> Result<Vec<usize>, Error> {
    construct_with(text, Alphabet::PRINTABLE)
}

/// Construct suffix array of text drawn from `alphabet`.
///
/// Fails with [`Error::OutOfRange`] on the first character outside the
/// window, before any work is done.
pub fn construct_with<C: Char>(text: &[C], alphabet: Alphabet) -> Result<Vec<usize>, Error> {
    debug!(
        "constructing suffix array of {} characters over [{}, {}]",
        text.len(),
        alphabet.min(),
        alphabet.max()
    );

    alphabet.validate(text)?;

    sais(text, alphabet, 0)
}

/// Owned suffix array of a text.
///
/// Entry `r` is the offset of the suffix of rank `r`; rank 0 is always the
/// empty suffix. No reference to the text is kept.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuffixArray {
    offsets: Vec<usize>,
}

impl SuffixArray {
    pub fn new<C: Char>(text: &[C]) -> Result<Self, Error> {
        Self::with_alphabet(text, Alphabet::PRINTABLE)
    }

    pub fn with_alphabet<C: Char>(text: &[C], alphabet: Alphabet) -> Result<Self, Error> {
        let offsets = construct_with(text, alphabet)?;
        Ok(SuffixArray { offsets })
    }

    /// Number of suffixes, the empty one included.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Length of the indexed text.
    pub fn text_len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.offsets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.offsets.iter()
    }

    /// Rank of the suffix starting at each offset.
    ///
    /// # Example
    /// ```
    /// let sa = sais::SuffixArray::new(b"banana").unwrap();
    ///
    /// assert_eq!(sa.inverse(), vec![4, 3, 6, 2, 5, 1, 0]);
    /// ```
    pub fn inverse(&self) -> Vec<usize> {
        let mut rank = vec![0; self.offsets.len()];
        for (r, &i) in self.offsets.iter().enumerate() {
            rank[i] = r;
        }
        rank
    }
}

impl Index<usize> for SuffixArray {
    type Output = usize;

    fn index(&self, rank: usize) -> &usize {
        &self.offsets[rank]
    }
}

impl AsRef<[usize]> for SuffixArray {
    fn as_ref(&self) -> &[usize] {
        &self.offsets
    }
}

impl From<SuffixArray> for Vec<usize> {
    fn from(sa: SuffixArray) -> Self {
        sa.offsets
    }
}

impl<'a> IntoIterator for &'a SuffixArray {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}
