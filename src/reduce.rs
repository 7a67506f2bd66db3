use crate::bucket::BucketArray;
use crate::classify::{is_lms, Type};
use crate::induce::EMPTY;
use crate::lms::lms_equal;
use crate::{sais, Alphabet, Char, Error};
use contracts::*;

/// Seeds a fresh working array with every LMS position at its bucket tail,
/// in order of occurrence. The relative order of LMS suffixes is only
/// approximate.
pub(crate) fn guess_lms<C: Char>(
    s: &[C],
    types: &[Type],
    buckets: &mut BucketArray,
) -> Vec<usize> {
    let n = s.len();
    let mut sa = vec![EMPTY; n + 1];

    sa[0] = n;

    for i in 0..n {
        if is_lms(types, i) {
            sa[buckets.next_tail(s[i])] = i;
        }
    }

    buckets.reset_tails();

    sa
}

/// Reduced problem: one name per LMS substring, in order of occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) string: Vec<usize>,
    pub(crate) alphabet_size: usize,
    /// position in the original string of each summary character
    pub(crate) offsets: Vec<usize>,
}

impl Summary {
    /// No two LMS substrings share a name.
    pub(crate) fn is_unique(&self) -> bool {
        self.alphabet_size == self.string.len()
    }
}

/// Names LMS substrings by rank.
///
/// Pre-condition: `sa` holds LMS substrings sorted relative to each other.
#[debug_requires(sa.len() == s.len() + 1 && sa[0] == s.len())]
#[debug_ensures(ret.string.len() == ret.offsets.len())]
#[debug_ensures(ret.offsets.last() == Some(&s.len()), "sentinel is the last LMS position")]
#[debug_ensures(ret.string.len() * 2 <= s.len() + 2)]
pub(crate) fn summarize<C: Char>(s: &[C], sa: &[usize], types: &[Type]) -> Summary {
    let n = s.len();

    // names[i] is the name of the LMS substring at i
    let mut names = vec![EMPTY; n + 1];

    let mut name = 0;
    let mut last = sa[0];
    names[last] = name;

    for &curr in &sa[1..] {
        if curr == EMPTY || !is_lms(types, curr) {
            continue;
        }

        if !lms_equal(s, types, last, curr) {
            name += 1;
        }

        names[curr] = name;
        last = curr;
    }

    let (offsets, string): (Vec<usize>, Vec<usize>) = names
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != EMPTY)
        .map(|(i, &v)| (i, v))
        .unzip();

    Summary {
        string,
        alphabet_size: name + 1,
        offsets,
    }
}

/// Suffix array of a string whose characters are pairwise distinct.
#[debug_requires(string.iter().all(|&v| v < string.len()), "names fit the string")]
pub(crate) fn place_unique_names(string: &[usize]) -> Vec<usize> {
    let mut sa = vec![EMPTY; string.len() + 1];

    sa[0] = string.len();

    for (k, &v) in string.iter().enumerate() {
        debug_assert_eq!(sa[v + 1], EMPTY, "name {} is not unique", v);
        sa[v + 1] = k;
    }

    sa
}

/// Sorts the summary string, recursing only when names collide.
pub(crate) fn make_summary_suffix_array(
    summary: &Summary,
    depth: usize,
) -> Result<Vec<usize>, Error> {
    if summary.is_unique() {
        Ok(place_unique_names(&summary.string))
    } else {
        sais(
            &summary.string,
            Alphabet::dense(summary.alphabet_size),
            depth + 1,
        )
    }
}

/// Seeds a fresh working array with LMS positions in their exact order.
///
/// The summary ranks are walked from the highest down so that each tail
/// cursor receives the largest suffix of its bucket first. Summary ranks 0
/// and 1 are the summary's own sentinel and the original sentinel; the latter
/// always owns slot 0.
#[debug_requires(summary_sa.len() == offsets.len() + 1)]
#[debug_requires(offsets[summary_sa[1]] == s.len(), "original sentinel ranks first")]
pub(crate) fn accurate_lms_sort<C: Char>(
    s: &[C],
    summary_sa: &[usize],
    offsets: &[usize],
    buckets: &mut BucketArray,
) -> Vec<usize> {
    let n = s.len();
    let mut sa = vec![EMPTY; n + 1];

    for &k in summary_sa[2..].iter().rev() {
        let i = offsets[k];
        sa[buckets.next_tail(s[i])] = i;
    }

    sa[0] = n;

    buckets.reset_tails();

    sa
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::induce::{induce_l, induce_s};

    use proptest::prelude::*;

    const E: usize = EMPTY;

    fn first_round(s: &[u8]) -> (Vec<Type>, BucketArray, Vec<usize>) {
        let types = classify(s);
        let mut buckets = BucketArray::new(s, Alphabet::PRINTABLE).unwrap();
        let mut sa = guess_lms(s, &types, &mut buckets);
        induce_l(s, &mut sa, &types, &mut buckets);
        induce_s(s, &mut sa, &types, &mut buckets);
        (types, buckets, sa)
    }

    #[test]
    fn guess_banana() {
        // LMS at 1 and 3 both land in the 'a' bucket, later ones in front
        let s = b"banana";
        let types = classify(s);
        let mut buckets = BucketArray::new(s, Alphabet::PRINTABLE).unwrap();

        let sa = guess_lms(s, &types, &mut buckets);
        assert_eq!(sa, vec![6, E, 3, 1, E, E, E]);

        // tails were reset
        assert_eq!(guess_lms(s, &types, &mut buckets), sa);
    }

    #[test]
    fn summarize_unique_names() {
        let s = b"banana";
        let (types, _, sa) = first_round(s);
        assert_eq!(sa, vec![6, 5, 3, 1, 0, 4, 2]);

        let summary = summarize(s, &sa, &types);
        assert_eq!(
            summary,
            Summary {
                string: vec![2, 1, 0],
                alphabet_size: 3,
                offsets: vec![1, 3, 6],
            }
        );
        assert!(summary.is_unique());
    }

    #[test]
    fn summarize_repeated_names() {
        // 01234567
        // bababac$
        // LMS substrings: aba, aba, ac$, $
        let s = b"bababac";
        let (types, _, sa) = first_round(s);
        assert_eq!(sa, vec![7, 3, 1, 5, 4, 2, 0, 6]);

        let summary = summarize(s, &sa, &types);
        assert_eq!(
            summary,
            Summary {
                string: vec![1, 1, 2, 0],
                alphabet_size: 3,
                offsets: vec![1, 3, 5, 7],
            }
        );
        assert!(!summary.is_unique());
    }

    #[test]
    fn summary_of_single_run() {
        let s = b"aaaa";
        let (types, _, sa) = first_round(s);

        let summary = summarize(s, &sa, &types);
        assert_eq!(summary.string, vec![0]);
        assert_eq!(summary.offsets, vec![4]);
        assert!(summary.is_unique());
    }

    #[test]
    fn unique_names_placed_directly() {
        assert_eq!(place_unique_names(&[2, 1, 0]), vec![3, 2, 1, 0]);
        assert_eq!(place_unique_names(&[0]), vec![1, 0]);
        assert_eq!(place_unique_names(&[1, 3, 2, 0]), vec![4, 3, 0, 2, 1]);
    }

    #[test]
    fn recursion_on_repeated_names() {
        let summary = Summary {
            string: vec![1, 1, 2, 0],
            alphabet_size: 3,
            offsets: vec![1, 3, 5, 7],
        };

        assert_eq!(
            make_summary_suffix_array(&summary, 0),
            Ok(vec![4, 3, 0, 1, 2])
        );
    }

    #[test]
    fn accurate_banana() {
        let s = b"banana";
        let mut buckets = BucketArray::new(s, Alphabet::PRINTABLE).unwrap();

        let sa = accurate_lms_sort(s, &[3, 2, 1, 0], &[1, 3, 6], &mut buckets);
        assert_eq!(sa, vec![6, E, 3, 1, E, E, E]);
    }

    #[test]
    fn accurate_bababac() {
        // exact order of LMS suffixes: ababac < abac < ac
        let s = b"bababac";
        let mut buckets = BucketArray::new(s, Alphabet::PRINTABLE).unwrap();

        let sa = accurate_lms_sort(s, &[4, 3, 0, 1, 2], &[1, 3, 5, 7], &mut buckets);
        assert_eq!(sa, vec![7, 1, 3, 5, E, E, E, E]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]
        #[test]
        fn direct_placement_matches_recursion(
            string in (1usize..64).prop_flat_map(|m| Just((0..m).collect::<Vec<_>>()).prop_shuffle())
        ) {
            let m = string.len();
            let recursive = sais(&string, Alphabet::dense(m), 1).unwrap();
            prop_assert_eq!(place_unique_names(&string), recursive);
        }
    }
}
