use crate::{Char, Error};

/// Window of character values accepted by the construction.
///
/// The value `0` is reserved: it never belongs to a caller window, but
/// always owns the first bucket so that summary strings built during
/// recursion can use it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Alphabet {
    min: usize,
    max: usize,
}

impl Alphabet {
    /// Printable ASCII, `b' '..=b'~'`.
    pub const PRINTABLE: Alphabet = Alphabet { min: 32, max: 126 };

    /// Largest number of characters a window may span; one bucket is
    /// allocated per character.
    pub const MAX_WIDTH: usize = 1 << 24;

    /// Window `[min, max]` for caller input.
    ///
    /// Fails unless `0 < min <= max` and the window spans at most
    /// [`Alphabet::MAX_WIDTH`] characters.
    ///
    /// # Example
    /// ```
    /// use sais::{construct_with, Alphabet};
    ///
    /// let dna = Alphabet::new(b'A' as usize, b'T' as usize).unwrap();
    /// let sa = construct_with(b"GATTACA", dna).unwrap();
    ///
    /// assert_eq!(sa, vec![7, 6, 4, 1, 5, 0, 3, 2]);
    /// ```
    pub fn new(min: usize, max: usize) -> Result<Self, Error> {
        let width = max.checked_sub(min).and_then(|d| d.checked_add(1));
        if min == 0 || width.map_or(true, |w| w > Self::MAX_WIDTH) {
            return Err(Error::InvalidAlphabet { min, max });
        }
        Ok(Alphabet { min, max })
    }

    /// Window `[0, size)` of the names in a summary string.
    pub(crate) fn dense(size: usize) -> Self {
        debug_assert!(size > 0);
        Alphabet {
            min: 0,
            max: size - 1,
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    #[inline]
    pub fn contains(&self, c: usize) -> bool {
        self.min <= c && c <= self.max
    }

    /// 1 if `0` needs a bucket of its own in front of the window.
    #[inline]
    fn reserved(&self) -> usize {
        (self.min > 0) as usize
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.max - self.min + 1 + self.reserved()
    }

    /// Buckets follow character order, so `0` always comes first.
    #[inline]
    pub(crate) fn bucket_of(&self, c: usize) -> Option<usize> {
        if c == 0 {
            Some(0)
        } else if self.contains(c) {
            Some(c - self.min + self.reserved())
        } else {
            None
        }
    }

    /// Rejects the first character of `text` outside the window.
    pub(crate) fn validate<C: Char>(&self, text: &[C]) -> Result<(), Error> {
        match text.iter().position(|c| !self.contains(c.to_u())) {
            Some(position) => Err(Error::OutOfRange {
                position,
                value: text[position].to_u(),
                alphabet: *self,
            }),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::PRINTABLE
    }
}
