use crate::{Alphabet, Char, Error};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Bucket {
    /// first slot of the bucket's region; fixed once sizes are known
    start: usize,
    size: usize,
    head: usize,
    tail: usize,
}

/// Head/tail cursors for every character of an alphabet.
///
/// Slot 0 of the working array belongs to the sentinel, so the first region
/// starts at 1. Cursors are exhausted by a pass; call the matching reset
/// before the next one.
#[derive(Clone, Debug)]
pub(crate) struct BucketArray {
    alphabet: Alphabet,
    buckets: Vec<Bucket>,
}

impl BucketArray {
    pub(crate) fn new<C: Char>(s: &[C], alphabet: Alphabet) -> Result<Self, Error> {
        let mut buckets = vec![Bucket::default(); alphabet.bucket_count()];

        for (position, c) in s.iter().enumerate() {
            let value = c.to_u();
            let b = alphabet.bucket_of(value).ok_or(Error::OutOfRange {
                position,
                value,
                alphabet,
            })?;
            buckets[b].size += 1;
        }

        buckets.iter_mut().fold(1, |start, b| {
            b.start = start;
            start + b.size
        });

        let mut array = BucketArray { alphabet, buckets };
        array.reset_heads();
        array.reset_tails();
        Ok(array)
    }

    pub(crate) fn reset_heads(&mut self) {
        let mut offset = 1;
        for b in self.buckets.iter_mut() {
            b.head = offset;
            offset += b.size;
        }
    }

    pub(crate) fn reset_tails(&mut self) {
        let mut offset = 1;
        for b in self.buckets.iter_mut() {
            offset += b.size;
            b.tail = offset - 1;
        }
    }

    #[inline]
    fn index<C: Char>(&self, c: C) -> usize {
        match self.alphabet.bucket_of(c.to_u()) {
            Some(b) => b,
            None => unreachable!("character {:?} was never counted", c),
        }
    }

    /// Returns the head cursor of `c`'s bucket and moves it right.
    #[inline]
    pub(crate) fn next_head<C: Char>(&mut self, c: C) -> usize {
        let i = self.index(c);
        let b = &mut self.buckets[i];
        let slot = b.head;
        assert!(slot < b.start + b.size, "head of bucket {:?} overran", c);
        b.head += 1;
        slot
    }

    /// Returns the tail cursor of `c`'s bucket and moves it left.
    #[inline]
    pub(crate) fn next_tail<C: Char>(&mut self, c: C) -> usize {
        let i = self.index(c);
        let b = &mut self.buckets[i];
        let slot = b.tail;
        assert!(
            b.size > 0 && slot >= b.start,
            "tail of bucket {:?} overran",
            c
        );
        b.tail -= 1;
        slot
    }
}
