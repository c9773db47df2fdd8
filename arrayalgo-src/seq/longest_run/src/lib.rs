use std::{cmp::Reverse, collections::HashSet, hash::Hash, ops::RangeInclusive};

/// Integers with a checked predecessor and successor.
pub trait Step: Copy + Ord + Hash {
    fn pred(self) -> Option<Self>;
    fn succ(self) -> Option<Self>;
}

macro_rules! impl_step {
    ( $($ty:ty)* ) => { $(
        impl Step for $ty {
            fn pred(self) -> Option<Self> { self.checked_sub(1) }
            fn succ(self) -> Option<Self> { self.checked_add(1) }
        }
    )* }
}

impl_step! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

pub trait LongestRun {
    type Item;

    /// Returns the length of the longest run of consecutive values present
    /// in `self`, in any order. Duplicates count once.
    ///
    /// Runs in expected $O(n)$ time: only values whose predecessor is absent
    /// start a walk.
    ///
    /// ```
    /// use longest_run::LongestRun;
    ///
    /// assert_eq!([100_i32, 4, 200, 1, 3, 2].longest_run(), 4);
    /// ```
    fn longest_run(&self) -> usize;

    /// Returns the longest run itself, preferring the smallest start among
    /// runs of the same length, or [`None`] for an empty slice.
    fn longest_run_range(&self) -> Option<RangeInclusive<Self::Item>>;

    /// Same as [`longest_run`](LongestRun::longest_run), by sorting `self`
    /// first. $O(n\log n)$ time, no extra space.
    fn longest_run_sorted(&mut self) -> usize;
}

impl<T: Step> LongestRun for [T] {
    type Item = T;

    fn longest_run(&self) -> usize { longest(self).map_or(0, |(_, _, len)| len) }

    fn longest_run_range(&self) -> Option<RangeInclusive<T>> {
        longest(self).map(|(start, end, _)| start..=end)
    }

    fn longest_run_sorted(&mut self) -> usize {
        self.sort_unstable();
        let mut res = usize::from(!self.is_empty());
        let mut cur = 1;
        for w in self.windows(2) {
            if w[0] == w[1] {
                continue;
            }
            cur = if w[0].succ() == Some(w[1]) { cur + 1 } else { 1 };
            res = res.max(cur);
        }
        res
    }
}

fn longest<T: Step>(a: &[T]) -> Option<(T, T, usize)> {
    let set: HashSet<_> = a.iter().copied().collect();
    let mut res: Option<(T, T, usize)> = None;
    for &start in &set {
        if start.pred().is_some_and(|x| set.contains(&x)) {
            continue;
        }
        let mut end = start;
        let mut len = 1;
        while let Some(next) = end.succ().filter(|x| set.contains(x)) {
            end = next;
            len += 1;
        }
        if res.map_or(true, |(s, _, l)| (len, Reverse(start)) > (l, Reverse(s))) {
            res = Some((start, end, len));
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use randgen::{Distinct, Gen, Seq};

    use crate::*;

    #[test]
    fn sanity_check() {
        assert_eq!([100_i32, 4, 200, 1, 3, 2].longest_run(), 4);
        assert_eq!([100_i32, 4, 200, 1, 3, 2].longest_run_range(), Some(1..=4));
        assert_eq!([0_i32, 3, 7, 2, 5, 8, 4, 6, 0, 1].longest_run(), 9);
        assert_eq!([1_i32, 2, 0, 1].longest_run(), 3);
        assert_eq!([5_u8].longest_run(), 1);

        let empty: [i32; 0] = [];
        assert_eq!(empty.longest_run(), 0);
        assert_eq!(empty.longest_run_range(), None);
    }

    #[test]
    fn ties() {
        assert_eq!([10_i32, 11, 1, 2, 5].longest_run_range(), Some(1..=2));
        assert_eq!([7_i32, 3, -1].longest_run_range(), Some(-1..=-1));
    }

    #[test]
    fn bounds() {
        let a = [i32::MAX, i32::MAX - 1, i32::MIN, i32::MIN + 1, i32::MIN + 2];
        assert_eq!(a.longest_run(), 3);
        assert_eq!(a.longest_run_range(), Some(i32::MIN..=i32::MIN + 2));
        assert_eq!(a.clone().longest_run_sorted(), 3);

        let a = [u8::MAX, 0, 254, 1];
        assert_eq!(a.longest_run(), 2);
        assert_eq!(a.longest_run_range(), Some(0..=1));

        let mut a: Vec<_> = (0..=u8::MAX).rev().collect();
        assert_eq!(a.longest_run(), 256);
        assert_eq!(a.longest_run_sorted(), 256);
    }

    #[test]
    fn sorted_agrees() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        for len in 0..100 {
            for bound in [-5_i32..5, -50..50, -1000..1000] {
                let a = Seq { bound, len }.generate(&mut rng);
                let expected = a.clone().longest_run_sorted();
                assert_eq!(a.longest_run(), expected, "input: {a:?}");
                let run = a.longest_run_range();
                assert_eq!(run.clone().map_or(0, |r| r.count()), expected);
                assert!(run.into_iter().flatten().all(|x| a.contains(&x)));
            }
        }
    }

    #[test]
    fn shuffled_block() {
        let mut rng = ChaCha20Rng::from_seed([1; 32]);
        for len in [1, 10, 1000] {
            // every value of the bound is present
            let a = Distinct { bound: -7..len as i32 - 7, len }.generate(&mut rng);
            assert_eq!(a.longest_run(), len);
            assert_eq!(a.longest_run_range(), Some(-7..=len as i32 - 8));
        }
    }
}
