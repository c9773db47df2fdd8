use count_merge::{CountMerge, PrePass};

pub trait ReversePairs {
    /// Returns the number of pairs `(i, j)` with `i < j` and
    /// `self[i] > 2 * self[j]`, and sorts `self` in non-descending order.
    ///
    /// Both sides are compared in a wider type, so `2 * self[j]` never
    /// overflows.
    ///
    /// ```
    /// use reverse_pairs::ReversePairs;
    ///
    /// let mut a = vec![2_i32, 4, 3, 5, 1];
    /// assert_eq!(a.reverse_pairs(), 3);
    /// assert_eq!(a, [1, 2, 3, 4, 5]);
    ///
    /// let mut a = vec![i32::MAX, i32::MAX / 2, i32::MAX];
    /// assert_eq!(a.reverse_pairs(), 1);
    /// ```
    fn reverse_pairs(&mut self) -> i64;
}

macro_rules! impl_int {
    ( $( ($ty:ty, $wide:ty), )* ) => { $(
        impl ReversePairs for [$ty] {
            fn reverse_pairs(&mut self) -> i64 {
                let pred = |&l: &$ty, &r: &$ty| (l as $wide) > 2 * (r as $wide);
                self.count_merge(PrePass(pred), |l, r| l < r)
            }
        }
    )* }
}

impl_int! {
    (i8, i16),
    (i16, i32),
    (i32, i64),
    (i64, i128),
    (isize, i128),
    (u8, u16),
    (u16, u32),
    (u32, u64),
    (u64, u128),
    (usize, u128),
}
