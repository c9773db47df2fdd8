use count_merge::{CountMerge, Inline};

pub trait Inversion {
    /// Returns the number of pairs `(i, j)` with `i < j` and
    /// `self[i] > self[j]`, and sorts `self` in non-descending order.
    ///
    /// Equal elements never form an inversion.
    ///
    /// ```
    /// use inversion::Inversion;
    ///
    /// let mut a = vec![5, 3, 2, 1];
    /// assert_eq!(a.inversion(), 6);
    /// assert_eq!(a, [1, 2, 3, 5]);
    /// assert_eq!(a.inversion(), 0);
    /// ```
    fn inversion(&mut self) -> i64;
}

impl<T: Ord + Clone> Inversion for [T] {
    fn inversion(&mut self) -> i64 { self.count_merge(Inline, |l, r| l <= r) }
}
