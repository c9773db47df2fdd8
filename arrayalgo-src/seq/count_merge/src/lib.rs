//! Merge sort that counts cross pairs while it sorts.
//!
//! At every merge step the two halves are already sorted, so pairs `(i, j)`
//! with `i` in the left half and `j` in the right half can be counted in
//! linear time. How they are counted is decided by a [`CrossCount`]
//! strategy; the order in which elements are merged is decided by a
//! comparator `take_left(l, r)`.
//!
//! ```
//! use count_merge::{CountMerge, Inline, PrePass};
//!
//! // inversions: `l > r`, counted while merging
//! let mut a = vec![5, 3, 2, 1];
//! assert_eq!(a.count_merge(Inline, |l, r| l <= r), 6);
//! assert_eq!(a, [1, 2, 3, 5]);
//!
//! // `l >= r + 2`, counted by a two-pointer pass before merging
//! let mut a = vec![4, 1, 3, 2];
//! let pred = |&l: &i32, &r: &i32| l >= r + 2;
//! assert_eq!(a.count_merge(PrePass(pred), |l, r| l < r), 2);
//! assert_eq!(a, [1, 2, 3, 4]);
//! ```

/// Counting strategy applied at each merge step.
///
/// The total returned by [`CountMerge::count_merge`] is the sum, over all
/// merge steps, of [`pre_pass`] plus every [`on_take_right`].
///
/// [`pre_pass`]: CrossCount::pre_pass
/// [`on_take_right`]: CrossCount::on_take_right
pub trait CrossCount<T> {
    /// Called with both sorted halves before they are merged.
    fn pre_pass(&mut self, _left: &[T], _right: &[T]) -> i64 { 0 }

    /// Called whenever a right element is merged while `pending` left
    /// elements are still waiting.
    fn on_take_right(&mut self, _pending: usize) -> i64 { 0 }
}

/// Counts during the merge itself.
///
/// Each right element taken ahead of `pending` left elements forms a pair
/// with every one of them. This is exact when `take_left(l, r)` is the
/// negation of the cross-condition, as for inversions (`l > r` against the
/// comparator `l <= r`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Inline;

impl<T> CrossCount<T> for Inline {
    fn on_take_right(&mut self, pending: usize) -> i64 { pending as i64 }
}

/// Counts with a two-pointer scan before the merge.
///
/// `pred(l, r)` must be monotone on sorted halves: if it holds for `l` and
/// some `r`, it holds for every larger `l` and every smaller `r`. Under that
/// assumption the right pointer never moves back, and each scan is linear.
#[derive(Clone, Copy, Debug)]
pub struct PrePass<F>(pub F);

impl<T, F: FnMut(&T, &T) -> bool> CrossCount<T> for PrePass<F> {
    fn pre_pass(&mut self, left: &[T], right: &[T]) -> i64 {
        let pred = &mut self.0;
        let mut j = 0;
        let mut res = 0;
        for l in left {
            while j < right.len() && pred(l, &right[j]) {
                j += 1;
            }
            res += j as i64;
        }
        res
    }
}

pub trait CountMerge {
    type Item;

    /// Sorts `self` in place and returns the number of pairs `(i, j)`,
    /// `i < j`, counted by `strategy`.
    ///
    /// After the call `self` is ordered according to `take_left`; with the
    /// usual `l <= r` or `l < r` this is non-descending.
    ///
    /// Runs in $O(n\log n)$ time with a single scratch buffer of length $n$.
    fn count_merge<S: CrossCount<Self::Item>>(
        &mut self,
        strategy: S,
        take_left: impl FnMut(&Self::Item, &Self::Item) -> bool,
    ) -> i64;
}

impl<T: Clone> CountMerge for [T] {
    type Item = T;
    fn count_merge<S: CrossCount<T>>(
        &mut self,
        mut strategy: S,
        mut take_left: impl FnMut(&T, &T) -> bool,
    ) -> i64 {
        if self.len() <= 1 {
            return 0;
        }
        let mut buf = self.to_vec();
        count_rec(self, &mut buf, &mut strategy, &mut take_left)
    }
}

fn count_rec<T: Clone, S: CrossCount<T>>(
    a: &mut [T],
    buf: &mut [T],
    strategy: &mut S,
    take_left: &mut impl FnMut(&T, &T) -> bool,
) -> i64 {
    let n = a.len();
    if n <= 1 {
        return 0;
    }

    let mid = n / 2;
    let mut res = 0;
    {
        let (al, ar) = a.split_at_mut(mid);
        let (bl, br) = buf.split_at_mut(mid);
        res += count_rec(al, bl, strategy, take_left);
        res += count_rec(ar, br, strategy, take_left);
    }
    res += strategy.pre_pass(&a[..mid], &a[mid..]);
    res + merge(a, mid, buf, strategy, take_left)
}

fn merge<T: Clone, S: CrossCount<T>>(
    a: &mut [T],
    mid: usize,
    buf: &mut [T],
    strategy: &mut S,
    take_left: &mut impl FnMut(&T, &T) -> bool,
) -> i64 {
    let n = a.len();
    let (mut i, mut j) = (0, mid);
    let mut res = 0;
    while i < mid && j < n {
        // `buf[..i + j - mid]` is filled
        if take_left(&a[i], &a[j]) {
            buf[i + j - mid] = a[i].clone();
            i += 1;
        } else {
            buf[i + j - mid] = a[j].clone();
            res += strategy.on_take_right(mid - i);
            j += 1;
        }
    }

    // at most one of the halves still has elements
    let k = i + j - mid;
    buf[k..k + mid - i].clone_from_slice(&a[i..mid]);
    buf[j..].clone_from_slice(&a[j..]);
    a.clone_from_slice(buf);
    res
}
