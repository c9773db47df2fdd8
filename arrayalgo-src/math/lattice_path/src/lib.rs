//! Monotone lattice paths in a grid.
//!
//! A path through an $h\times w$ grid makes $h-1$ down moves and $w-1$
//! right moves, so there are $\binom{h+w-2}{\min(h,w)-1}$ of them.

#[cfg(feature = "bigint")]
use num_bigint::BigUint;

/// $\binom{n}{k}$, or [`None`] if it does not fit in `u64`.
///
/// Multiplies and divides one factor at a time; after step $i$ the running
/// value is $\binom{n-k+i}{i}$, so nothing larger than the answer is ever
/// stored.
///
/// ```
/// use lattice_path::checked_binom;
///
/// assert_eq!(checked_binom(10, 3), Some(120));
/// assert_eq!(checked_binom(3, 10), Some(0));
/// assert_eq!(checked_binom(68, 34), None);
/// ```
pub fn checked_binom(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut res = 1_u64;
    for i in 1..=k {
        let tmp = res as u128 * (n - k + i) as u128 / i as u128;
        res = tmp.try_into().ok()?;
    }
    Some(res)
}

/// Number of right/down paths from one corner of an `h` by `w` grid to the
/// opposite one, or [`None`] if the grid is empty or the count does not fit
/// in `u64`.
pub fn checked_lattice_paths(h: u32, w: u32) -> Option<u64> {
    if h == 0 || w == 0 {
        return None;
    }
    let (h, w) = (u64::from(h) - 1, u64::from(w) - 1);
    checked_binom(h + w, h.min(w))
}

/// Number of right/down paths from one corner of an `h` by `w` grid to the
/// opposite one.
///
/// ```
/// use lattice_path::lattice_paths;
///
/// assert_eq!(lattice_paths(3, 2), 3);
/// assert_eq!(lattice_paths(1, 1), 1);
/// assert_eq!(lattice_paths(3, 7), 28);
/// ```
///
/// # Panics
/// Panics if `h` or `w` is zero, or if the count does not fit in `u64`.
pub fn lattice_paths(h: u32, w: u32) -> u64 {
    assert!(h >= 1 && w >= 1, "grid must be at least 1x1, got {h}x{w}");
    checked_lattice_paths(h, w).unwrap_or_else(|| {
        panic!("number of paths in a {h}x{w} grid overflows u64")
    })
}

/// Same as [`lattice_paths`], without overflow.
///
/// # Panics
/// Panics if `h` or `w` is zero.
#[cfg(feature = "bigint")]
pub fn lattice_paths_big(h: u32, w: u32) -> BigUint {
    assert!(h >= 1 && w >= 1, "grid must be at least 1x1, got {h}x{w}");
    let (h, w) = (u64::from(h) - 1, u64::from(w) - 1);
    let (n, k) = (h + w, h.min(w));
    (1..=k).fold(BigUint::from(1_u32), |acc, i| acc * (n - k + i) / i)
}
