/// Number of right/down paths through an `h` by `w` grid, one row at a time.
///
/// # Panics
/// Panics if `h` or `w` is zero, or if the count does not fit in `u64`.
pub fn grid_paths(h: u32, w: u32) -> u64 {
    assert!(h >= 1 && w >= 1, "grid must be at least 1x1, got {h}x{w}");

    let mut dp = vec![1_u64; w as usize];
    for _ in 1..h {
        for j in 1..w as usize {
            dp[j] = dp[j]
                .checked_add(dp[j - 1])
                .unwrap_or_else(|| panic!("path count overflows u64"));
        }
    }
    dp[w as usize - 1]
}

#[test]
fn sanity_check() {
    assert_eq!(grid_paths(1, 1), 1);
    assert_eq!(grid_paths(3, 2), 3);
    assert_eq!(grid_paths(2, 3), 3);
    assert_eq!(grid_paths(3, 7), 28);
    assert_eq!(grid_paths(1, 100), 1);
    assert_eq!(grid_paths(10, 10), 48620);
}

#[test]
#[should_panic]
fn empty_grid() { grid_paths(0, 3); }
