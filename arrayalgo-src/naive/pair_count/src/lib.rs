/// Number of pairs `(i, j)`, `i < j`, with `pred(&a[i], &a[j])`.
pub fn count_pairs<T>(a: &[T], mut pred: impl FnMut(&T, &T) -> bool) -> i64 {
    let n = a.len();
    let mut res = 0;
    for i in 0..n {
        for j in i + 1..n {
            if pred(&a[i], &a[j]) {
                res += 1;
            }
        }
    }
    res
}

#[test]
fn sanity_check() {
    let a = [5, 3, 2, 1];
    assert_eq!(count_pairs(&a, |l, r| l > r), 6);
    assert_eq!(count_pairs(&a, |l, r| l < r), 0);
    assert_eq!(count_pairs(&a, |_, _| true), 6);

    let a = [1, 3, 2, 3, 1];
    assert_eq!(count_pairs(&a, |&l, &r| l > 2 * r), 2);

    let empty: [i32; 0] = [];
    assert_eq!(count_pairs(&empty, |_, _| true), 0);
}
