pub trait MajorityVote {
    type Item;

    /// Returns every element occurring more than `n / 3` times, with its
    /// number of occurrences.
    ///
    /// At most two elements qualify. Two candidates are voted for in one
    /// pass and verified in a second; the first candidate comes first.
    ///
    /// ```
    /// use majority_vote::MajorityVote;
    ///
    /// let a = [1, 1, 1, 3, 3, 2, 2, 2];
    /// assert_eq!(a.majority_vote_third(), [(&1, 3), (&2, 3)]);
    /// ```
    fn majority_vote_third(&self) -> Vec<(&Self::Item, usize)>;
}

impl<T: Eq> MajorityVote for [T] {
    type Item = T;
    fn majority_vote_third(&self) -> Vec<(&T, usize)> {
        let mut cand: [Option<&T>; 2] = [None, None];
        let mut vote = [0_usize; 2];
        for x in self {
            // a slot is taken over only by a value the other slot does not
            // already hold, so the candidates stay distinct
            if vote[0] == 0 && cand[1] != Some(x) {
                cand[0] = Some(x);
                vote[0] = 1;
            } else if vote[1] == 0 && cand[0] != Some(x) {
                cand[1] = Some(x);
                vote[1] = 1;
            } else if cand[0] == Some(x) {
                vote[0] += 1;
            } else if cand[1] == Some(x) {
                vote[1] += 1;
            } else {
                vote[0] -= 1;
                vote[1] -= 1;
            }
        }

        let mut occ = [0_usize; 2];
        for x in self {
            if cand[0] == Some(x) {
                occ[0] += 1;
            } else if cand[1] == Some(x) {
                occ[1] += 1;
            }
        }

        let n = self.len();
        cand.into_iter()
            .zip(occ)
            .filter(|&(_, k)| k > n / 3)
            .filter_map(|(c, k)| Some((c?, k)))
            .collect()
    }
}
