use std::{collections::BTreeSet, ops::Range};

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` independent draws from `bound`.
pub struct Seq<B> {
    pub bound: B,
    pub len: usize,
}

/// `len` distinct values from `bound`, in random order.
pub struct Distinct<B> {
    pub bound: B,
    pub len: usize,
}

/// `len` values clustered around `MIN`, `MIN / 2`, `0`, `MAX / 2` and `MAX`,
/// where doubling and successor arithmetic are most likely to overflow.
pub struct Extreme {
    pub len: usize,
}

macro_rules! impl_range {
    ( $($ty:ty)* ) => { $(
        impl Gen for Range<$ty> {
            type Output = $ty;
            fn generate<R: Rng>(&self, rng: &mut R) -> $ty {
                let between = Uniform::from(self.clone());
                between.sample(rng)
            }
        }
    )* }
}

impl_range! { i32 i64 u32 usize }

impl<B: Gen> Gen for Seq<B> {
    type Output = Vec<B::Output>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        (0..self.len).map(|_| self.bound.generate(rng)).collect()
    }
}

impl Gen for Distinct<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound: Range { start, end }, len } = self;
        assert!(*len as i64 <= *end as i64 - *start as i64);

        // n = end - start, k = len
        let dense = (2 * len) as i64 > (*end as i64 - *start as i64) / 2;
        let count = if dense { (*end - *start) as usize - len } else { *len };

        let mut seen = BTreeSet::new();
        while seen.len() < count {
            seen.insert((*start..*end).generate(rng));
        }

        let mut res: Vec<_> = if dense {
            (*start..*end).filter(|x| !seen.contains(x)).collect()
        } else {
            seen.into_iter().collect()
        };
        res.shuffle(rng);
        res
    }
}

impl Gen for Extreme {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        const CENTERS: [i32; 5] =
            [i32::MIN, i32::MIN / 2, 0, i32::MAX / 2, i32::MAX];
        (0..self.len)
            .map(|_| {
                let center = CENTERS[(0..CENTERS.len()).generate(rng)];
                center.saturating_add((-3_i32..4).generate(rng))
            })
            .collect()
    }
}
