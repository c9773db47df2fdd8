//! Counting merge-sort and a handful of array problems around it.
//!
//! Every algorithm lives in its own crate; the category crates re-export them.
//!
//! ```
//! use arrayalgo::{
//!     math::lattice_paths,
//!     seq::{Inversion, LongestRun, MajorityVote, ReversePairs},
//! };
//!
//! let mut a = vec![5, 3, 2, 1];
//! assert_eq!(a.inversion(), 6);
//! assert_eq!(a, [1, 2, 3, 5]);
//!
//! let mut a = vec![1_i32, 3, 2, 3, 1];
//! assert_eq!(a.reverse_pairs(), 2);
//!
//! assert_eq!([100_i32, 4, 200, 1, 3, 2].longest_run(), 4);
//!
//! let a = [1, 1, 1, 3, 3, 2, 2, 2];
//! assert_eq!(a.majority_vote_third(), [(&1, 3), (&2, 3)]);
//!
//! assert_eq!(lattice_paths(3, 2), 3);
//! ```

#[doc(inline)]
pub use math;
#[doc(inline)]
pub use naive;
#[doc(inline)]
pub use seq;
