//! Helpers shared by the category crates.

/// Re-exports each listed crate both as a module and as a glob, so that its
/// items are documented inline in the category crate.
///
/// ```ignore
/// inner::doc_inline_reexport! {
///     inversion,
///     reverse_pairs,
/// }
/// ```
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
