inner::doc_inline_reexport! {
    count_merge,
    inversion,
    reverse_pairs,
    longest_run,
    majority_vote,
}
