inner::doc_inline_reexport! {
    pair_count,
    grid_dp,
}
