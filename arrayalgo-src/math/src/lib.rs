inner::doc_inline_reexport! {
    lattice_path,
}
