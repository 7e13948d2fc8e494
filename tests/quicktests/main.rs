#[macro_use]
extern crate quickcheck_macros;

mod binary_tree;
mod linked_list;
