//! Collection utilities.

pub mod set_algebra;

pub use set_algebra::{difference, intersect, union, union_all};
