//! Various unsorted geometrical and numerical operators.

pub use self::lowest_root::solve_lowest_root;
pub use self::point_in_triangle::is_point_in_triangle;

mod lowest_root;
mod point_in_triangle;
