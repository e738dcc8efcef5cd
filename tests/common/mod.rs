#![allow(dead_code)]
#![allow(unused_imports)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_attitude_eq, assert_vector_eq};
pub use fixtures::*;
