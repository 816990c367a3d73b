pub use crate::cube::*;
pub use crate::history::*;
pub use crate::r#move::*;
pub use crate::scramble::*;

#[cfg(test)]
pub use crate::test::*;
