//! Password generation.

pub mod charset;
mod generate;

pub use generate::entropy_bits;
pub use generate::generate;
pub use generate::strength;
