pub mod format;
pub mod normalizer;

pub use normalizer::normalize;
