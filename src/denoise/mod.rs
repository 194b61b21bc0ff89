//! Patch-similarity denoising.

pub mod nlm;

pub use nlm::non_local_means;
