//! Shared result types for reference resolution.

mod candidate;

pub use candidate::{Confidence, ResolutionCandidate};
